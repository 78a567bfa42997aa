use blockfrost_node_common::{pagination::PaginationStyle, transport::HttpMethod};

use super::{Backend, BodyKind, Category, OperationDefinition};
use crate::fields::Field;

const BASE: OperationDefinition = OperationDefinition {
    category: Category::Scripts,
    operation: "",
    name: "",
    description: "",
    method: HttpMethod::Get,
    path: "/scripts/{scriptHash}",
    fields: &[Field::ScriptHash],
    non_empty: &[],
    pagination: PaginationStyle::None,
    backend: Backend::Direct,
    body: BodyKind::None,
};

const DATUM: OperationDefinition = OperationDefinition {
    path: "/scripts/datum/{datumHash}",
    fields: &[Field::DatumHash],
    ..BASE
};

pub(super) const OPERATIONS: &[OperationDefinition] = &[
    OperationDefinition {
        operation: "getScripts",
        name: "Get Scripts",
        description: "List of scripts",
        path: "/scripts",
        fields: &[],
        pagination: PaginationStyle::CountPageOrder,
        ..BASE
    },
    OperationDefinition {
        operation: "getScript",
        name: "Get Script",
        description: "Information about a specific script",
        ..BASE
    },
    OperationDefinition {
        operation: "getScriptJson",
        name: "Get Script JSON",
        description: "JSON representation of a timelock script",
        path: "/scripts/{scriptHash}/json",
        ..BASE
    },
    OperationDefinition {
        operation: "getScriptCbor",
        name: "Get Script CBOR",
        description: "CBOR representation of a Plutus script",
        path: "/scripts/{scriptHash}/cbor",
        ..BASE
    },
    OperationDefinition {
        operation: "getScriptRedeemers",
        name: "Get Script Redeemers",
        description: "List of redeemers of a specific script",
        path: "/scripts/{scriptHash}/redeemers",
        pagination: PaginationStyle::CountPageOrder,
        ..BASE
    },
    OperationDefinition {
        operation: "getDatum",
        name: "Get Datum",
        description: "Query JSON value of a datum by its hash",
        ..DATUM
    },
    OperationDefinition {
        operation: "getDatumCbor",
        name: "Get Datum CBOR",
        description: "Query CBOR serialised datum by its hash",
        path: "/scripts/datum/{datumHash}/cbor",
        ..DATUM
    },
];
