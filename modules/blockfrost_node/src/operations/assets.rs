use blockfrost_node_common::{pagination::PaginationStyle, transport::HttpMethod};

use super::{Backend, BodyKind, Category, OperationDefinition};
use crate::fields::Field;

const BASE: OperationDefinition = OperationDefinition {
    category: Category::Assets,
    operation: "",
    name: "",
    description: "",
    method: HttpMethod::Get,
    path: "/assets/{asset}",
    fields: &[Field::Asset],
    non_empty: &[],
    pagination: PaginationStyle::CountPageOrder,
    backend: Backend::Direct,
    body: BodyKind::None,
};

pub(super) const OPERATIONS: &[OperationDefinition] = &[
    OperationDefinition {
        operation: "getAssets",
        name: "Get Assets",
        description: "List of all assets",
        path: "/assets",
        fields: &[],
        ..BASE
    },
    OperationDefinition {
        operation: "getAsset",
        name: "Get Asset",
        description: "Information about a specific asset",
        pagination: PaginationStyle::None,
        ..BASE
    },
    OperationDefinition {
        operation: "getAssetHistory",
        name: "Get Asset History",
        description: "History of a specific asset",
        path: "/assets/{asset}/history",
        ..BASE
    },
    OperationDefinition {
        operation: "getAssetTransactions",
        name: "Get Asset Transactions",
        description: "List of transactions of a specific asset",
        path: "/assets/{asset}/transactions",
        ..BASE
    },
    OperationDefinition {
        operation: "getAssetAddresses",
        name: "Get Asset Addresses",
        description: "List of addresses containing a specific asset",
        path: "/assets/{asset}/addresses",
        ..BASE
    },
    OperationDefinition {
        operation: "getAssetsByPolicy",
        name: "Get Assets by Policy",
        description: "List of assets minted under a specific policy",
        path: "/assets/policy/{policyId}",
        fields: &[Field::PolicyId],
        ..BASE
    },
];
