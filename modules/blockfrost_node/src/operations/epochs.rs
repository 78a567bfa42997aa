use blockfrost_node_common::{pagination::PaginationStyle, transport::HttpMethod};

use super::{Backend, BodyKind, Category, OperationDefinition};
use crate::fields::Field;

const BASE: OperationDefinition = OperationDefinition {
    category: Category::Epochs,
    operation: "",
    name: "",
    description: "",
    method: HttpMethod::Get,
    path: "/epochs/{epochNumber}",
    fields: &[Field::EpochNumber],
    non_empty: &[],
    pagination: PaginationStyle::None,
    backend: Backend::Direct,
    body: BodyKind::None,
};

pub(super) const OPERATIONS: &[OperationDefinition] = &[
    OperationDefinition {
        operation: "getLatestEpoch",
        name: "Get Latest Epoch",
        description: "Return the information about the latest, therefore current, epoch",
        path: "/epochs/latest",
        fields: &[],
        ..BASE
    },
    OperationDefinition {
        operation: "getLatestEpochParameters",
        name: "Get Latest Epoch Parameters",
        description: "Return the protocol parameters for the latest epoch",
        path: "/epochs/latest/parameters",
        fields: &[],
        ..BASE
    },
    OperationDefinition {
        operation: "getEpoch",
        name: "Get Epoch",
        description: "Return the content of the requested epoch",
        ..BASE
    },
    OperationDefinition {
        operation: "getNextEpochs",
        name: "Get Next Epochs",
        description: "Return the list of epochs following a specific epoch",
        path: "/epochs/{epochNumber}/next",
        pagination: PaginationStyle::CountPage,
        ..BASE
    },
    OperationDefinition {
        operation: "getPreviousEpochs",
        name: "Get Previous Epochs",
        description: "Return the list of epochs preceding a specific epoch",
        path: "/epochs/{epochNumber}/previous",
        pagination: PaginationStyle::CountPage,
        ..BASE
    },
    OperationDefinition {
        operation: "getEpochStakes",
        name: "Get Epoch Stakes",
        description: "Return the active stake distribution for the specified epoch",
        path: "/epochs/{epochNumber}/stakes",
        pagination: PaginationStyle::CountPage,
        ..BASE
    },
    OperationDefinition {
        operation: "getEpochStakesByPool",
        name: "Get Epoch Stakes by Pool",
        description: "Return the active stake distribution for the epoch specified by stake pool",
        path: "/epochs/{epochNumber}/stakes/{poolId}",
        fields: &[Field::EpochNumber, Field::PoolId],
        pagination: PaginationStyle::CountPage,
        ..BASE
    },
    OperationDefinition {
        operation: "getEpochBlocks",
        name: "Get Epoch Blocks",
        description: "Return the blocks minted for the epoch specified",
        path: "/epochs/{epochNumber}/blocks",
        pagination: PaginationStyle::CountPageOrder,
        ..BASE
    },
    OperationDefinition {
        operation: "getEpochBlocksByPool",
        name: "Get Epoch Blocks by Pool",
        description: "Return the blocks minted for the epoch specified by stake pool",
        path: "/epochs/{epochNumber}/blocks/{poolId}",
        fields: &[Field::EpochNumber, Field::PoolId],
        pagination: PaginationStyle::CountPageOrder,
        ..BASE
    },
    OperationDefinition {
        operation: "getEpochParameters",
        name: "Get Epoch Parameters",
        description: "Return the protocol parameters for the epoch specified",
        path: "/epochs/{epochNumber}/parameters",
        ..BASE
    },
];
