use blockfrost_node_common::{pagination::PaginationStyle, transport::HttpMethod};

use super::{Backend, BodyKind, Category, OperationDefinition};
use crate::fields::Field;

const BASE: OperationDefinition = OperationDefinition {
    category: Category::Pools,
    operation: "",
    name: "",
    description: "",
    method: HttpMethod::Get,
    path: "/pools/{poolId}",
    fields: &[Field::PoolId],
    non_empty: &[],
    pagination: PaginationStyle::CountPageOrder,
    backend: Backend::Direct,
    body: BodyKind::None,
};

const LISTING: OperationDefinition = OperationDefinition {
    fields: &[],
    ..BASE
};

pub(super) const OPERATIONS: &[OperationDefinition] = &[
    OperationDefinition {
        operation: "getPools",
        name: "Get Pools",
        description: "List of registered stake pools",
        path: "/pools",
        ..LISTING
    },
    OperationDefinition {
        operation: "getPoolsExtended",
        name: "Get Pools Extended",
        description: "List of registered stake pools with additional information",
        path: "/pools/extended",
        ..LISTING
    },
    OperationDefinition {
        operation: "getRetiredPools",
        name: "Get Retired Pools",
        description: "List of already retired pools",
        path: "/pools/retired",
        ..LISTING
    },
    OperationDefinition {
        operation: "getRetiringPools",
        name: "Get Retiring Pools",
        description: "List of stake pools retiring in the upcoming epochs",
        path: "/pools/retiring",
        ..LISTING
    },
    OperationDefinition {
        operation: "getPool",
        name: "Get Pool",
        description: "Pool information",
        pagination: PaginationStyle::None,
        ..BASE
    },
    OperationDefinition {
        operation: "getPoolHistory",
        name: "Get Pool History",
        description: "History of stake pool parameters over epochs",
        path: "/pools/{poolId}/history",
        ..BASE
    },
    OperationDefinition {
        operation: "getPoolMetadata",
        name: "Get Pool Metadata",
        description: "Stake pool registration metadata",
        path: "/pools/{poolId}/metadata",
        pagination: PaginationStyle::None,
        ..BASE
    },
    OperationDefinition {
        operation: "getPoolRelays",
        name: "Get Pool Relays",
        description: "Relays of a stake pool",
        path: "/pools/{poolId}/relays",
        pagination: PaginationStyle::None,
        ..BASE
    },
    OperationDefinition {
        operation: "getPoolDelegators",
        name: "Get Pool Delegators",
        description: "List of current stake pool delegators",
        path: "/pools/{poolId}/delegators",
        ..BASE
    },
    OperationDefinition {
        operation: "getPoolBlocks",
        name: "Get Pool Blocks",
        description: "List of stake pool blocks",
        path: "/pools/{poolId}/blocks",
        ..BASE
    },
    OperationDefinition {
        operation: "getPoolUpdates",
        name: "Get Pool Updates",
        description: "List of certificate updates to the stake pool",
        path: "/pools/{poolId}/updates",
        ..BASE
    },
    OperationDefinition {
        operation: "getPoolVotes",
        name: "Get Pool Votes",
        description: "History of stake pool votes",
        path: "/pools/{poolId}/votes",
        ..BASE
    },
];
