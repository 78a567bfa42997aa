use blockfrost_node_common::{pagination::PaginationStyle, transport::HttpMethod};

use super::{Backend, BodyKind, Category, OperationDefinition};
use crate::fields::Field;

const BASE: OperationDefinition = OperationDefinition {
    category: Category::Blocks,
    operation: "",
    name: "",
    description: "",
    method: HttpMethod::Get,
    path: "/blocks/{hashOrNumber}",
    fields: &[Field::HashOrNumber],
    non_empty: &[Field::HashOrNumber],
    pagination: PaginationStyle::None,
    backend: Backend::Direct,
    body: BodyKind::None,
};

pub(super) const OPERATIONS: &[OperationDefinition] = &[
    OperationDefinition {
        operation: "getLatestBlock",
        name: "Get Latest Block",
        description: "Return the latest block available to the backends",
        path: "/blocks/latest",
        fields: &[],
        non_empty: &[],
        ..BASE
    },
    OperationDefinition {
        operation: "getLatestBlockTransactions",
        name: "Get Latest Block Transactions",
        description: "Return the transactions within the latest block",
        path: "/blocks/latest/txs",
        fields: &[],
        non_empty: &[],
        pagination: PaginationStyle::CountPageOrder,
        ..BASE
    },
    OperationDefinition {
        operation: "getBlock",
        name: "Get Block",
        description: "Return the content of a requested block",
        ..BASE
    },
    OperationDefinition {
        operation: "getBlockInSlot",
        name: "Get Block in Slot",
        description: "Return the content of the block in a specific slot",
        path: "/blocks/slot/{slotNumber}",
        fields: &[Field::SlotNumber],
        non_empty: &[],
        ..BASE
    },
    OperationDefinition {
        operation: "getBlockInEpochSlot",
        name: "Get Block in Epoch Slot",
        description: "Return the content of the block in a specific slot of an epoch",
        path: "/blocks/epoch/{epochNumber}/slot/{epochSlotNumber}",
        fields: &[Field::EpochNumber, Field::EpochSlotNumber],
        non_empty: &[],
        ..BASE
    },
    OperationDefinition {
        operation: "getNextBlocks",
        name: "Get Next Blocks",
        description: "Return the list of blocks following a specific block",
        path: "/blocks/{hashOrNumber}/next",
        pagination: PaginationStyle::CountPage,
        ..BASE
    },
    OperationDefinition {
        operation: "getPreviousBlocks",
        name: "Get Previous Blocks",
        description: "Return the list of blocks preceding a specific block",
        path: "/blocks/{hashOrNumber}/previous",
        pagination: PaginationStyle::CountPage,
        ..BASE
    },
    OperationDefinition {
        operation: "getBlockTransactions",
        name: "Get Block Transactions",
        description: "Return the transactions within a block",
        path: "/blocks/{hashOrNumber}/txs",
        pagination: PaginationStyle::CountPageOrder,
        ..BASE
    },
    OperationDefinition {
        operation: "getBlockAddresses",
        name: "Get Block Addresses",
        description: "Return the addresses affected by a block",
        path: "/blocks/{hashOrNumber}/addresses",
        pagination: PaginationStyle::CountPage,
        ..BASE
    },
];
