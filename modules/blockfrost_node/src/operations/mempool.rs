use blockfrost_node_common::{pagination::PaginationStyle, transport::HttpMethod};

use super::{Backend, BodyKind, Category, OperationDefinition};
use crate::fields::Field;

const BASE: OperationDefinition = OperationDefinition {
    category: Category::Mempool,
    operation: "",
    name: "",
    description: "",
    method: HttpMethod::Get,
    path: "/mempool",
    fields: &[],
    non_empty: &[],
    pagination: PaginationStyle::CountPageOrder,
    backend: Backend::Direct,
    body: BodyKind::None,
};

pub(super) const OPERATIONS: &[OperationDefinition] = &[
    OperationDefinition {
        operation: "getMempool",
        name: "Get Mempool",
        description: "Transactions currently waiting in the mempool",
        ..BASE
    },
    OperationDefinition {
        operation: "getMempoolTransaction",
        name: "Get Mempool Transaction",
        description: "Content of a specific transaction in the mempool",
        path: "/mempool/{txHash}",
        fields: &[Field::TxHash],
        pagination: PaginationStyle::None,
        ..BASE
    },
    OperationDefinition {
        operation: "getMempoolByAddress",
        name: "Get Mempool by Address",
        description: "Mempool transactions involving a specific address",
        path: "/mempool/addresses/{address}",
        fields: &[Field::Address],
        ..BASE
    },
];
