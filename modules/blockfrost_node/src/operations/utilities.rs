use blockfrost_node_common::{pagination::PaginationStyle, transport::HttpMethod};

use super::{Backend, BodyKind, Category, OperationDefinition};
use crate::fields::Field;

const EVALUATE: OperationDefinition = OperationDefinition {
    category: Category::Utilities,
    operation: "",
    name: "",
    description: "",
    method: HttpMethod::Post,
    path: "/utils/txs/evaluate",
    fields: &[Field::TransactionCbor],
    non_empty: &[],
    pagination: PaginationStyle::None,
    backend: Backend::Direct,
    body: BodyKind::Cbor,
};

pub(super) const OPERATIONS: &[OperationDefinition] = &[
    OperationDefinition {
        operation: "deriveAddress",
        name: "Derive Address",
        description: "Derive Shelley address from an xpub",
        method: HttpMethod::Get,
        path: "/utils/addresses/xpub/{xpub}/{role}/{index}",
        fields: &[Field::Xpub, Field::Role, Field::Index],
        body: BodyKind::None,
        ..EVALUATE
    },
    OperationDefinition {
        operation: "evaluateTransaction",
        name: "Evaluate Transaction",
        description: "Submit a transaction for execution units evaluation",
        ..EVALUATE
    },
    OperationDefinition {
        operation: "evaluateTransactionUtxos",
        name: "Evaluate Transaction with UTXOs",
        description: "Submit a transaction for execution units evaluation, with additional UTXO set",
        path: "/utils/txs/evaluate/utxos",
        fields: &[Field::TransactionCbor, Field::AdditionalUtxos],
        body: BodyKind::CborWithUtxos,
        ..EVALUATE
    },
];
