use blockfrost_node_common::{pagination::PaginationStyle, transport::HttpMethod};

use super::{Backend, BodyKind, Category, OperationDefinition};
use crate::fields::Field;

const BASE: OperationDefinition = OperationDefinition {
    category: Category::Transactions,
    operation: "",
    name: "",
    description: "",
    method: HttpMethod::Get,
    path: "/txs/{txHash}",
    fields: &[Field::TxHash],
    non_empty: &[],
    pagination: PaginationStyle::None,
    backend: Backend::Direct,
    body: BodyKind::None,
};

pub(super) const OPERATIONS: &[OperationDefinition] = &[
    OperationDefinition {
        operation: "getTransaction",
        name: "Get Transaction",
        description: "Return content of the requested transaction",
        ..BASE
    },
    OperationDefinition {
        operation: "getTransactionUtxos",
        name: "Get Transaction UTXOs",
        description: "Return the inputs and UTXOs of the specific transaction",
        path: "/txs/{txHash}/utxos",
        ..BASE
    },
    OperationDefinition {
        operation: "getTransactionStakes",
        name: "Get Transaction Stake Certificates",
        description: "Obtain information about (de)registration of stake addresses within a transaction",
        path: "/txs/{txHash}/stakes",
        ..BASE
    },
    OperationDefinition {
        operation: "getTransactionDelegations",
        name: "Get Transaction Delegations",
        description: "Obtain information about delegation certificates of a specific transaction",
        path: "/txs/{txHash}/delegations",
        ..BASE
    },
    OperationDefinition {
        operation: "getTransactionWithdrawals",
        name: "Get Transaction Withdrawals",
        description: "Obtain information about withdrawals of a specific transaction",
        path: "/txs/{txHash}/withdrawals",
        ..BASE
    },
    OperationDefinition {
        operation: "getTransactionMirs",
        name: "Get Transaction MIRs",
        description: "Obtain information about Move Instantaneous Rewards of a specific transaction",
        path: "/txs/{txHash}/mirs",
        ..BASE
    },
    OperationDefinition {
        operation: "getTransactionPoolUpdates",
        name: "Get Transaction Pool Updates",
        description: "Obtain information about stake pool registration and update certificates",
        path: "/txs/{txHash}/pool_updates",
        ..BASE
    },
    OperationDefinition {
        operation: "getTransactionPoolRetires",
        name: "Get Transaction Pool Retirements",
        description: "Obtain information about stake pool retirements within a transaction",
        path: "/txs/{txHash}/pool_retires",
        ..BASE
    },
    OperationDefinition {
        operation: "getTransactionMetadata",
        name: "Get Transaction Metadata",
        description: "Obtain the transaction metadata",
        path: "/txs/{txHash}/metadata",
        ..BASE
    },
    OperationDefinition {
        operation: "getTransactionMetadataCbor",
        name: "Get Transaction Metadata (CBOR)",
        description: "Obtain the transaction metadata in CBOR",
        path: "/txs/{txHash}/metadata/cbor",
        ..BASE
    },
    OperationDefinition {
        operation: "getTransactionRedeemers",
        name: "Get Transaction Redeemers",
        description: "Obtain the transaction redeemers",
        path: "/txs/{txHash}/redeemers",
        ..BASE
    },
    OperationDefinition {
        operation: "getTransactionRequiredSigners",
        name: "Get Transaction Required Signers",
        description: "Obtain the extra transaction witnesses",
        path: "/txs/{txHash}/required_signers",
        ..BASE
    },
    OperationDefinition {
        operation: "getTransactionCbor",
        name: "Get Transaction CBOR",
        description: "Obtain the CBOR serialized transaction",
        path: "/txs/{txHash}/cbor",
        ..BASE
    },
    OperationDefinition {
        operation: "submitTransaction",
        name: "Submit Transaction",
        description: "Submit an already serialized transaction to the network",
        method: HttpMethod::Post,
        path: "/tx/submit",
        fields: &[Field::TransactionCbor],
        body: BodyKind::Cbor,
        ..BASE
    },
];
