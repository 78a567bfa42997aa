use blockfrost_node_common::{pagination::PaginationStyle, transport::HttpMethod};

use super::{Backend, BodyKind, Category, OperationDefinition};
use crate::fields::Field;

const BASE: OperationDefinition = OperationDefinition {
    category: Category::Metadata,
    operation: "",
    name: "",
    description: "",
    method: HttpMethod::Get,
    path: "/metadata/txs/labels/{label}",
    fields: &[Field::Label],
    non_empty: &[],
    pagination: PaginationStyle::CountPageOrder,
    backend: Backend::Direct,
    body: BodyKind::None,
};

pub(super) const OPERATIONS: &[OperationDefinition] = &[
    OperationDefinition {
        operation: "getMetadataLabels",
        name: "Get Metadata Labels",
        description: "List of all used transaction metadata labels",
        path: "/metadata/txs/labels",
        fields: &[],
        ..BASE
    },
    OperationDefinition {
        operation: "getMetadataByLabel",
        name: "Get Metadata by Label",
        description: "Transaction metadata per label, as JSON",
        ..BASE
    },
    OperationDefinition {
        operation: "getMetadataByLabelCbor",
        name: "Get Metadata by Label (CBOR)",
        description: "Transaction metadata per label, as CBOR",
        path: "/metadata/txs/labels/{label}/cbor",
        ..BASE
    },
];
