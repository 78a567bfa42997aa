use blockfrost_node_common::{pagination::PaginationStyle, transport::HttpMethod};

use super::{Backend, BodyKind, Category, OperationDefinition};
use crate::sdk::SdkMethod;

const BASE: OperationDefinition = OperationDefinition {
    category: Category::Metrics,
    operation: "",
    name: "",
    description: "",
    method: HttpMethod::Get,
    path: "/metrics",
    fields: &[],
    non_empty: &[],
    pagination: PaginationStyle::None,
    backend: Backend::Sdk(SdkMethod::Metrics),
    body: BodyKind::None,
};

pub(super) const OPERATIONS: &[OperationDefinition] = &[
    OperationDefinition {
        operation: "usage",
        name: "Usage Metrics",
        description: "History of your Blockfrost usage metrics in the past 30 days",
        ..BASE
    },
    OperationDefinition {
        operation: "endpoints",
        name: "Endpoint Usage Metrics",
        description: "History of your Blockfrost usage metrics per endpoint in the past 30 days",
        path: "/metrics/endpoints",
        backend: Backend::Sdk(SdkMethod::MetricsEndpoints),
        ..BASE
    },
];
