use blockfrost_node_common::{pagination::PaginationStyle, transport::HttpMethod};

use super::{Backend, BodyKind, Category, OperationDefinition};
use crate::sdk::SdkMethod;

const BASE: OperationDefinition = OperationDefinition {
    category: Category::Health,
    operation: "",
    name: "",
    description: "",
    method: HttpMethod::Get,
    path: "/",
    fields: &[],
    non_empty: &[],
    pagination: PaginationStyle::None,
    backend: Backend::Sdk(SdkMethod::Root),
    body: BodyKind::None,
};

pub(super) const OPERATIONS: &[OperationDefinition] = &[
    OperationDefinition {
        operation: "root",
        name: "Root",
        description: "Root endpoint, points back to the documentation",
        ..BASE
    },
    OperationDefinition {
        operation: "health",
        name: "Health",
        description: "Return backend status",
        path: "/health",
        backend: Backend::Sdk(SdkMethod::Health),
        ..BASE
    },
    OperationDefinition {
        operation: "clock",
        name: "Current Backend Time",
        description: "Current UNIX time of the backend",
        path: "/health/clock",
        backend: Backend::Sdk(SdkMethod::HealthClock),
        ..BASE
    },
];
