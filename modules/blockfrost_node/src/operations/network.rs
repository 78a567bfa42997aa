use blockfrost_node_common::{pagination::PaginationStyle, transport::HttpMethod};

use super::{Backend, BodyKind, Category, OperationDefinition};
use crate::sdk::SdkMethod;

const BASE: OperationDefinition = OperationDefinition {
    category: Category::Network,
    operation: "",
    name: "",
    description: "",
    method: HttpMethod::Get,
    path: "/network",
    fields: &[],
    non_empty: &[],
    pagination: PaginationStyle::None,
    backend: Backend::Sdk(SdkMethod::Network),
    body: BodyKind::None,
};

pub(super) const OPERATIONS: &[OperationDefinition] = &[
    OperationDefinition {
        operation: "getNetwork",
        name: "Get Network",
        description: "Return detailed network information",
        ..BASE
    },
    OperationDefinition {
        operation: "getNetworkEras",
        name: "Get Network Eras",
        description: "Return the information about start and end of each era",
        path: "/network/eras",
        backend: Backend::Sdk(SdkMethod::NetworkEras),
        ..BASE
    },
];
