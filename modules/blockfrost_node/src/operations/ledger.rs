use blockfrost_node_common::{pagination::PaginationStyle, transport::HttpMethod};

use super::{Backend, BodyKind, Category, OperationDefinition};
use crate::sdk::SdkMethod;

pub(super) const OPERATIONS: &[OperationDefinition] = &[OperationDefinition {
    category: Category::Ledger,
    operation: "getGenesis",
    name: "Get Blockchain Genesis",
    description: "Return the information about blockchain genesis",
    method: HttpMethod::Get,
    path: "/genesis",
    fields: &[],
    non_empty: &[],
    pagination: PaginationStyle::None,
    backend: Backend::Sdk(SdkMethod::Genesis),
    body: BodyKind::None,
}];
