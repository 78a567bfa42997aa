//! Operation Definitions for the Blockfrost node
//!
//! One registry of every (category, operation) pair the node can execute. The
//! parameter schema and the dispatcher are both derived from it, so the fields
//! a user is shown are exactly the fields a dispatch reads.

use std::fmt;

use blockfrost_node_common::{
    pagination::PaginationStyle,
    transport::{EndpointTarget, HttpMethod, RequestBody},
    NodeError,
};
use serde_json::json;

use crate::fields::{Field, FieldValue, FieldValues};
use crate::sdk::SdkMethod;

mod accounts;
mod addresses;
mod assets;
mod blocks;
mod epochs;
mod governance;
mod health;
mod ledger;
mod mempool;
mod metadata;
mod metrics;
mod network;
mod pools;
mod scripts;
mod transactions;
mod utilities;

/// Top level grouping of operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Accounts,
    Addresses,
    Assets,
    Blocks,
    Epochs,
    Governance,
    Health,
    Ledger,
    Mempool,
    Metadata,
    Metrics,
    Network,
    Pools,
    Scripts,
    Transactions,
    Utilities,
}

impl Category {
    pub const ALL: [Category; 16] = [
        Category::Accounts,
        Category::Addresses,
        Category::Assets,
        Category::Blocks,
        Category::Epochs,
        Category::Governance,
        Category::Health,
        Category::Ledger,
        Category::Mempool,
        Category::Metadata,
        Category::Metrics,
        Category::Network,
        Category::Pools,
        Category::Scripts,
        Category::Transactions,
        Category::Utilities,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Accounts => "accounts",
            Category::Addresses => "addresses",
            Category::Assets => "assets",
            Category::Blocks => "blocks",
            Category::Epochs => "epochs",
            Category::Governance => "governance",
            Category::Health => "health",
            Category::Ledger => "ledger",
            Category::Mempool => "mempool",
            Category::Metadata => "metadata",
            Category::Metrics => "metrics",
            Category::Network => "network",
            Category::Pools => "pools",
            Category::Scripts => "scripts",
            Category::Transactions => "transactions",
            Category::Utilities => "utilities",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Accounts => "Accounts",
            Category::Addresses => "Addresses",
            Category::Assets => "Assets",
            Category::Blocks => "Blocks",
            Category::Epochs => "Epochs",
            Category::Governance => "Governance",
            Category::Health => "Health",
            Category::Ledger => "Ledger",
            Category::Mempool => "Mempool",
            Category::Metadata => "Metadata",
            Category::Metrics => "Metrics",
            Category::Network => "Network",
            Category::Pools => "Pools",
            Category::Scripts => "Scripts",
            Category::Transactions => "Transactions",
            Category::Utilities => "Utilities",
        }
    }

    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| category.name() == name)
    }

    /// Operations of this category, in the order they are presented
    pub fn operations(&self) -> &'static [OperationDefinition] {
        match self {
            Category::Accounts => accounts::OPERATIONS,
            Category::Addresses => addresses::OPERATIONS,
            Category::Assets => assets::OPERATIONS,
            Category::Blocks => blocks::OPERATIONS,
            Category::Epochs => epochs::OPERATIONS,
            Category::Governance => governance::OPERATIONS,
            Category::Health => health::OPERATIONS,
            Category::Ledger => ledger::OPERATIONS,
            Category::Mempool => mempool::OPERATIONS,
            Category::Metadata => metadata::OPERATIONS,
            Category::Metrics => metrics::OPERATIONS,
            Category::Network => network::OPERATIONS,
            Category::Pools => pools::OPERATIONS,
            Category::Scripts => scripts::OPERATIONS,
            Category::Transactions => transactions::OPERATIONS,
            Category::Utilities => utilities::OPERATIONS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How an operation reaches Blockfrost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Typed SDK method, its return value is trusted as is
    Sdk(SdkMethod),
    /// Plain HTTP call built from the path template
    Direct,
    /// The SDK's generic request method, for endpoints it has no typed method for
    SdkRequest,
}

/// Request body an operation sends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    None,
    /// `transactionCbor` as raw CBOR text
    Cbor,
    /// `{ cbor, additionalUtxoSet }` JSON envelope
    CborWithUtxos,
}

/// Definition of a single operation
#[derive(Debug, Clone)]
pub struct OperationDefinition {
    pub category: Category,
    /// Operation key as selected by the user (e.g. "getEpochStakesByPool")
    pub operation: &'static str,
    /// Human-readable name
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    /// Path relative to the API root, with `{field}` placeholders
    pub path: &'static str,
    /// Every field the operation reads
    pub fields: &'static [Field],
    /// Declared text fields that must not be blank
    pub non_empty: &'static [Field],
    pub pagination: PaginationStyle,
    pub backend: Backend,
    pub body: BodyKind,
}

impl OperationDefinition {
    /// Substitute field values into the path template, one segment at a time.
    /// Substituted text is never scanned for further placeholders.
    pub fn render_path(&self, values: &FieldValues) -> String {
        self.path
            .split('/')
            .map(|segment| {
                segment
                    .strip_prefix('{')
                    .and_then(|name| name.strip_suffix('}'))
                    .and_then(Field::from_name)
                    .and_then(|field| values.get(field))
                    .map(FieldValue::to_segment)
                    .unwrap_or_else(|| segment.to_string())
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    pub fn render_body(&self, values: &FieldValues) -> Result<Option<RequestBody>, NodeError> {
        match self.body {
            BodyKind::None => Ok(None),
            BodyKind::Cbor => Ok(Some(RequestBody::Cbor(
                values.text(Field::TransactionCbor)?.to_string(),
            ))),
            BodyKind::CborWithUtxos => Ok(Some(RequestBody::Json(json!({
                "cbor": values.text(Field::TransactionCbor)?,
                "additionalUtxoSet": values.json_array(Field::AdditionalUtxos)?,
            })))),
        }
    }

    /// Method, path and body, without query parameters
    pub fn render_target(&self, values: &FieldValues) -> Result<EndpointTarget, NodeError> {
        let path = self.render_path(values);
        Ok(match (self.method, self.render_body(values)?) {
            (HttpMethod::Post, Some(body)) => EndpointTarget::post(path, body),
            (method, body) => EndpointTarget {
                method,
                path,
                query: Vec::new(),
                body,
            },
        })
    }

    /// Placeholders named in the path template
    pub fn path_placeholders(&self) -> Vec<&'static str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
            .collect()
    }

    pub fn uses_field(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }
}

/// Every operation across all categories
pub fn all_operations() -> impl Iterator<Item = &'static OperationDefinition> {
    Category::ALL.into_iter().flat_map(|category| category.operations().iter())
}

/// Find an operation by its (category, operation) pair
pub fn find_operation(category: Category, operation: &str) -> Option<&'static OperationDefinition> {
    category.operations().iter().find(|definition| definition.operation == operation)
}

/// Resolve a pair of names, distinguishing an unknown category from an
/// unknown operation within a known one
pub fn lookup(category: &str, operation: &str) -> Result<&'static OperationDefinition, NodeError> {
    let known = Category::from_name(category)
        .ok_or_else(|| NodeError::UnknownCategory(category.to_string()))?;
    find_operation(known, operation)
        .ok_or_else(|| NodeError::unknown_operation(category, operation))
}
