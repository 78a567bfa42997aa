use thiserror::Error;

use crate::transport::TransportError;

/// Prefix every failed execution is reported with
pub const API_ERROR_PREFIX: &str = "Blockfrost API error";

/// Failure classes raised while resolving or dispatching an operation
#[derive(Debug, Error)]
pub enum NodeError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown operation: {operation} (category {category})")]
    UnknownOperation { category: String, operation: String },

    #[error("{0}")]
    MissingCapability(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("{0}")]
    Upstream(#[from] TransportError),
}

impl NodeError {
    /// Unknown operation within a known category
    pub fn unknown_operation(category: &str, operation: &str) -> Self {
        NodeError::UnknownOperation {
            category: category.to_string(),
            operation: operation.to_string(),
        }
    }

    /// Parameter missing error
    pub fn param_missing(param_name: &str) -> Self {
        NodeError::InvalidInput(format!("Missing {} parameter", param_name))
    }

    /// Invalid parameter error
    pub fn invalid_param(param_name: &str, reason: &str) -> Self {
        NodeError::InvalidInput(format!("Invalid {} parameter: {}", param_name, reason))
    }

    /// The SDK build offers no generic request method to reach `path`
    pub fn no_request_method(path: &str) -> Self {
        NodeError::MissingCapability(format!(
            "Blockfrost SDK exposes neither request nor _request, cannot call {}",
            path
        ))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, NodeError::InvalidInput(_))
    }

    pub fn is_missing_capability(&self) -> bool {
        matches!(self, NodeError::MissingCapability(_))
    }

    pub fn is_unknown_selection(&self) -> bool {
        matches!(
            self,
            NodeError::UnknownCategory(_) | NodeError::UnknownOperation { .. }
        )
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, NodeError::Upstream(_))
    }
}

/// The single error surfaced to the host for a failed execution
#[derive(Debug, Error)]
#[error("{API_ERROR_PREFIX}: {source}")]
pub struct ExecuteError {
    #[from]
    source: NodeError,
}

impl ExecuteError {
    /// Underlying failure, kept for logs and tests
    pub fn cause(&self) -> &NodeError {
        &self.source
    }
}
