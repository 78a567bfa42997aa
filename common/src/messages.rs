//! Definition of messages exchanged with the node over the bus

use serde::{Deserialize, Serialize};

use crate::normalize::NodeOutput;
use crate::request::OperationRequest;

/// Result of one execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExecuteOutcome {
    Output(NodeOutput),
    Error(String),
}

// === Global message enum ===
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Message {
    None(()), // Just so we have a simple default

    // Node execution
    Execute(OperationRequest),
    Executed(ExecuteOutcome),
}

impl Default for Message {
    fn default() -> Self {
        Self::None(())
    }
}

impl From<OperationRequest> for Message {
    fn from(request: OperationRequest) -> Self {
        Message::Execute(request)
    }
}

impl From<ExecuteOutcome> for Message {
    fn from(outcome: ExecuteOutcome) -> Self {
        Message::Executed(outcome)
    }
}
