//! Shared test support: a transport that records requests and replays canned replies

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use blockfrost_node_common::{
    transport::{ApiRequest, Transport, TransportError},
    Credentials, Network,
};
use serde_json::{json, Value};

/// Records every request; replies are taken from a queue, `{}` once it runs dry
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<ApiRequest>>,
    replies: Mutex<VecDeque<Result<Value, TransportError>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    pub fn respond(&self, value: Value) {
        self.replies.lock().unwrap().push_back(Ok(value));
    }

    /// Queue a failure
    pub fn fail(&self, error: TransportError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.replies.lock().unwrap().pop_front().unwrap_or_else(|| Ok(json!({})))
    }
}

pub fn credentials(network: Network) -> Credentials {
    Credentials::new(format!("{}testproject", network.as_str()), network)
}

/// Mainnet stake address used across tests
pub const TEST_STAKE_ADDRESS: &str = "stake1u9ylzsgxaa6xctf4juup682ar3juj85n8tx3hthnljg47zctvm3rc";

/// Reply shaped like `/accounts/{stake_address}`
pub fn account_reply() -> Value {
    json!({
        "stake_address": TEST_STAKE_ADDRESS,
        "active": true,
        "active_epoch": 412,
        "controlled_amount": "619154618165",
        "rewards_sum": "319154618165",
        "withdrawals_sum": "12125369253",
        "pool_id": "pool1pu5jlj4q9w9jlxeu370a3c9myx47md5j5m2str0naunn2q3lkdy",
        "drep_id": null
    })
}

/// Reply shaped like `/health/clock`
pub fn clock_reply() -> Value {
    json!({ "server_time": 1603400958947u64 })
}

/// Blockfrost's error body for a 404
pub fn not_found() -> TransportError {
    TransportError::Status {
        status: 404,
        body: r#"{"status_code":404,"error":"Not Found","message":"The requested component has not been found."}"#
            .to_string(),
    }
}
