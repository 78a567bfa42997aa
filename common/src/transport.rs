//! Outbound request model and the transport seam every Blockfrost call goes through

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::credentials::Credentials;

pub const CONTENT_TYPE_CBOR: &str = "application/cbor";
pub const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// POST payloads accepted by Blockfrost
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Transaction CBOR sent as the raw request text
    Cbor(String),
    Json(Value),
}

impl RequestBody {
    pub fn content_type(&self) -> &'static str {
        match self {
            RequestBody::Cbor(_) => CONTENT_TYPE_CBOR,
            RequestBody::Json(_) => CONTENT_TYPE_JSON,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            RequestBody::Cbor(text) => text,
            RequestBody::Json(value) => value.to_string(),
        }
    }
}

/// Where a single operation lands, relative to the network's API root
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointTarget {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl EndpointTarget {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }
}

impl fmt::Display for EndpointTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// A fully addressed request, ready for the wire
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub base_url: String,
    pub project_id: String,
    pub target: EndpointTarget,
}

impl ApiRequest {
    pub fn new(credentials: &Credentials, target: EndpointTarget) -> Self {
        Self {
            base_url: credentials.base_url().to_string(),
            project_id: credentials.project_id.clone(),
            target,
        }
    }

    /// Absolute URL without the query string
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.target.path)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{}", describe_status(*status, body))]
    Status { status: u16, body: String },

    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },
}

/// Render a non-2xx reply as `HTTP {status}: {message}`, taking the message from
/// the Blockfrost error body when there is one
pub fn describe_status(status: u16, body: &str) -> String {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| "Unknown error".to_string());
    format!("HTTP {}: {}", status, message)
}

/// Decode a 2xx response body. Bodies that are not JSON come back as a string.
pub fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Performs one HTTP exchange with Blockfrost
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError>;
}
