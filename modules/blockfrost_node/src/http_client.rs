//! Direct HTTP access to Blockfrost

use std::sync::Arc;

use async_trait::async_trait;
use blockfrost_node_common::{
    credentials::PROJECT_ID_HEADER,
    transport::{parse_body, ApiRequest, EndpointTarget, HttpMethod, Transport, TransportError},
    Credentials, NodeError,
};
use reqwest::{header::CONTENT_TYPE, Method};
use serde_json::Value;
use tracing::debug;

/// [`Transport`] over a shared reqwest client
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            http_client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let url = request.url();
        let method = match request.target.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        let mut req = self
            .http_client
            .request(method, &url)
            .header(PROJECT_ID_HEADER, &request.project_id);

        if !request.target.query.is_empty() {
            req = req.query(&request.target.query);
        }
        if let Some(body) = request.target.body {
            req = req.header(CONTENT_TYPE, body.content_type()).body(body.into_text());
        }

        let failed = |e: reqwest::Error| TransportError::Request {
            url: url.clone(),
            message: e.to_string(),
        };
        let res = req.send().await.map_err(failed)?;
        let status = res.status();
        let body = res.text().await.map_err(failed)?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(parse_body(&body))
    }
}

/// Plain HTTP client for operations the SDK has no typed method for
pub struct DirectClient {
    credentials: Credentials,
    transport: Arc<dyn Transport>,
}

impl DirectClient {
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    pub async fn call(&self, target: EndpointTarget) -> Result<Value, NodeError> {
        let request = ApiRequest::new(&self.credentials, target);
        debug!("Direct {} {}", request.target.method, request.url());
        Ok(self.transport.send(request).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfrost_node_common::{transport::RequestBody, Network};
    use blockfrost_test_utils::RecordingTransport;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_request(server: &MockServer, target: EndpointTarget) -> ApiRequest {
        ApiRequest {
            base_url: server.uri(),
            project_id: "mainnetabc".to_string(),
            target,
        }
    }

    #[tokio::test]
    async fn test_direct_call_addresses_network_root() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond(json!({ "hash": "4ea1ba29" }));
        let client = DirectClient::new(
            Credentials::new("previewabc", Network::Preview),
            transport.clone(),
        );

        let value = client.call(EndpointTarget::get("/blocks/latest")).await.unwrap();
        assert_eq!(value["hash"], "4ea1ba29");

        let request = transport.last_request().unwrap();
        assert_eq!(request.url(), "https://cardano-preview.blockfrost.io/api/v0/blocks/latest");
        assert_eq!(request.project_id, "previewabc");
    }

    #[tokio::test]
    async fn test_direct_call_surfaces_upstream_status() {
        let transport = Arc::new(RecordingTransport::new());
        transport.fail(TransportError::Status {
            status: 400,
            body: r#"{"status_code":400,"error":"Bad Request","message":"Invalid transaction"}"#
                .to_string(),
        });
        let client = DirectClient::new(
            Credentials::new("mainnetabc", Network::Mainnet),
            transport.clone(),
        );

        let err = client
            .call(EndpointTarget::post("/tx/submit", RequestBody::Cbor("00".to_string())))
            .await
            .unwrap_err();
        assert!(err.is_upstream());
        assert_eq!(err.to_string(), "HTTP 400: Invalid transaction");
    }

    #[tokio::test]
    async fn test_reqwest_posts_cbor_with_project_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tx/submit"))
            .and(header(PROJECT_ID_HEADER, "mainnetabc"))
            .and(header("content-type", "application/cbor"))
            .and(body_string("84a300"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#""4a7d""#))
            .expect(1)
            .mount(&server)
            .await;

        let target = EndpointTarget::post("/tx/submit", RequestBody::Cbor("84a300".to_string()));
        let value = ReqwestTransport::new().send(api_request(&server, target)).await.unwrap();
        assert_eq!(value, json!("4a7d"));
    }

    #[tokio::test]
    async fn test_reqwest_posts_json_body() {
        let server = MockServer::start().await;
        let body = json!({ "cbor": "84a300", "additionalUtxoSet": [] });
        Mock::given(method("POST"))
            .and(path("/utils/txs/evaluate/utxos"))
            .and(header("content-type", "application/json"))
            .and(body_json(body.clone()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": {} })))
            .expect(1)
            .mount(&server)
            .await;

        let target = EndpointTarget::post("/utils/txs/evaluate/utxos", RequestBody::Json(body));
        let value = ReqwestTransport::new().send(api_request(&server, target)).await.unwrap();
        assert_eq!(value, json!({ "result": {} }));
    }

    #[tokio::test]
    async fn test_reqwest_forwards_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pools/pool1abc/delegators"))
            .and(header(PROJECT_ID_HEADER, "mainnetabc"))
            .and(query_param("count", "10"))
            .and(query_param("page", "2"))
            .and(query_param("order", "desc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "a": 1 }])))
            .expect(1)
            .mount(&server)
            .await;

        let target = EndpointTarget::get("/pools/pool1abc/delegators").with_query(vec![
            ("count".to_string(), "10".to_string()),
            ("page".to_string(), "2".to_string()),
            ("order".to_string(), "desc".to_string()),
        ]);
        let value = ReqwestTransport::new().send(api_request(&server, target)).await.unwrap();
        assert_eq!(value, json!([{ "a": 1 }]));
    }

    #[tokio::test]
    async fn test_reqwest_maps_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/blocks/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "status_code": 404,
                "error": "Not Found",
                "message": "gone",
            })))
            .mount(&server)
            .await;

        let target = EndpointTarget::get("/blocks/missing");
        let err = ReqwestTransport::new().send(api_request(&server, target)).await.unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 404, .. }));
        assert_eq!(err.to_string(), "HTTP 404: gone");
    }
}
