use std::sync::Arc;

use blockfrost_module_node::{
    dispatcher::Route,
    node_config::NodeConfig,
    operations::{all_operations, lookup, Backend},
    sdk::SdkFeatures,
    BlockfrostNode,
};
use blockfrost_node_common::{
    transport::{HttpMethod, RequestBody},
    Network, OperationRequest,
};
use blockfrost_test_utils::{credentials, RecordingTransport, TEST_STAKE_ADDRESS};
use serde_json::json;

const ASSET: &str = "b0d07d45fe9514f80213f4020e5a61241458be626841cde717cb38a7";

fn node(network: Network) -> (BlockfrostNode, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::new());
    let node = BlockfrostNode::with_transport(
        &NodeConfig::new(credentials(network)),
        transport.clone(),
    );
    (node, transport)
}

fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[tokio::test]
async fn get_block_on_preprod() {
    let (node, transport) = node(Network::Preprod);
    let request = OperationRequest::new("blocks", "getBlock").with_field("hashOrNumber", "123");
    node.execute(&request).await.unwrap();

    let sent = transport.requests();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].target.method, HttpMethod::Get);
    assert_eq!(sent[0].url(), "https://cardano-preprod.blockfrost.io/api/v0/blocks/123");
    assert!(sent[0].target.query.is_empty());
    assert_eq!(sent[0].project_id, "preprodtestproject");
}

#[tokio::test]
async fn epoch_stakes_by_pool_pages_without_order() {
    let (node, transport) = node(Network::Mainnet);
    let request = OperationRequest::new("epochs", "getEpochStakesByPool")
        .with_field("epochNumber", 300)
        .with_field("poolId", "pool1abc")
        .with_field("order", "desc");
    node.execute(&request).await.unwrap();

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.target.path, "/epochs/300/stakes/pool1abc");
    assert_eq!(sent.target.query, query(&[("count", "100"), ("page", "1")]));
}

#[tokio::test]
async fn ordered_listing_forwards_order() {
    let (node, transport) = node(Network::Mainnet);
    let request = OperationRequest::new("pools", "getPoolDelegators")
        .with_field("poolId", "pool1abc")
        .with_field("count", 20)
        .with_field("page", 3)
        .with_field("order", "desc");
    node.execute(&request).await.unwrap();

    let sent = transport.last_request().unwrap();
    assert_eq!(
        sent.target.query,
        query(&[("count", "20"), ("page", "3"), ("order", "desc")])
    );
}

#[tokio::test]
async fn submit_transaction_posts_cbor() {
    let (node, transport) = node(Network::Mainnet);
    transport.respond(json!("4a7d0c"));
    let request = OperationRequest::new("transactions", "submitTransaction")
        .with_field("transactionCbor", "deadbeef");
    let output = node.execute(&request).await.unwrap();

    let sent = transport.last_request().unwrap();
    assert_eq!(sent.target.method, HttpMethod::Post);
    assert_eq!(sent.url(), "https://cardano-mainnet.blockfrost.io/api/v0/tx/submit");
    let body = sent.target.body.unwrap();
    assert_eq!(body.content_type(), "application/cbor");
    assert_eq!(body, RequestBody::Cbor("deadbeef".to_string()));

    assert_eq!(output[0][0].json["result"], json!("4a7d0c"));
}

#[tokio::test]
async fn evaluate_with_utxos_posts_json_envelope() {
    let (node, transport) = node(Network::Preview);
    let request = OperationRequest::new("utilities", "evaluateTransactionUtxos")
        .with_field("transactionCbor", "84a300")
        .with_field(
            "additionalUtxos",
            r#"[[{"txId":"aa","index":0},{"address":"addr_test1","value":{"coins":5}}]]"#,
        );
    node.execute(&request).await.unwrap();

    let body = transport.last_request().unwrap().target.body.unwrap();
    assert_eq!(body.content_type(), "application/json");
    let RequestBody::Json(envelope) = body else {
        panic!("expected a JSON body");
    };
    assert_eq!(envelope["cbor"], "84a300");
    assert_eq!(envelope["additionalUtxoSet"][0][1]["value"]["coins"], 5);
}

#[tokio::test]
async fn negative_slot_fails_before_any_call() {
    let (node, transport) = node(Network::Mainnet);
    let request = OperationRequest::new("blocks", "getBlockInSlot").with_field("slotNumber", -1);
    let err = node.execute(&request).await.unwrap_err();

    assert!(err.cause().is_invalid_input());
    assert!(err.to_string().starts_with("Blockfrost API error: "));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn missing_field_fails_before_any_call() {
    let (node, transport) = node(Network::Mainnet);
    let err = node
        .execute(&OperationRequest::new("accounts", "getAccount"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Blockfrost API error: Missing stakeAddress parameter");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn typed_only_sdk_cannot_reach_account_utxos() {
    let transport = Arc::new(RecordingTransport::new());
    let node = BlockfrostNode::with_sdk_features(
        &NodeConfig::new(credentials(Network::Mainnet)),
        transport.clone(),
        SdkFeatures::typed_only(),
    );
    let request = OperationRequest::new("accounts", "getUtxos")
        .with_field("stakeAddress", TEST_STAKE_ADDRESS);
    let err = node.execute(&request).await.unwrap_err();

    assert!(err.cause().is_missing_capability());
    assert!(transport.requests().is_empty());

    // Typed methods keep working
    let request = OperationRequest::new("accounts", "getAccount")
        .with_field("stakeAddress", TEST_STAKE_ADDRESS);
    node.execute(&request).await.unwrap();
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn address_utxos_of_asset_goes_through_sdk_request() {
    let (node, transport) = node(Network::Mainnet);
    let address = "addr1qxqs59lphg8g6qndelq8xwqn60ag3aeyfcp33c2kdp46a09re5df3pzwwmyq946axfcejy5n4x0y99wqpgtp2gd0k09qsgy6pz";
    let request = OperationRequest::new("addresses", "getAddressUtxosAsset")
        .with_field("address", address)
        .with_field("asset", ASSET);
    node.execute(&request).await.unwrap();

    let sent = transport.last_request().unwrap();
    assert!(sent.target.path.ends_with(&format!("/utxos/{ASSET}")));
    assert_eq!(sent.target.query.len(), 3);
}

#[tokio::test]
async fn sdk_methods_hit_the_table_path() {
    // Typed SDK methods and the table agree on the endpoint for every operation
    for definition in all_operations() {
        let Backend::Sdk(_) = definition.backend else {
            continue;
        };
        let (node, transport) = node(Network::Mainnet);
        let mut request = OperationRequest::new(definition.category.name(), definition.operation);
        for field in definition.fields {
            request = request.with_field(field.name(), "stake1x");
        }

        let resolved = node.dispatcher().resolve(&request).unwrap();
        assert!(matches!(node.dispatcher().plan(&resolved), Route::Sdk(_)));
        node.dispatcher().dispatch(&resolved).await.unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.target, resolved.target, "{}", definition.operation);
    }
}

#[test]
fn every_operation_has_one_backend_and_declared_placeholders() {
    let mut count = 0;
    for definition in all_operations() {
        count += 1;
        for placeholder in definition.path_placeholders() {
            assert!(
                definition.fields.iter().any(|field| field.name() == placeholder),
                "{}/{}: {}",
                definition.category,
                definition.operation,
                placeholder
            );
        }
        assert!(lookup(definition.category.name(), definition.operation).is_ok());
    }
    assert!(count > 90);
}
