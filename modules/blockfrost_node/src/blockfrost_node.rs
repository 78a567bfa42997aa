//! Blockfrost workflow node
//!
//! Executes one (category, operation) selection against the Blockfrost API and
//! hands the reply back as a batch of JSON objects. The node runs standalone
//! through [`BlockfrostNode::execute`] or inside a Caryatid process as the
//! `blockfrost-node` module, answering [`Message::Execute`] requests.

use std::sync::Arc;

use anyhow::Result;
use blockfrost_node_common::{
    messages::{ExecuteOutcome, Message},
    normalize::{into_output, normalize},
    transport::Transport,
    ExecuteError, NodeOutput, OperationRequest,
};
use caryatid_sdk::{module, Context};
use config::Config;
use tracing::{debug, error, info};

pub mod dispatcher;
pub mod fields;
pub mod http_client;
pub mod node_config;
pub mod operations;
pub mod schema;
pub mod sdk;

use crate::dispatcher::Dispatcher;
use crate::http_client::{DirectClient, ReqwestTransport};
use crate::node_config::NodeConfig;
use crate::sdk::{BlockfrostSdk, SdkClient, SdkFeatures};

pub struct BlockfrostNode {
    dispatcher: Dispatcher,
}

impl BlockfrostNode {
    /// Node talking to Blockfrost over HTTPS
    pub fn new(config: &NodeConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(config: &NodeConfig, transport: Arc<dyn Transport>) -> Self {
        Self::with_sdk_features(config, transport, SdkFeatures::default())
    }

    pub fn with_sdk_features(
        config: &NodeConfig,
        transport: Arc<dyn Transport>,
        features: SdkFeatures,
    ) -> Self {
        let credentials = config.credentials.clone();
        let sdk =
            BlockfrostSdk::new(credentials.clone(), transport.clone()).with_features(features);
        let dispatcher = Dispatcher::new(
            SdkClient::new(sdk),
            DirectClient::new(credentials.clone(), transport),
        );
        let dispatcher = if config.strict_stake_address {
            dispatcher.with_strict_stake_address(credentials.network)
        } else {
            dispatcher
        };
        Self { dispatcher }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Run one request; every failure comes back under the same error prefix
    pub async fn execute(&self, request: &OperationRequest) -> Result<NodeOutput, ExecuteError> {
        info!("Executing {}/{}", request.category, request.operation);
        match self.dispatcher.execute(request).await {
            Ok(value) => {
                let items = normalize(value);
                debug!(
                    "{}/{} returned {} items",
                    request.category,
                    request.operation,
                    items.len()
                );
                Ok(into_output(items))
            }
            Err(e) => {
                let e = ExecuteError::from(e);
                error!("{}/{} failed: {e}", request.category, request.operation);
                Err(e)
            }
        }
    }
}

/// Caryatid module answering execute requests on the bus
#[module(
    message_type(Message),
    name = "blockfrost-node",
    description = "Blockfrost API workflow node"
)]
pub struct BlockfrostNodeModule;

impl BlockfrostNodeModule {
    pub async fn init(&self, context: Arc<Context<Message>>, config: Arc<Config>) -> Result<()> {
        let node_config = NodeConfig::try_from(config)?;
        info!(
            "Blockfrost node on {} handling '{}'",
            node_config.credentials.network, node_config.subscribe_topic
        );
        let node = Arc::new(BlockfrostNode::new(&node_config));

        context.handle(&node_config.subscribe_topic, move |message: Arc<Message>| {
            let node = node.clone();
            async move {
                let outcome = match message.as_ref() {
                    Message::Execute(request) => match node.execute(request).await {
                        Ok(output) => ExecuteOutcome::Output(output),
                        Err(e) => ExecuteOutcome::Error(e.to_string()),
                    },
                    _ => {
                        error!("Unexpected message type: {message:?}");
                        ExecuteOutcome::Error("Unexpected message type".to_string())
                    }
                };
                Arc::new(Message::from(outcome))
            }
        });

        Ok(())
    }
}
