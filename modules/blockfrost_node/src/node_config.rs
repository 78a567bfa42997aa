use std::sync::Arc;

use anyhow::Result;
use blockfrost_node_common::{
    configuration::{DEFAULT_STRICT_STAKE_ADDRESS, DEFAULT_SUBSCRIBE_TOPIC},
    Credentials,
};
use config::Config;

#[derive(Clone, Debug)]
pub struct NodeConfig {
    pub credentials: Credentials,
    pub subscribe_topic: String,
    pub strict_stake_address: bool,
}

impl NodeConfig {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            subscribe_topic: DEFAULT_SUBSCRIBE_TOPIC.1.to_string(),
            strict_stake_address: DEFAULT_STRICT_STAKE_ADDRESS.1,
        }
    }
}

impl TryFrom<Arc<Config>> for NodeConfig {
    type Error = anyhow::Error;

    fn try_from(config: Arc<Config>) -> Result<Self> {
        let credentials = Credentials::from_config(&config)?;

        let subscribe_topic = config
            .get_string(DEFAULT_SUBSCRIBE_TOPIC.0)
            .unwrap_or(DEFAULT_SUBSCRIBE_TOPIC.1.to_string());

        let strict_stake_address = config
            .get_bool(DEFAULT_STRICT_STAKE_ADDRESS.0)
            .unwrap_or(DEFAULT_STRICT_STAKE_ADDRESS.1);

        Ok(Self {
            credentials,
            subscribe_topic,
            strict_stake_address,
        })
    }
}
