use anyhow::{anyhow, Result};
use config::Config;

use crate::credentials::{Credentials, Network};

pub const CONFIG_KEY_PROJECT_ID: &str = "project-id";
pub const DEFAULT_NETWORK: (&str, &str) = ("network", "mainnet");
pub const DEFAULT_SUBSCRIBE_TOPIC: (&str, &str) = ("subscribe-topic", "blockfrost.node.execute");
pub const DEFAULT_STRICT_STAKE_ADDRESS: (&str, bool) = ("strict-stake-address", false);

impl Credentials {
    /// Read `project-id` (required) and `network` (default mainnet)
    pub fn from_config(config: &Config) -> Result<Self> {
        let project_id = config
            .get_string(CONFIG_KEY_PROJECT_ID)
            .map_err(|_| anyhow!("Blockfrost credentials need '{}'", CONFIG_KEY_PROJECT_ID))?;
        let network = config
            .get_string(DEFAULT_NETWORK.0)
            .unwrap_or(DEFAULT_NETWORK.1.to_string())
            .parse::<Network>()?;
        Ok(Credentials::new(project_id, network))
    }
}
