//! Blockfrost credentials and network selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::node_error::NodeError;

/// Header carrying the project ID on every Blockfrost request
pub const PROJECT_ID_HEADER: &str = "project_id";

const MAINNET_BASE_URL: &str = "https://cardano-mainnet.blockfrost.io/api/v0";
const PREPROD_BASE_URL: &str = "https://cardano-preprod.blockfrost.io/api/v0";
const PREVIEW_BASE_URL: &str = "https://cardano-preview.blockfrost.io/api/v0";

/// Cardano network served by a Blockfrost project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Preprod,
    Preview,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Preprod, Network::Preview];

    /// API root for this network
    pub fn base_url(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_BASE_URL,
            Network::Preprod => PREPROD_BASE_URL,
            Network::Preview => PREVIEW_BASE_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Preprod => "preprod",
            Network::Preview => "preview",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Preprod => "Preprod",
            Network::Preview => "Preview",
        }
    }

    pub fn is_mainnet(&self) -> bool {
        matches!(self, Network::Mainnet)
    }
}

impl FromStr for Network {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "preprod" => Ok(Network::Preprod),
            "preview" => Ok(Network::Preview),
            _ => Err(NodeError::UnknownNetwork(s.to_string())),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-execution Blockfrost credentials
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub project_id: String,
    #[serde(default)]
    pub network: Network,
}

impl Credentials {
    pub fn new(project_id: impl Into<String>, network: Network) -> Self {
        Self {
            project_id: project_id.into(),
            network,
        }
    }

    pub fn base_url(&self) -> &'static str {
        self.network.base_url()
    }
}

// Never print the project ID
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("project_id", &"<redacted>")
            .field("network", &self.network)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_per_network() {
        assert_eq!(
            Network::Mainnet.base_url(),
            "https://cardano-mainnet.blockfrost.io/api/v0"
        );
        assert_eq!(
            Network::Preprod.base_url(),
            "https://cardano-preprod.blockfrost.io/api/v0"
        );
        assert_eq!(
            Network::Preview.base_url(),
            "https://cardano-preview.blockfrost.io/api/v0"
        );
    }

    #[test]
    fn test_network_round_trips_through_str() {
        for network in Network::ALL {
            assert_eq!(network.as_str().parse::<Network>().unwrap(), network);
        }
    }

    #[test]
    fn test_unknown_network_is_an_error() {
        let err = "testnet".parse::<Network>().unwrap_err();
        assert!(matches!(err, NodeError::UnknownNetwork(ref name) if name == "testnet"));
    }

    #[test]
    fn test_credentials_default_to_mainnet() {
        let credentials: Credentials =
            serde_json::from_str(r#"{ "projectId": "mainnetabc" }"#).unwrap();
        assert_eq!(credentials.network, Network::Mainnet);
        assert_eq!(credentials.project_id, "mainnetabc");
    }

    #[test]
    fn test_debug_redacts_project_id() {
        let credentials = Credentials::new("preprodsecret", Network::Preprod);
        let printed = format!("{credentials:?}");
        assert!(!printed.contains("preprodsecret"));
        assert!(printed.contains("Preprod"));
    }
}
