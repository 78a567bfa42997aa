//! Typed Blockfrost SDK client
//!
//! One async method per endpoint the node reaches through the SDK, plus the
//! generic request methods used for endpoints without a typed method. Which
//! generic method is usable is decided once, when the [`SdkClient`] is built.

use std::sync::Arc;

use blockfrost_node_common::{
    pagination::PageQuery,
    transport::{ApiRequest, EndpointTarget, Transport, TransportError},
    Credentials, NodeError,
};
use serde_json::Value;

use crate::fields::{Field, FieldValues};

/// Typed SDK methods an operation can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdkMethod {
    Root,
    Health,
    HealthClock,
    Metrics,
    MetricsEndpoints,
    Genesis,
    Network,
    NetworkEras,
    Accounts,
    AccountsRewards,
    AccountsHistory,
    AccountsDelegations,
    AccountsRegistrations,
    AccountsWithdrawals,
    AccountsMirs,
    AccountsAddresses,
    AccountsAddressesAssets,
    AccountsAddressesTotal,
    Addresses,
    AddressesExtended,
    AddressesTotal,
    AddressesUtxos,
    AddressesTransactions,
}

/// Generic request entry points a given SDK build exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SdkFeatures {
    pub public_request: bool,
    pub private_request: bool,
}

impl Default for SdkFeatures {
    fn default() -> Self {
        Self {
            public_request: true,
            private_request: true,
        }
    }
}

impl SdkFeatures {
    /// A build with typed endpoint methods only
    pub fn typed_only() -> Self {
        Self {
            public_request: false,
            private_request: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Public,
    Private,
}

pub struct BlockfrostSdk {
    credentials: Credentials,
    transport: Arc<dyn Transport>,
    features: SdkFeatures,
}

impl BlockfrostSdk {
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials,
            transport,
            features: SdkFeatures::default(),
        }
    }

    pub fn with_features(mut self, features: SdkFeatures) -> Self {
        self.features = features;
        self
    }

    pub fn features(&self) -> SdkFeatures {
        self.features
    }

    async fn send(&self, target: EndpointTarget) -> Result<Value, TransportError> {
        self.transport.send(ApiRequest::new(&self.credentials, target)).await
    }

    async fn get(&self, path: String, page: Option<&PageQuery>) -> Result<Value, TransportError> {
        let query = page.map(PageQuery::to_query).unwrap_or_default();
        self.send(EndpointTarget::get(path).with_query(query)).await
    }

    pub async fn root(&self) -> Result<Value, TransportError> {
        self.get("/".to_string(), None).await
    }

    pub async fn health(&self) -> Result<Value, TransportError> {
        self.get("/health".to_string(), None).await
    }

    pub async fn health_clock(&self) -> Result<Value, TransportError> {
        self.get("/health/clock".to_string(), None).await
    }

    pub async fn metrics(&self) -> Result<Value, TransportError> {
        self.get("/metrics".to_string(), None).await
    }

    pub async fn metrics_endpoints(&self) -> Result<Value, TransportError> {
        self.get("/metrics/endpoints".to_string(), None).await
    }

    pub async fn genesis(&self) -> Result<Value, TransportError> {
        self.get("/genesis".to_string(), None).await
    }

    pub async fn network(&self) -> Result<Value, TransportError> {
        self.get("/network".to_string(), None).await
    }

    pub async fn network_eras(&self) -> Result<Value, TransportError> {
        self.get("/network/eras".to_string(), None).await
    }

    pub async fn accounts(&self, stake_address: &str) -> Result<Value, TransportError> {
        self.get(format!("/accounts/{stake_address}"), None).await
    }

    pub async fn accounts_rewards(
        &self,
        stake_address: &str,
        page: Option<&PageQuery>,
    ) -> Result<Value, TransportError> {
        self.get(format!("/accounts/{stake_address}/rewards"), page).await
    }

    pub async fn accounts_history(
        &self,
        stake_address: &str,
        page: Option<&PageQuery>,
    ) -> Result<Value, TransportError> {
        self.get(format!("/accounts/{stake_address}/history"), page).await
    }

    pub async fn accounts_delegations(
        &self,
        stake_address: &str,
        page: Option<&PageQuery>,
    ) -> Result<Value, TransportError> {
        self.get(format!("/accounts/{stake_address}/delegations"), page).await
    }

    pub async fn accounts_registrations(
        &self,
        stake_address: &str,
        page: Option<&PageQuery>,
    ) -> Result<Value, TransportError> {
        self.get(format!("/accounts/{stake_address}/registrations"), page).await
    }

    pub async fn accounts_withdrawals(
        &self,
        stake_address: &str,
        page: Option<&PageQuery>,
    ) -> Result<Value, TransportError> {
        self.get(format!("/accounts/{stake_address}/withdrawals"), page).await
    }

    pub async fn accounts_mirs(
        &self,
        stake_address: &str,
        page: Option<&PageQuery>,
    ) -> Result<Value, TransportError> {
        self.get(format!("/accounts/{stake_address}/mirs"), page).await
    }

    pub async fn accounts_addresses(
        &self,
        stake_address: &str,
        page: Option<&PageQuery>,
    ) -> Result<Value, TransportError> {
        self.get(format!("/accounts/{stake_address}/addresses"), page).await
    }

    pub async fn accounts_addresses_assets(
        &self,
        stake_address: &str,
        page: Option<&PageQuery>,
    ) -> Result<Value, TransportError> {
        self.get(format!("/accounts/{stake_address}/addresses/assets"), page).await
    }

    pub async fn accounts_addresses_total(
        &self,
        stake_address: &str,
    ) -> Result<Value, TransportError> {
        self.get(format!("/accounts/{stake_address}/addresses/total"), None).await
    }

    pub async fn addresses(&self, address: &str) -> Result<Value, TransportError> {
        self.get(format!("/addresses/{address}"), None).await
    }

    pub async fn addresses_extended(&self, address: &str) -> Result<Value, TransportError> {
        self.get(format!("/addresses/{address}/extended"), None).await
    }

    pub async fn addresses_total(&self, address: &str) -> Result<Value, TransportError> {
        self.get(format!("/addresses/{address}/total"), None).await
    }

    pub async fn addresses_utxos(
        &self,
        address: &str,
        page: Option<&PageQuery>,
    ) -> Result<Value, TransportError> {
        self.get(format!("/addresses/{address}/utxos"), page).await
    }

    pub async fn addresses_transactions(
        &self,
        address: &str,
        page: Option<&PageQuery>,
    ) -> Result<Value, TransportError> {
        self.get(format!("/addresses/{address}/transactions"), page).await
    }

    /// Generic request against any endpoint
    pub async fn request(&self, target: EndpointTarget) -> Result<Value, NodeError> {
        if !self.features.public_request {
            return Err(NodeError::no_request_method(&target.path));
        }
        Ok(self.send(target).await?)
    }

    /// Lower level variant of [`Self::request`], present on builds that keep
    /// the generic method out of the public surface
    pub(crate) async fn raw_request(&self, target: EndpointTarget) -> Result<Value, NodeError> {
        if !self.features.private_request {
            return Err(NodeError::no_request_method(&target.path));
        }
        Ok(self.send(target).await?)
    }

    /// Invoke a typed method with arguments taken from resolved field values
    pub async fn call(
        &self,
        method: SdkMethod,
        values: &FieldValues,
        page: Option<&PageQuery>,
    ) -> Result<Value, NodeError> {
        let result = match method {
            SdkMethod::Root => self.root().await,
            SdkMethod::Health => self.health().await,
            SdkMethod::HealthClock => self.health_clock().await,
            SdkMethod::Metrics => self.metrics().await,
            SdkMethod::MetricsEndpoints => self.metrics_endpoints().await,
            SdkMethod::Genesis => self.genesis().await,
            SdkMethod::Network => self.network().await,
            SdkMethod::NetworkEras => self.network_eras().await,
            SdkMethod::Accounts => self.accounts(values.text(Field::StakeAddress)?).await,
            SdkMethod::AccountsRewards => {
                self.accounts_rewards(values.text(Field::StakeAddress)?, page).await
            }
            SdkMethod::AccountsHistory => {
                self.accounts_history(values.text(Field::StakeAddress)?, page).await
            }
            SdkMethod::AccountsDelegations => {
                self.accounts_delegations(values.text(Field::StakeAddress)?, page).await
            }
            SdkMethod::AccountsRegistrations => {
                self.accounts_registrations(values.text(Field::StakeAddress)?, page).await
            }
            SdkMethod::AccountsWithdrawals => {
                self.accounts_withdrawals(values.text(Field::StakeAddress)?, page).await
            }
            SdkMethod::AccountsMirs => {
                self.accounts_mirs(values.text(Field::StakeAddress)?, page).await
            }
            SdkMethod::AccountsAddresses => {
                self.accounts_addresses(values.text(Field::StakeAddress)?, page).await
            }
            SdkMethod::AccountsAddressesAssets => {
                self.accounts_addresses_assets(values.text(Field::StakeAddress)?, page).await
            }
            SdkMethod::AccountsAddressesTotal => {
                self.accounts_addresses_total(values.text(Field::StakeAddress)?).await
            }
            SdkMethod::Addresses => self.addresses(values.text(Field::Address)?).await,
            SdkMethod::AddressesExtended => {
                self.addresses_extended(values.text(Field::Address)?).await
            }
            SdkMethod::AddressesTotal => self.addresses_total(values.text(Field::Address)?).await,
            SdkMethod::AddressesUtxos => {
                self.addresses_utxos(values.text(Field::Address)?, page).await
            }
            SdkMethod::AddressesTransactions => {
                self.addresses_transactions(values.text(Field::Address)?, page).await
            }
        };
        Ok(result?)
    }
}

/// SDK handle with its generic request capability resolved
pub enum SdkClient {
    WithRequest {
        sdk: BlockfrostSdk,
        method: RequestMethod,
    },
    TypedOnly(BlockfrostSdk),
}

impl SdkClient {
    /// Probe the SDK once: public `request` wins over the lower level one
    pub fn new(sdk: BlockfrostSdk) -> Self {
        let features = sdk.features();
        if features.public_request {
            SdkClient::WithRequest {
                sdk,
                method: RequestMethod::Public,
            }
        } else if features.private_request {
            SdkClient::WithRequest {
                sdk,
                method: RequestMethod::Private,
            }
        } else {
            SdkClient::TypedOnly(sdk)
        }
    }

    pub fn sdk(&self) -> &BlockfrostSdk {
        match self {
            SdkClient::WithRequest { sdk, .. } => sdk,
            SdkClient::TypedOnly(sdk) => sdk,
        }
    }

    pub fn request_method(&self) -> Option<RequestMethod> {
        match self {
            SdkClient::WithRequest { method, .. } => Some(*method),
            SdkClient::TypedOnly(_) => None,
        }
    }

    pub async fn call(
        &self,
        method: SdkMethod,
        values: &FieldValues,
        page: Option<&PageQuery>,
    ) -> Result<Value, NodeError> {
        self.sdk().call(method, values, page).await
    }

    pub async fn request(&self, target: EndpointTarget) -> Result<Value, NodeError> {
        match self {
            SdkClient::WithRequest {
                sdk,
                method: RequestMethod::Public,
            } => sdk.request(target).await,
            SdkClient::WithRequest {
                sdk,
                method: RequestMethod::Private,
            } => sdk.raw_request(target).await,
            SdkClient::TypedOnly(_) => Err(NodeError::no_request_method(&target.path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfrost_node_common::Network;
    use blockfrost_test_utils::RecordingTransport;
    use serde_json::json;

    fn sdk(transport: Arc<RecordingTransport>, features: SdkFeatures) -> BlockfrostSdk {
        BlockfrostSdk::new(Credentials::new("mainnetabc", Network::Mainnet), transport)
            .with_features(features)
    }

    #[test]
    fn test_capability_resolution() {
        let transport = Arc::new(RecordingTransport::new());
        let public = SdkClient::new(sdk(transport.clone(), SdkFeatures::default()));
        assert_eq!(public.request_method(), Some(RequestMethod::Public));

        let private = SdkClient::new(sdk(
            transport.clone(),
            SdkFeatures {
                public_request: false,
                private_request: true,
            },
        ));
        assert_eq!(private.request_method(), Some(RequestMethod::Private));

        let typed = SdkClient::new(sdk(transport, SdkFeatures::typed_only()));
        assert_eq!(typed.request_method(), None);
    }

    #[tokio::test]
    async fn test_typed_method_builds_path_and_query() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond(json!([{ "epoch": 210, "amount": "1000" }]));
        let sdk = sdk(transport.clone(), SdkFeatures::default());

        let page = PageQuery {
            count: 5,
            page: 2,
            order: None,
        };
        let value = sdk.accounts_rewards("stake1abc", Some(&page)).await.unwrap();
        assert_eq!(value[0]["epoch"], 210);

        let request = transport.last_request().unwrap();
        assert_eq!(
            request.url(),
            "https://cardano-mainnet.blockfrost.io/api/v0/accounts/stake1abc/rewards"
        );
        assert_eq!(request.target.query.len(), 2);
        assert_eq!(request.project_id, "mainnetabc");
    }

    #[tokio::test]
    async fn test_private_request_is_used_when_public_is_missing() {
        let transport = Arc::new(RecordingTransport::new());
        transport.respond(json!([]));
        let client = SdkClient::new(sdk(
            transport.clone(),
            SdkFeatures {
                public_request: false,
                private_request: true,
            },
        ));
        client.request(EndpointTarget::get("/accounts/stake1abc/utxos")).await.unwrap();
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_typed_only_refuses_generic_requests() {
        let transport = Arc::new(RecordingTransport::new());
        let client = SdkClient::new(sdk(transport.clone(), SdkFeatures::typed_only()));
        let err = client
            .request(EndpointTarget::get("/accounts/stake1abc/utxos"))
            .await
            .unwrap_err();
        assert!(err.is_missing_capability());
        assert!(err.to_string().contains("/accounts/stake1abc/utxos"));
        assert!(transport.requests().is_empty());
    }
}
