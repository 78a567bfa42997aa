//! Resolves a request against the operation table and makes the one call it needs

use blockfrost_node_common::{
    pagination::PageQuery, stake_address::check_stake_address, transport::EndpointTarget,
    Network, NodeError, OperationRequest,
};
use serde_json::Value;
use tracing::debug;

use crate::fields::{Field, FieldValue, FieldValues};
use crate::http_client::DirectClient;
use crate::operations::{lookup, Backend, OperationDefinition};
use crate::sdk::{SdkClient, SdkMethod};

/// A request checked against its operation definition
#[derive(Debug, Clone)]
pub struct ResolvedOperation {
    pub definition: &'static OperationDefinition,
    pub values: FieldValues,
    pub page: Option<PageQuery>,
    /// Full endpoint, pagination included
    pub target: EndpointTarget,
}

/// Where a resolved operation goes
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Sdk(SdkMethod),
    Direct(EndpointTarget),
    SdkRequest(EndpointTarget),
}

pub struct Dispatcher {
    sdk: SdkClient,
    direct: DirectClient,
    /// Network to check stake addresses against, when strict checking is on
    strict_stake_network: Option<Network>,
}

impl Dispatcher {
    pub fn new(sdk: SdkClient, direct: DirectClient) -> Self {
        debug!("SDK generic request method: {:?}", sdk.request_method());
        Self {
            sdk,
            direct,
            strict_stake_network: None,
        }
    }

    pub fn with_strict_stake_address(mut self, network: Network) -> Self {
        self.strict_stake_network = Some(network);
        self
    }

    /// Look up the operation, read and check its fields, and build its endpoint.
    /// Nothing is sent.
    pub fn resolve(&self, request: &OperationRequest) -> Result<ResolvedOperation, NodeError> {
        let definition = lookup(&request.category, &request.operation)?;
        let values = FieldValues::resolve(definition.fields, &request.fields)?;
        self.validate(definition, &values)?;

        let page = PageQuery::from_fields(definition.pagination, &request.fields)?;
        let target = definition
            .render_target(&values)?
            .with_query(page.map(|page| page.to_query()).unwrap_or_default());

        Ok(ResolvedOperation {
            definition,
            values,
            page,
            target,
        })
    }

    fn validate(
        &self,
        definition: &OperationDefinition,
        values: &FieldValues,
    ) -> Result<(), NodeError> {
        for (field, value) in values.iter() {
            if let FieldValue::Integer(number) = value {
                if field.rejects_negative() && *number < 0 {
                    return Err(NodeError::invalid_param(field.name(), "must not be negative"));
                }
            }
        }

        for field in definition.non_empty {
            if values.text(*field)?.trim().is_empty() {
                return Err(NodeError::param_missing(field.name()));
            }
        }

        if let Some(network) = self.strict_stake_network {
            if definition.uses_field(Field::StakeAddress) {
                check_stake_address(values.text(Field::StakeAddress)?, network)?;
            }
        }
        Ok(())
    }

    /// Pick the calling convention for a resolved operation
    pub fn plan(&self, resolved: &ResolvedOperation) -> Route {
        match resolved.definition.backend {
            Backend::Sdk(method) => Route::Sdk(method),
            Backend::Direct => Route::Direct(resolved.target.clone()),
            Backend::SdkRequest => Route::SdkRequest(resolved.target.clone()),
        }
    }

    /// Make the single upstream call for a resolved operation
    pub async fn dispatch(&self, resolved: &ResolvedOperation) -> Result<Value, NodeError> {
        match self.plan(resolved) {
            Route::Sdk(method) => {
                debug!("SDK {:?}", method);
                self.sdk.call(method, &resolved.values, resolved.page.as_ref()).await
            }
            Route::Direct(target) => self.direct.call(target).await,
            Route::SdkRequest(target) => {
                debug!("SDK request {}", target);
                self.sdk.request(target).await
            }
        }
    }

    pub async fn execute(&self, request: &OperationRequest) -> Result<Value, NodeError> {
        let resolved = self.resolve(request)?;
        self.dispatch(&resolved).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::BlockfrostSdk;
    use blockfrost_node_common::{transport::HttpMethod, Credentials};
    use blockfrost_test_utils::RecordingTransport;
    use serde_json::json;
    use std::sync::Arc;

    fn dispatcher() -> Dispatcher {
        let credentials = Credentials::new("mainnetabc", Network::Mainnet);
        let transport = Arc::new(RecordingTransport::new());
        Dispatcher::new(
            SdkClient::new(BlockfrostSdk::new(credentials.clone(), transport.clone())),
            DirectClient::new(credentials, transport),
        )
    }

    #[test]
    fn test_resolve_unknown_selection() {
        let dispatcher = dispatcher();
        let err = dispatcher.resolve(&OperationRequest::new("wallets", "getWallet")).unwrap_err();
        assert!(matches!(err, NodeError::UnknownCategory(_)));
        let err = dispatcher.resolve(&OperationRequest::new("pools", "getWallet")).unwrap_err();
        assert!(matches!(err, NodeError::UnknownOperation { .. }));
    }

    #[test]
    fn test_plan_routes_by_backend() {
        let dispatcher = dispatcher();

        let health = dispatcher.resolve(&OperationRequest::new("health", "clock")).unwrap();
        assert_eq!(dispatcher.plan(&health), Route::Sdk(SdkMethod::HealthClock));

        let pool = dispatcher
            .resolve(
                &OperationRequest::new("pools", "getPool").with_field("poolId", json!("pool1xyz")),
            )
            .unwrap();
        assert_eq!(
            dispatcher.plan(&pool),
            Route::Direct(EndpointTarget::get("/pools/pool1xyz"))
        );

        let utxos = dispatcher
            .resolve(
                &OperationRequest::new("accounts", "getUtxos")
                    .with_field("stakeAddress", json!("stake1abc")),
            )
            .unwrap();
        assert!(matches!(dispatcher.plan(&utxos), Route::SdkRequest(_)));
    }

    #[test]
    fn test_negative_numbers_rejected() {
        let dispatcher = dispatcher();
        let err = dispatcher
            .resolve(
                &OperationRequest::new("blocks", "getBlockInEpochSlot")
                    .with_field("epochNumber", json!(300))
                    .with_field("epochSlotNumber", json!(-5)),
            )
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("epochSlotNumber"));
    }

    #[test]
    fn test_blank_hash_or_number_rejected() {
        let dispatcher = dispatcher();
        let err = dispatcher
            .resolve(
                &OperationRequest::new("blocks", "getNextBlocks")
                    .with_field("hashOrNumber", json!("  ")),
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing hashOrNumber parameter");
    }

    #[test]
    fn test_blank_asset_rejected() {
        let dispatcher = dispatcher();
        let err = dispatcher
            .resolve(
                &OperationRequest::new("addresses", "getAddressUtxosAsset")
                    .with_field("address", json!("addr1qx")),
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing asset parameter");

        let err = dispatcher
            .resolve(
                &OperationRequest::new("addresses", "getAddressUtxosAsset")
                    .with_field("address", json!("addr1qx"))
                    .with_field("asset", json!("")),
            )
            .unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_evaluate_with_utxos_builds_envelope() {
        let dispatcher = dispatcher();
        let resolved = dispatcher
            .resolve(
                &OperationRequest::new("utilities", "evaluateTransactionUtxos")
                    .with_field("transactionCbor", json!("84a300")),
            )
            .unwrap();
        assert_eq!(resolved.target.method, HttpMethod::Post);
        assert_eq!(resolved.target.path, "/utils/txs/evaluate/utxos");
        assert_eq!(
            resolved.target.body,
            Some(blockfrost_node_common::transport::RequestBody::Json(json!({
                "cbor": "84a300",
                "additionalUtxoSet": [],
            })))
        );
    }

    #[test]
    fn test_strict_stake_address_is_opt_in() {
        let request = OperationRequest::new("accounts", "getAccount")
            .with_field("stakeAddress", json!("stake1notreallyanaddress"));
        assert!(dispatcher().resolve(&request).is_ok());

        let strict = dispatcher().with_strict_stake_address(Network::Mainnet);
        assert!(strict.resolve(&request).unwrap_err().is_invalid_input());
    }
}
