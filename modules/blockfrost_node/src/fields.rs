//! Typed input fields and their values

use std::collections::BTreeMap;

use blockfrost_node_common::NodeError;
use serde_json::{Map, Value};

/// Every input field any operation can read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    StakeAddress,
    Address,
    Asset,
    PolicyId,
    HashOrNumber,
    SlotNumber,
    EpochNumber,
    EpochSlotNumber,
    PoolId,
    DrepId,
    TxHash,
    CertIndex,
    Label,
    ScriptHash,
    DatumHash,
    Xpub,
    Role,
    Index,
    TransactionCbor,
    AdditionalUtxos,
}

/// How a field's raw value is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    /// JSON array, accepted either as text or as an already decoded array
    JsonArray,
}

impl Field {
    pub const ALL: [Field; 20] = [
        Field::StakeAddress,
        Field::Address,
        Field::Asset,
        Field::PolicyId,
        Field::HashOrNumber,
        Field::SlotNumber,
        Field::EpochNumber,
        Field::EpochSlotNumber,
        Field::PoolId,
        Field::DrepId,
        Field::TxHash,
        Field::CertIndex,
        Field::Label,
        Field::ScriptHash,
        Field::DatumHash,
        Field::Xpub,
        Field::Role,
        Field::Index,
        Field::TransactionCbor,
        Field::AdditionalUtxos,
    ];

    /// Parameter name as the host knows it
    pub fn name(&self) -> &'static str {
        match self {
            Field::StakeAddress => "stakeAddress",
            Field::Address => "address",
            Field::Asset => "asset",
            Field::PolicyId => "policyId",
            Field::HashOrNumber => "hashOrNumber",
            Field::SlotNumber => "slotNumber",
            Field::EpochNumber => "epochNumber",
            Field::EpochSlotNumber => "epochSlotNumber",
            Field::PoolId => "poolId",
            Field::DrepId => "drepId",
            Field::TxHash => "txHash",
            Field::CertIndex => "certIndex",
            Field::Label => "label",
            Field::ScriptHash => "scriptHash",
            Field::DatumHash => "datumHash",
            Field::Xpub => "xpub",
            Field::Role => "role",
            Field::Index => "index",
            Field::TransactionCbor => "transactionCbor",
            Field::AdditionalUtxos => "additionalUtxos",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Field::StakeAddress => "Stake Address",
            Field::Address => "Address",
            Field::Asset => "Asset",
            Field::PolicyId => "Policy ID",
            Field::HashOrNumber => "Block Hash or Number",
            Field::SlotNumber => "Slot Number",
            Field::EpochNumber => "Epoch Number",
            Field::EpochSlotNumber => "Epoch Slot Number",
            Field::PoolId => "Pool ID",
            Field::DrepId => "DRep ID",
            Field::TxHash => "Transaction Hash",
            Field::CertIndex => "Certificate Index",
            Field::Label => "Metadata Label",
            Field::ScriptHash => "Script Hash",
            Field::DatumHash => "Datum Hash",
            Field::Xpub => "Extended Public Key",
            Field::Role => "Role",
            Field::Index => "Index",
            Field::TransactionCbor => "Transaction CBOR",
            Field::AdditionalUtxos => "Additional UTXOs",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Field::StakeAddress => "Stake address in Bech32 format",
            Field::Address => "Cardano address in Bech32 format",
            Field::Asset => "Asset unit: policy ID concatenated with the hex-encoded asset name",
            Field::PolicyId => "Minting policy ID",
            Field::HashOrNumber => "Hash or number of the requested block",
            Field::SlotNumber => "Absolute slot number",
            Field::EpochNumber => "Epoch number",
            Field::EpochSlotNumber => "Slot number within the epoch",
            Field::PoolId => "Stake pool ID in Bech32 or hex format",
            Field::DrepId => "Delegate representative ID in Bech32 or hex format",
            Field::TxHash => "Transaction hash",
            Field::CertIndex => "Index of the certificate within the transaction",
            Field::Label => "Transaction metadata label",
            Field::ScriptHash => "Hash of the script",
            Field::DatumHash => "Hash of the datum",
            Field::Xpub => "Hex-encoded account extended public key",
            Field::Role => "Address role (0 external, 1 internal)",
            Field::Index => "Address index",
            Field::TransactionCbor => "CBOR serialized transaction, hex encoded",
            Field::AdditionalUtxos => "JSON array of extra UTXOs used for evaluation",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::SlotNumber
            | Field::EpochNumber
            | Field::EpochSlotNumber
            | Field::CertIndex
            | Field::Role
            | Field::Index => FieldKind::Integer,
            Field::AdditionalUtxos => FieldKind::JsonArray,
            _ => FieldKind::Text,
        }
    }

    /// Default shown to the user
    pub fn default_value(&self) -> Value {
        match self.kind() {
            FieldKind::Text => Value::String(String::new()),
            FieldKind::Integer => Value::from(0),
            FieldKind::JsonArray => Value::String("[]".to_string()),
        }
    }

    /// Fields the host may leave out; the default above is used instead
    pub fn is_optional(&self) -> bool {
        matches!(self, Field::AdditionalUtxos)
    }

    /// Slot and epoch numbers must not be negative
    pub fn rejects_negative(&self) -> bool {
        matches!(
            self,
            Field::SlotNumber | Field::EpochNumber | Field::EpochSlotNumber
        )
    }

    /// Field by its wire name, e.g. `poolId`
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    JsonArray(Vec<Value>),
}

impl FieldValue {
    fn parse(field: Field, raw: &Value) -> Result<Self, NodeError> {
        let name = field.name();
        match field.kind() {
            FieldKind::Text => match raw {
                Value::String(text) => Ok(FieldValue::Text(text.clone())),
                Value::Number(number) => Ok(FieldValue::Text(number.to_string())),
                _ => Err(NodeError::invalid_param(name, "expected a string")),
            },
            FieldKind::Integer => {
                let parsed = match raw {
                    Value::Number(number) => number.as_i64(),
                    Value::String(text) => text.trim().parse::<i64>().ok(),
                    _ => None,
                };
                parsed
                    .map(FieldValue::Integer)
                    .ok_or_else(|| NodeError::invalid_param(name, "expected an integer"))
            }
            FieldKind::JsonArray => {
                let decoded = match raw {
                    Value::String(text) => serde_json::from_str::<Value>(text)
                        .map_err(|e| NodeError::invalid_param(name, &e.to_string()))?,
                    other => other.clone(),
                };
                match decoded {
                    Value::Array(items) => Ok(FieldValue::JsonArray(items)),
                    _ => Err(NodeError::invalid_param(name, "expected a JSON array")),
                }
            }
        }
    }

    /// Text substituted into a path template
    pub fn to_segment(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Integer(number) => number.to_string(),
            FieldValue::JsonArray(items) => Value::Array(items.clone()).to_string(),
        }
    }
}

/// Values for exactly the fields one operation declares
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues {
    values: BTreeMap<Field, FieldValue>,
}

impl FieldValues {
    /// Pull every declared field out of the host's parameter bag. Undeclared
    /// entries are ignored; a declared field that is absent fails unless it has
    /// a default.
    pub fn resolve(declared: &[Field], raw: &Map<String, Value>) -> Result<Self, NodeError> {
        let mut values = BTreeMap::new();
        for &field in declared {
            let value = match raw.get(field.name()) {
                Some(Value::Null) | None if field.is_optional() => {
                    FieldValue::parse(field, &field.default_value())?
                }
                Some(Value::Null) | None => return Err(NodeError::param_missing(field.name())),
                Some(value) => FieldValue::parse(field, value)?,
            };
            values.insert(field, value);
        }
        Ok(Self { values })
    }

    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    pub fn text(&self, field: Field) -> Result<&str, NodeError> {
        match self.values.get(&field) {
            Some(FieldValue::Text(text)) => Ok(text),
            Some(_) => Err(NodeError::invalid_param(field.name(), "expected a string")),
            None => Err(NodeError::param_missing(field.name())),
        }
    }

    pub fn integer(&self, field: Field) -> Result<i64, NodeError> {
        match self.values.get(&field) {
            Some(FieldValue::Integer(number)) => Ok(*number),
            Some(_) => Err(NodeError::invalid_param(field.name(), "expected an integer")),
            None => Err(NodeError::param_missing(field.name())),
        }
    }

    pub fn json_array(&self, field: Field) -> Result<&[Value], NodeError> {
        match self.values.get(&field) {
            Some(FieldValue::JsonArray(items)) => Ok(items),
            Some(_) => Err(NodeError::invalid_param(field.name(), "expected a JSON array")),
            None => Err(NodeError::param_missing(field.name())),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.values.iter().map(|(field, value)| (*field, value))
    }
}
