use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The user's selection for one execution, as handed over by the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationRequest {
    pub category: String,
    pub operation: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl OperationRequest {
    pub fn new(category: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            operation: operation.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_collects_fields() {
        let request = OperationRequest::new("epochs", "getEpochStakesByPool")
            .with_field("epochNumber", 300)
            .with_field("poolId", "pool1abc");
        assert_eq!(request.fields["epochNumber"], json!(300));
        assert_eq!(request.fields["poolId"], json!("pool1abc"));
    }

    #[test]
    fn test_fields_default_to_empty() {
        let request: OperationRequest =
            serde_json::from_str(r#"{ "category": "health", "operation": "clock" }"#).unwrap();
        assert!(request.fields.is_empty());
    }
}
