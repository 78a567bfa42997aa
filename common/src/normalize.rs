//! Response normalizer: every Blockfrost reply becomes a sequence of JSON objects

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub type JsonObject = Map<String, Value>;

/// Key that carries a non-object value once wrapped
pub const RESULT_KEY: &str = "result";

/// One item handed back to the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputItem {
    pub json: JsonObject,
}

/// A single batch of output items
pub type NodeOutput = Vec<Vec<OutputItem>>;

fn wrap_result(value: Value) -> JsonObject {
    let mut object = Map::new();
    object.insert(RESULT_KEY.to_string(), value);
    object
}

fn into_object(value: Value) -> JsonObject {
    match value {
        Value::Object(object) => object,
        other => wrap_result(other),
    }
}

/// Coerce a reply into objects:
/// - arrays keep their elements in order, wrapping any non-object element
/// - objects become a single element
/// - anything else becomes `{ "result": value }`
pub fn normalize(value: Value) -> Vec<JsonObject> {
    match value {
        Value::Array(items) => items.into_iter().map(into_object).collect(),
        other => vec![into_object(other)],
    }
}

/// Wrap normalized objects as the host's single output batch
pub fn into_output(objects: Vec<JsonObject>) -> NodeOutput {
    vec![objects.into_iter().map(|json| OutputItem { json }).collect()]
}
