//! Parameter schema: the node and credential descriptions shown to the host.
//! Everything here is derived from the operation table.

use std::collections::BTreeMap;

use blockfrost_node_common::{
    pagination::{Order, COUNT_FIELD, DEFAULT_COUNT, DEFAULT_PAGE, ORDER_FIELD, PAGE_FIELD},
    Network,
};
use serde::Serialize;
use serde_json::Value;

use crate::fields::{Field, FieldKind};
use crate::operations::{all_operations, Category, OperationDefinition};

pub const NODE_NAME: &str = "blockfrost";
pub const NODE_DISPLAY_NAME: &str = "Blockfrost";
pub const CREDENTIAL_NAME: &str = "blockfrostApi";
pub const CATEGORY_PROPERTY: &str = "category";
pub const OPERATION_PROPERTY: &str = "operation";

const SUBTITLE: &str = r#"={{$parameter["category"]}} - {{$parameter["operation"]}}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Number,
    Options,
    Json,
}

impl From<FieldKind> for PropertyType {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => PropertyType::String,
            FieldKind::Integer => PropertyType::Number,
            FieldKind::JsonArray => PropertyType::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyOption {
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Conditions under which a property is shown, keyed by property name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayOptions {
    pub show: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub display_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_data_expression: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PropertyOption>,
    pub default: Value,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_options: Option<DisplayOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Property {
    fn new(display_name: &str, name: &str, kind: PropertyType, default: Value) -> Self {
        Self {
            display_name: display_name.to_string(),
            name: name.to_string(),
            kind,
            no_data_expression: false,
            options: Vec::new(),
            default,
            required: false,
            display_options: None,
            description: None,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    fn with_options(mut self, options: Vec<PropertyOption>) -> Self {
        self.kind = PropertyType::Options;
        self.no_data_expression = true;
        self.options = options;
        self
    }

    fn shown_for(mut self, show: BTreeMap<String, Vec<String>>) -> Self {
        self.display_options = Some(DisplayOptions { show });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CredentialReference {
    pub name: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeDefaults {
    pub name: String,
}

/// Description of the node as a workflow host renders it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    pub display_name: String,
    pub name: String,
    pub group: Vec<String>,
    pub version: u32,
    pub subtitle: String,
    pub description: String,
    pub defaults: NodeDefaults,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub credentials: Vec<CredentialReference>,
    pub properties: Vec<Property>,
}

impl NodeDescription {
    /// Properties named `name`; `operation` appears once per category
    pub fn property(&self, name: &str) -> Vec<&Property> {
        self.properties.iter().filter(|property| property.name == name).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDescription {
    pub name: String,
    pub display_name: String,
    pub properties: Vec<Property>,
}

fn show(entries: &[(&str, Vec<String>)]) -> BTreeMap<String, Vec<String>> {
    entries.iter().map(|(key, values)| (key.to_string(), values.clone())).collect()
}

/// Categories and operations among `definitions`, in table order
fn selection(definitions: &[&OperationDefinition]) -> BTreeMap<String, Vec<String>> {
    let mut categories: Vec<String> = Vec::new();
    let mut operations: Vec<String> = Vec::new();
    for definition in definitions {
        let category = definition.category.name().to_string();
        if !categories.contains(&category) {
            categories.push(category);
        }
        operations.push(definition.operation.to_string());
    }
    show(&[(CATEGORY_PROPERTY, categories), (OPERATION_PROPERTY, operations)])
}

fn category_property() -> Property {
    let options = Category::ALL
        .iter()
        .map(|category| PropertyOption {
            name: category.display_name().to_string(),
            value: category.name().to_string(),
            description: None,
        })
        .collect();
    Property::new(
        "Category",
        CATEGORY_PROPERTY,
        PropertyType::Options,
        Value::from(Category::Accounts.name()),
    )
    .with_options(options)
    .required()
}

fn operation_property(category: Category) -> Property {
    let definitions = category.operations();
    let options = definitions
        .iter()
        .map(|definition| PropertyOption {
            name: definition.name.to_string(),
            value: definition.operation.to_string(),
            description: Some(definition.description.to_string()),
        })
        .collect();
    let default = definitions
        .first()
        .map(|definition| Value::from(definition.operation))
        .unwrap_or(Value::Null);

    Property::new("Operation", OPERATION_PROPERTY, PropertyType::Options, default)
        .with_options(options)
        .required()
        .shown_for(show(&[(CATEGORY_PROPERTY, vec![category.name().to_string()])]))
}

fn field_property(field: Field) -> Option<Property> {
    let users: Vec<_> =
        all_operations().filter(|definition| definition.uses_field(field)).collect();
    if users.is_empty() {
        return None;
    }
    let property = Property::new(
        field.display_name(),
        field.name(),
        field.kind().into(),
        field.default_value(),
    )
    .with_description(field.description())
    .shown_for(selection(&users));

    Some(if field.is_optional() {
        property
    } else {
        property.required()
    })
}

fn pagination_properties() -> Vec<Property> {
    let paginated: Vec<_> =
        all_operations().filter(|definition| definition.pagination.is_paginated()).collect();
    let ordered: Vec<_> =
        all_operations().filter(|definition| definition.pagination.has_order()).collect();

    let order_options = [Order::Asc, Order::Desc]
        .iter()
        .map(|order| PropertyOption {
            name: match order {
                Order::Asc => "Ascending".to_string(),
                Order::Desc => "Descending".to_string(),
            },
            value: order.to_string(),
            description: None,
        })
        .collect();

    vec![
        Property::new("Count", COUNT_FIELD, PropertyType::Number, Value::from(DEFAULT_COUNT))
            .with_description("Number of results per page (max 100)")
            .shown_for(selection(&paginated)),
        Property::new("Page", PAGE_FIELD, PropertyType::Number, Value::from(DEFAULT_PAGE))
            .with_description("Page number to fetch")
            .shown_for(selection(&paginated)),
        Property::new(
            "Order",
            ORDER_FIELD,
            PropertyType::Options,
            Value::from(Order::default().to_string()),
        )
        .with_options(order_options)
        .with_description("Ordering of results, by creation time")
        .shown_for(selection(&ordered)),
    ]
}

pub fn node_description() -> NodeDescription {
    let mut properties = vec![category_property()];
    properties.extend(Category::ALL.into_iter().map(operation_property));
    properties.extend(Field::ALL.into_iter().filter_map(field_property));
    properties.extend(pagination_properties());

    NodeDescription {
        display_name: NODE_DISPLAY_NAME.to_string(),
        name: NODE_NAME.to_string(),
        group: vec!["transform".to_string()],
        version: 1,
        subtitle: SUBTITLE.to_string(),
        description: "Interact with Cardano blockchain via Blockfrost API".to_string(),
        defaults: NodeDefaults {
            name: NODE_DISPLAY_NAME.to_string(),
        },
        inputs: vec!["main".to_string()],
        outputs: vec!["main".to_string()],
        credentials: vec![CredentialReference {
            name: CREDENTIAL_NAME.to_string(),
            required: true,
        }],
        properties,
    }
}

pub fn credential_description() -> CredentialDescription {
    let networks = Network::ALL
        .iter()
        .map(|network| PropertyOption {
            name: network.display_name().to_string(),
            value: network.as_str().to_string(),
            description: None,
        })
        .collect();

    CredentialDescription {
        name: CREDENTIAL_NAME.to_string(),
        display_name: "Blockfrost API".to_string(),
        properties: vec![
            Property::new("Project ID", "projectId", PropertyType::String, Value::from(""))
                .with_description("Your Blockfrost Project ID from https://blockfrost.io")
                .required(),
            Property::new(
                "Network",
                "network",
                PropertyType::Options,
                Value::from(Network::default().as_str()),
            )
            .with_options(networks)
            .with_description("The Cardano network to connect to")
            .required(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_defaults_to_accounts() {
        let description = node_description();
        let category = description.property(CATEGORY_PROPERTY)[0];
        assert_eq!(category.default, json!("accounts"));
        assert_eq!(category.options.len(), 16);
    }

    #[test]
    fn test_one_operation_property_per_category() {
        let description = node_description();
        let operations = description.property(OPERATION_PROPERTY);
        assert_eq!(operations.len(), Category::ALL.len());
        for (property, category) in operations.iter().zip(Category::ALL) {
            let show = &property.display_options.as_ref().unwrap().show;
            assert_eq!(show[CATEGORY_PROPERTY], vec![category.name().to_string()]);
            assert_eq!(property.options.len(), category.operations().len());
        }
    }

    #[test]
    fn test_field_visibility_matches_operations() {
        let description = node_description();
        let pool_id = description.property("poolId")[0];
        let show = &pool_id.display_options.as_ref().unwrap().show;
        assert_eq!(show[CATEGORY_PROPERTY], vec!["epochs", "pools"]);
        assert!(show[OPERATION_PROPERTY].contains(&"getEpochBlocksByPool".to_string()));
        assert!(!show[OPERATION_PROPERTY].contains(&"getPools".to_string()));
        assert!(pool_id.required);
    }

    #[test]
    fn test_additional_utxos_is_optional_json() {
        let description = node_description();
        let utxos = description.property("additionalUtxos")[0];
        assert_eq!(utxos.kind, PropertyType::Json);
        assert_eq!(utxos.default, json!("[]"));
        assert!(!utxos.required);
    }

    #[test]
    fn test_order_only_where_supported() {
        let description = node_description();
        let order = description.property(ORDER_FIELD)[0];
        let operations = &order.display_options.as_ref().unwrap().show[OPERATION_PROPERTY];
        assert!(operations.contains(&"getEpochBlocks".to_string()));
        assert!(!operations.contains(&"getEpochStakes".to_string()));

        let count = description.property(COUNT_FIELD)[0];
        assert_eq!(count.default, json!(100));
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(node_description()).unwrap();
        assert_eq!(value["displayName"], "Blockfrost");
        assert_eq!(value["credentials"][0]["name"], "blockfrostApi");
        assert_eq!(value["properties"][0]["type"], "options");
        assert_eq!(value["properties"][0]["noDataExpression"], true);
    }

    #[test]
    fn test_credential_networks() {
        let credential = credential_description();
        let network = credential.properties.iter().find(|p| p.name == "network").unwrap();
        assert_eq!(network.default, json!("mainnet"));
        let values: Vec<_> = network.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["mainnet", "preprod", "preview"]);
    }
}
