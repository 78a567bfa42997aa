use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::node_error::NodeError;

pub const COUNT_FIELD: &str = "count";
pub const PAGE_FIELD: &str = "page";
pub const ORDER_FIELD: &str = "order";

pub const DEFAULT_COUNT: i64 = 100;
pub const DEFAULT_PAGE: i64 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl FromStr for Order {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Asc => write!(f, "asc"),
            Order::Desc => write!(f, "desc"),
        }
    }
}

/// Which pagination parameters an endpoint accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationStyle {
    None,
    CountPage,
    CountPageOrder,
}

impl PaginationStyle {
    pub fn is_paginated(&self) -> bool {
        !matches!(self, PaginationStyle::None)
    }

    pub fn has_order(&self) -> bool {
        matches!(self, PaginationStyle::CountPageOrder)
    }
}

/// Pagination values forwarded verbatim as query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub count: i64,
    pub page: i64,
    pub order: Option<Order>,
}

impl PageQuery {
    /// Read `count`, `page` and (when the style allows it) `order` from the
    /// field bag, falling back to 100 / 1 / asc
    pub fn from_fields(
        style: PaginationStyle,
        fields: &Map<String, Value>,
    ) -> Result<Option<Self>, NodeError> {
        if !style.is_paginated() {
            return Ok(None);
        }

        let count = read_integer(fields, COUNT_FIELD)?.unwrap_or(DEFAULT_COUNT);
        let page = read_integer(fields, PAGE_FIELD)?.unwrap_or(DEFAULT_PAGE);
        let order = if style.has_order() {
            let order = match fields.get(ORDER_FIELD) {
                None | Some(Value::Null) => Order::default(),
                Some(Value::String(text)) => text
                    .parse::<Order>()
                    .map_err(|_| NodeError::invalid_param(ORDER_FIELD, "expected asc or desc"))?,
                Some(_) => {
                    return Err(NodeError::invalid_param(ORDER_FIELD, "expected asc or desc"))
                }
            };
            Some(order)
        } else {
            None
        };

        Ok(Some(Self { count, page, order }))
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![
            (COUNT_FIELD.to_string(), self.count.to_string()),
            (PAGE_FIELD.to_string(), self.page.to_string()),
        ];
        if let Some(order) = self.order {
            query.push((ORDER_FIELD.to_string(), order.to_string()));
        }
        query
    }
}

fn read_integer(fields: &Map<String, Value>, name: &str) -> Result<Option<i64>, NodeError> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_i64()
            .map(Some)
            .ok_or_else(|| NodeError::invalid_param(name, "expected an integer")),
        Some(Value::String(text)) => text
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| NodeError::invalid_param(name, "expected an integer")),
        Some(_) => Err(NodeError::invalid_param(name, "expected an integer")),
    }
}
