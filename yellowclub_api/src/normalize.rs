//! Turns whatever a list endpoint returned into a [`PaginatedResult`].
//!
//! The backend answers list requests in several shapes: a bare array, a
//! Laravel-style `{data: [...], current_page, ...}` envelope (sometimes with
//! the pagination fields under `meta`), or an ad hoc object such as
//! `{items: [...], count}`. Detection happens once, in
//! [`ResponseShape::detect`], and each shape has its own conversion.
//! Normalization never fails; missing or malformed fields get defaults.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{types::PaginatedResult, Error};

/// The closed set of list response shapes the client understands.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseShape {
    /// `[...]`
    Array(Vec<Value>),
    /// `{"data": [...], ...pagination}`; `fields` holds everything except `data`.
    Envelope {
        data: Vec<Value>,
        fields: Map<String, Value>,
    },
    /// Any other object. Non-objects (null, strings, numbers) land here as an
    /// empty map.
    Fallback(Map<String, Value>),
}

impl ResponseShape {
    pub fn detect(value: Value) -> Self {
        match value {
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Array(data)) => ResponseShape::Envelope { data, fields: map },
                Some(other) => {
                    map.insert("data".to_string(), other);
                    ResponseShape::Fallback(map)
                }
                None => ResponseShape::Fallback(map),
            },
            Value::Array(items) => ResponseShape::Array(items),
            _ => ResponseShape::Fallback(Map::new()),
        }
    }

    pub fn into_paginated(self) -> PaginatedResult<Value> {
        match self {
            ResponseShape::Array(data) => {
                let n = data.len() as u64;
                PaginatedResult {
                    data,
                    current_page: 1,
                    last_page: 1,
                    per_page: n,
                    total: n,
                }
            }
            ResponseShape::Envelope { data, fields } => {
                let meta = fields.get("meta").and_then(Value::as_object);
                let lookup = |key: &str| {
                    count(fields.get(key)).or_else(|| meta.and_then(|m| count(m.get(key))))
                };
                let counts = Counts {
                    current_page: lookup("current_page"),
                    last_page: lookup("last_page"),
                    per_page: lookup("per_page"),
                    total: lookup("total"),
                };
                counts.resolve(data)
            }
            ResponseShape::Fallback(map) => {
                let data = match map.get("items") {
                    Some(Value::Array(items)) => items.clone(),
                    _ => Vec::new(),
                };
                let first = |keys: &[&str]| keys.iter().find_map(|k| count(map.get(*k)));
                let counts = Counts {
                    current_page: first(&["page", "current_page"]),
                    last_page: first(&["total_pages", "last_page"]),
                    per_page: first(&["limit", "per_page"]),
                    total: first(&["count", "total"]),
                };
                counts.resolve(data)
            }
        }
    }
}

/// Pagination numbers as found in the body, before defaulting.
struct Counts {
    current_page: Option<u64>,
    last_page: Option<u64>,
    per_page: Option<u64>,
    total: Option<u64>,
}

impl Counts {
    fn resolve(self, data: Vec<Value>) -> PaginatedResult<Value> {
        let n = data.len() as u64;
        let current_page = self.current_page.filter(|p| *p >= 1).unwrap_or(1);
        let last_page = self
            .last_page
            .filter(|p| *p >= 1)
            .unwrap_or_else(|| current_page.max(1));
        PaginatedResult {
            data,
            current_page,
            last_page,
            per_page: self.per_page.filter(|p| *p > 0).unwrap_or(n),
            total: self.total.unwrap_or(n),
        }
    }
}

/// Reads a non-negative integer from a JSON number or numeric string.
fn count(value: Option<&Value>) -> Option<u64> {
    match value? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

/// Normalizes an arbitrary list response. Never fails.
pub fn normalize(value: Value) -> PaginatedResult<Value> {
    ResponseShape::detect(value).into_paginated()
}

/// Normalizes and decodes each item into `T`.
///
/// The shape handling is as lenient as [`normalize`]; only an item that does
/// not match `T` produces an error.
pub fn normalize_into<T: DeserializeOwned>(value: Value) -> Result<PaginatedResult<T>, Error> {
    let page = normalize(value);
    let data = page
        .data
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item).map_err(|e| {
                tracing::error!("Failed to decode list item {}: {}", i, e);
                Error::Decode(format!("item {}: {}", i, e))
            })
        })
        .collect::<Result<Vec<T>, Error>>()?;
    Ok(PaginatedResult {
        data,
        current_page: page.current_page,
        last_page: page.last_page,
        per_page: page.per_page,
        total: page.total,
    })
}
