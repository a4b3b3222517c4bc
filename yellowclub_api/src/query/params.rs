//! Free-form query parameters with ordered, empty-skipping serialization.

use std::fmt;

use url::{form_urlencoded, Url};

use super::Query;

/// A scalar query parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    fn is_empty(&self) -> bool {
        matches!(self, ParamValue::Str(s) if s.is_empty())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(n) => write!(f, "{}", n),
            ParamValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

macro_rules! int_param {
    ($($t:ty),*) => {
        $(impl From<$t> for ParamValue {
            fn from(value: $t) -> Self {
                ParamValue::Int(i64::from(value))
            }
        })*
    };
}

// Values past i64::MAX are kept as their decimal text.
macro_rules! wide_int_param {
    ($($t:ty),*) => {
        $(impl From<$t> for ParamValue {
            fn from(value: $t) -> Self {
                i64::try_from(value)
                    .map(ParamValue::Int)
                    .unwrap_or_else(|_| ParamValue::Str(value.to_string()))
            }
        })*
    };
}

int_param!(i32, i64, u32);
wide_int_param!(u64, usize);

/// Ordered mapping from key to optional scalar.
///
/// Keys keep the order they were first inserted in; setting an existing key
/// replaces its value in place. Absent values and empty strings are dropped
/// when serializing, so a key never appears as `key=`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestParams {
    pairs: Vec<(String, Option<ParamValue>)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing any earlier value for the same key.
    pub fn set<V: Into<ParamValue>>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        let value = value.map(Into::into);
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    /// Builder form of [`RequestParams::set`] for a present value.
    pub fn with<V: Into<ParamValue>>(mut self, key: &str, value: V) -> Self {
        self.set(key, Some(value));
        self
    }

    /// Builder form of [`RequestParams::set`] for a value that may be absent.
    pub fn with_opt<V: Into<ParamValue>>(mut self, key: &str, value: Option<V>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Copies every key of `other` into `self`; `other` wins on conflicts.
    pub fn merge(&mut self, other: &RequestParams) {
        for (key, value) in &other.pairs {
            self.set(key, value.clone());
        }
    }

    /// Pairs that survive serialization, in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.pairs.iter().filter_map(|(k, v)| match v {
            Some(v) if !v.is_empty() => Some((k.as_str(), v)),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().next().is_none()
    }

    /// URL-encoded `a=1&b=x` form, without a leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            serializer.append_pair(key, &value.to_string());
        }
        serializer.finish()
    }
}

impl Query for RequestParams {
    fn to_params(&self) -> RequestParams {
        self.clone()
    }

    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if !self.is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in self.pairs() {
                query.append_pair(key, &value.to_string());
            }
        }
        url
    }
}

impl<K: AsRef<str>, V: Into<ParamValue>> FromIterator<(K, Option<V>)> for RequestParams {
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut params = RequestParams::new();
        for (key, value) in iter {
            params.set(key.as_ref(), value);
        }
        params
    }
}
