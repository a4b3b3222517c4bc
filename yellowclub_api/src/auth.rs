//! Request headers, bearer token lookup, and base URL construction.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

use crate::Error;

/// Environment variable holding the bearer token by default.
pub const DEFAULT_TOKEN_VAR: &str = "YELLOWCLUB_TOKEN";

/// Read-only source of the bearer token attached to every request.
///
/// The token is looked up once per request, so a source backed by mutable
/// storage sees rotations made by whoever owns that storage.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// Sends requests without an `Authorization` header.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoToken;

impl TokenSource for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

/// A fixed token.
#[derive(Clone, Debug)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenSource for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Reads the token from an environment variable on every request.
#[derive(Clone, Debug)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_VAR)
    }
}

impl TokenSource for EnvToken {
    fn token(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

/// Tenant host plus API version segment, e.g. `https://acme.example.com` + `api/v1`.
///
/// Both strings come from outside this crate; no tenant resolution happens here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiTarget {
    pub host: String,
    pub version: String,
}

impl ApiTarget {
    pub fn new(host: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            version: version.into(),
        }
    }

    /// `<host>/<version>` with exactly one slash between the two.
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        let version = self.version.trim_matches('/');
        if version.is_empty() {
            host.to_string()
        } else {
            format!("{}/{}", host, version)
        }
    }
}

/// Builds the JSON headers for one request, adding `Authorization` when the
/// source yields a non-empty token.
pub fn request_headers(tokens: &dyn TokenSource) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(token) = tokens.token().filter(|t| !t.trim().is_empty()) {
        let value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|_| Error::InvalidHeader("authorization"))?;
        headers.insert(AUTHORIZATION, value);
    }
    Ok(headers)
}
