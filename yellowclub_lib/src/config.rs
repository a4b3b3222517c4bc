//! Environment-driven connection settings.

use std::env;

use yellowclub_api::auth::DEFAULT_TOKEN_VAR;
use yellowclub_api::{ApiTarget, Client, EnvToken};

pub const HOST_VAR: &str = "YELLOWCLUB_API_HOST";
pub const VERSION_VAR: &str = "YELLOWCLUB_API_VERSION";

pub const DEFAULT_HOST: &str = "http://localhost:8000";
pub const DEFAULT_VERSION: &str = "api/v1";

/// Where to reach the API and which variable holds the bearer token.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub host: String,
    pub api_version: String,
    pub token_var: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            api_version: DEFAULT_VERSION.to_string(),
            token_var: DEFAULT_TOKEN_VAR.to_string(),
        }
    }
}

impl Settings {
    /// Reads `YELLOWCLUB_API_HOST` and `YELLOWCLUB_API_VERSION`, falling back
    /// to the defaults for unset or blank values.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            host: read(HOST_VAR, DEFAULT_HOST),
            api_version: read(VERSION_VAR, DEFAULT_VERSION),
            token_var: DEFAULT_TOKEN_VAR.to_string(),
        }
    }

    pub fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.to_string();
        self
    }

    pub fn target(&self) -> ApiTarget {
        ApiTarget::new(self.host.clone(), self.api_version.clone())
    }

    /// A client that reads its token from the configured variable on every request.
    pub fn client(&self) -> Client {
        Client::new(&self.target()).with_token_source(EnvToken::new(&self.token_var))
    }
}
