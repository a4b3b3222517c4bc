//! Error types for the API client.

use serde_json::Value;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (connection refused, DNS, TLS).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The base URL and endpoint did not combine into a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// A header value (usually the bearer token) contained invalid characters.
    #[error("Invalid value for header {0}")]
    InvalidHeader(&'static str),
    /// The request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Encode(String),
    /// The API returned a non-success status.
    ///
    /// `body` is the decoded JSON error body. When the server sent something
    /// that is not JSON, `body` holds a generic `{"message": ...}` object and
    /// `raw_text` keeps what the server actually sent.
    #[error("Request failed with status {status}")]
    HttpStatus {
        status: u16,
        body: Value,
        raw_text: Option<String>,
    },
    /// A success response could not be decoded into the requested type.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl Error {
    /// HTTP status code, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw error body returned by the server.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::HttpStatus { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The `message` field of the error body, if the server sent one.
    pub fn message(&self) -> Option<&str> {
        self.body()?.get("message")?.as_str()
    }

    /// Field-level validation errors (`{"errors": {field: [msg, ...]}}`).
    pub fn validation_errors(&self) -> Option<&serde_json::Map<String, Value>> {
        self.body()?.get("errors")?.as_object()
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}
