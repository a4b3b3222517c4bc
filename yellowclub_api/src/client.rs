//! HTTP client for the Yellow Club REST API.

use std::sync::Arc;

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use url::Url;

use crate::{
    auth::{request_headers, ApiTarget, NoToken, TokenSource},
    query::{Query, RequestParams},
    Error,
};

/// HTTP client for one tenant's API.
///
/// Every request carries JSON `Content-Type`/`Accept` headers and, when the
/// token source has one, a bearer token. There is no retry, timeout, or
/// cancellation at this level. Cloning is cheap and clones share the
/// connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    /// `<tenant host>/<api version>`, without a trailing slash.
    base_api_url: String,
    tokens: Arc<dyn TokenSource>,
}

impl Client {
    /// Creates a client for the given tenant host and API version.
    pub fn new(target: &ApiTarget) -> Self {
        Self::with_base_url(&target.base_url())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_api_url: base_url.trim_end_matches('/').to_string(),
            tokens: Arc::new(NoToken),
        }
    }

    /// Replaces the token source used for the `Authorization` header.
    pub fn with_token_source(mut self, tokens: impl TokenSource + 'static) -> Self {
        self.tokens = Arc::new(tokens);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, endpoint: &str, query: Option<&RequestParams>) -> Result<Url, Error> {
        let endpoint = endpoint.trim();
        let joined = if endpoint.is_empty() || endpoint.starts_with('/') {
            format!("{}{}", self.base_api_url, endpoint)
        } else {
            format!("{}/{}", self.base_api_url, endpoint)
        };
        let url = Url::parse(&joined).map_err(|e| {
            tracing::error!("Invalid URL constructed from {}: {}", joined, e);
            Error::InvalidUrl(format!("{}: {}", joined, e))
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<T, Error> {
        let headers = request_headers(self.tokens.as_ref())?;
        tracing::debug!("{} {}", method, url);

        let mut request = self.http.request(method.clone(), url.clone()).headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }
        let resp = request.send().await.map_err(|e| {
            tracing::error!("{} {} failed: {}", method, url, e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            tracing::warn!("{} {} returned status {}", method, url, status);
            return Err(error_from_body(status.as_u16(), text));
        }

        decode_body(&text)
    }

    /// GET `endpoint` with the given query parameters.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &impl Query,
    ) -> Result<T, Error> {
        let url = self.get_url(endpoint, Some(&query.to_params()))?;
        self.send(Method::GET, url, None).await
    }

    /// POST `endpoint`, JSON-encoding `body` when present.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, Error> {
        let url = self.get_url(endpoint, None)?;
        self.send(Method::POST, url, encode_body(body)?).await
    }

    /// PUT `endpoint`, JSON-encoding `body` when present.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, Error> {
        let url = self.get_url(endpoint, None)?;
        self.send(Method::PUT, url, encode_body(body)?).await
    }

    /// DELETE `endpoint`.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, Error> {
        let url = self.get_url(endpoint, None)?;
        self.send(Method::DELETE, url, None).await
    }
}

fn encode_body<B: Serialize + ?Sized>(body: Option<&B>) -> Result<Option<Vec<u8>>, Error> {
    body.map(|b| {
        serde_json::to_vec(b).map_err(|e| {
            tracing::error!("Failed to encode request body: {}", e);
            Error::Encode(e.to_string())
        })
    })
    .transpose()
}

/// Decodes a success body. An empty body decodes as JSON `null`, so `()`
/// and `Option<_>` work for 204 responses.
fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    let parsed = if text.trim().is_empty() {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_str::<T>(text)
    };
    parsed.map_err(|e| {
        let snippet = truncate_body(text);
        tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
        Error::Decode(e.to_string())
    })
}

/// The server body on a non-2xx response, or a generic message when the body
/// is not JSON.
fn error_from_body(status: u16, text: String) -> Error {
    match serde_json::from_str::<Value>(&text) {
        Ok(body) => Error::HttpStatus {
            status,
            body,
            raw_text: None,
        },
        Err(_) => {
            tracing::debug!("Non-JSON error body: {}", truncate_body(&text));
            Error::HttpStatus {
                status,
                body: json!({ "message": format!("Request failed with status {}", status) }),
                raw_text: Some(text),
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
