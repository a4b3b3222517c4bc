//! Generic CRUD service bound to one endpoint.

use std::fmt::Display;
use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    normalize::normalize_into,
    query::{Query, RequestParams},
    types::PaginatedResult,
    Client, Error,
};

/// Typed list/get/create/update/delete over a fixed endpoint such as `/clients`.
///
/// The endpoint is set at construction. To talk to a different endpoint,
/// build another instance with [`Resource::with_endpoint`].
pub struct Resource<T> {
    client: Client,
    endpoint: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            endpoint: self.endpoint.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> Resource<T> {
    pub fn new(client: Client, endpoint: &str) -> Self {
        let endpoint = endpoint.trim().trim_end_matches('/');
        let endpoint = if endpoint.starts_with('/') {
            endpoint.to_string()
        } else {
            format!("/{}", endpoint)
        };
        Self {
            client,
            endpoint,
            _marker: PhantomData,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// A new service for `endpoint` that shares this one's client.
    pub fn with_endpoint<U: DeserializeOwned>(&self, endpoint: &str) -> Resource<U> {
        Resource::new(self.client.clone(), endpoint)
    }

    fn path(&self, subpath: &str) -> String {
        let subpath = subpath.trim();
        if subpath.is_empty() {
            self.endpoint.clone()
        } else if subpath.starts_with('/') {
            format!("{}{}", self.endpoint, subpath)
        } else {
            format!("{}/{}", self.endpoint, subpath)
        }
    }

    fn item_path(&self, id: impl Display) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    /// Fetches one page and normalizes whatever shape the server used.
    pub async fn list(&self, query: &impl Query) -> Result<PaginatedResult<T>, Error> {
        let body: Value = self.client.get(&self.endpoint, query).await?;
        normalize_into(body)
    }

    /// [`Resource::list`] with `search=<term>` merged over the query.
    pub async fn search(
        &self,
        term: &str,
        query: &impl Query,
    ) -> Result<PaginatedResult<T>, Error> {
        let mut params = query.to_params();
        params.set("search", Some(term));
        self.list(&params).await
    }

    pub async fn get_by_id(&self, id: impl Display) -> Result<T, Error> {
        let body: Value = self
            .client
            .get(&self.item_path(id), &RequestParams::new())
            .await?;
        unwrap_data(body)
    }

    pub async fn create<I: Serialize + ?Sized>(&self, input: &I) -> Result<T, Error> {
        let body: Value = self.client.post(&self.endpoint, Some(input)).await?;
        unwrap_data(body)
    }

    pub async fn update<I: Serialize + ?Sized>(
        &self,
        id: impl Display,
        input: &I,
    ) -> Result<T, Error> {
        let body: Value = self.client.put(&self.item_path(id), Some(input)).await?;
        unwrap_data(body)
    }

    /// DELETE `<endpoint>/<id>`. Whatever a 2xx response carries is ignored.
    pub async fn delete_by_id(&self, id: impl Display) -> Result<(), Error> {
        match self.client.delete::<Value>(&self.item_path(id)).await {
            Ok(_) | Err(Error::Decode(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// GET `<endpoint><subpath>`; the body is returned as decoded, without unwrapping.
    pub async fn custom_get<R: DeserializeOwned>(
        &self,
        subpath: &str,
        query: &impl Query,
    ) -> Result<R, Error> {
        self.client.get(&self.path(subpath), query).await
    }

    /// POST `<endpoint><subpath>` for actions that are not plain CRUD.
    pub async fn custom_post<R: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        subpath: &str,
        body: Option<&B>,
    ) -> Result<R, Error> {
        self.client.post(&self.path(subpath), body).await
    }

    pub async fn custom_put<R: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        subpath: &str,
        body: Option<&B>,
    ) -> Result<R, Error> {
        self.client.put(&self.path(subpath), body).await
    }

    pub async fn custom_delete<R: DeserializeOwned>(&self, subpath: &str) -> Result<R, Error> {
        self.client.delete(&self.path(subpath)).await
    }

    /// GET the stats sub-resource (`/stats` unless given) and unwrap `.data`.
    pub async fn get_stats<S: DeserializeOwned>(&self, subpath: Option<&str>) -> Result<S, Error> {
        let body: Value = self
            .custom_get(subpath.unwrap_or("/stats"), &RequestParams::new())
            .await?;
        unwrap_data(body)
    }
}

/// Decodes `body.data` when the body is an object with a `data` key, the
/// body itself otherwise.
pub fn unwrap_data<T: DeserializeOwned>(body: Value) -> Result<T, Error> {
    let inner = match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    };
    serde_json::from_value(inner).map_err(|e| {
        tracing::error!("Failed to decode resource: {}", e);
        Error::Decode(e.to_string())
    })
}
