use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use yellowclub_api::{unwrap_data, Client, Resource};

use crate::error::YellowClubError;

/// Dashboard counters and bulk imports, at `/metrics`.
#[derive(Clone)]
pub struct MetricsService {
    resource: Resource<Value>,
}

impl MetricsService {
    pub const ENDPOINT: &'static str = "/metrics";

    pub fn new(client: Client) -> Self {
        Self {
            resource: Resource::new(client, Self::ENDPOINT),
        }
    }

    /// Named dashboard counters from `GET /metrics/stats`. Keys are kept in
    /// sorted order for stable output.
    pub async fn stats(&self) -> Result<BTreeMap<String, Value>, YellowClubError> {
        Ok(self.resource.get_stats(None).await?)
    }

    /// Pushes an aeroclub spreadsheet export (`POST /metrics/import-aeroclube`)
    /// and returns the server's report unwrapped from `data`.
    pub async fn import_aeroclube<P: Serialize + ?Sized>(
        &self,
        payload: &P,
    ) -> Result<Value, YellowClubError> {
        let body: Value = self
            .resource
            .custom_post("/import-aeroclube", Some(payload))
            .await?;
        Ok(unwrap_data(body)?)
    }
}
