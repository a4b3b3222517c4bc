use serde_json::Value;
use yellowclub_api::types::{ExtractSummary, PaginatedResult, PointsBalance, PointsTransaction};
use yellowclub_api::{unwrap_data, Client, ExtractQuery, RequestParams, Resource};

use crate::error::YellowClubError;

/// The logged-in user's points movements, at `/points/extract`.
#[derive(Clone)]
pub struct PointsExtractService {
    resource: Resource<PointsTransaction>,
}

impl PointsExtractService {
    pub const ENDPOINT: &'static str = "/points/extract";

    pub fn new(client: Client) -> Self {
        Self {
            resource: Resource::new(client, Self::ENDPOINT),
        }
    }

    /// One page of the extract. `tipo` and `valor` are decoded into
    /// [`yellowclub_api::types::TransactionType`] and an absolute amount.
    pub async fn list(
        &self,
        query: &ExtractQuery,
    ) -> Result<PaginatedResult<PointsTransaction>, YellowClubError> {
        Ok(self.resource.list(query).await?)
    }

    /// One page of the extract together with its totals.
    pub async fn summarize(
        &self,
        query: &ExtractQuery,
    ) -> Result<(PaginatedResult<PointsTransaction>, ExtractSummary), YellowClubError> {
        let page = self.list(query).await?;
        let summary = ExtractSummary::from_transactions(&page.data);
        tracing::debug!(
            "Extract page {}: {} movement(s), net {}",
            page.current_page,
            page.len(),
            summary.net
        );
        Ok((page, summary))
    }
}

/// The logged-in user's points balance, at `/points/balance`.
#[derive(Clone)]
pub struct UserPointsService {
    resource: Resource<PointsBalance>,
}

impl UserPointsService {
    pub const ENDPOINT: &'static str = "/points/balance";

    pub fn new(client: Client) -> Self {
        Self {
            resource: Resource::new(client, Self::ENDPOINT),
        }
    }

    pub async fn balance(&self) -> Result<PointsBalance, YellowClubError> {
        let body: Value = self.resource.custom_get("", &RequestParams::new()).await?;
        Ok(unwrap_data(body)?)
    }
}
