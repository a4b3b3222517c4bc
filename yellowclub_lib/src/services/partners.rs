use yellowclub_api::types::{PaginatedResult, Partner, PartnerID, PartnerInput};
use yellowclub_api::{Client, Query, RequestParams, Resource};

use crate::error::YellowClubError;

/// Partner companies that award points, at `/partners`.
#[derive(Clone)]
pub struct PartnerService {
    resource: Resource<Partner>,
}

impl PartnerService {
    pub const ENDPOINT: &'static str = "/partners";

    pub fn new(client: Client) -> Self {
        Self {
            resource: Resource::new(client, Self::ENDPOINT),
        }
    }

    pub async fn list(
        &self,
        query: &impl Query,
    ) -> Result<PaginatedResult<Partner>, YellowClubError> {
        Ok(self.resource.list(query).await?)
    }

    /// Partners with `status=active`.
    pub async fn active(&self) -> Result<PaginatedResult<Partner>, YellowClubError> {
        self.list(&RequestParams::new().with("status", "active"))
            .await
    }

    pub async fn get(&self, id: PartnerID) -> Result<Partner, YellowClubError> {
        Ok(self.resource.get_by_id(id).await?)
    }

    pub async fn create(&self, input: &PartnerInput) -> Result<Partner, YellowClubError> {
        Ok(self.resource.create(input).await?)
    }

    pub async fn update(
        &self,
        id: PartnerID,
        input: &PartnerInput,
    ) -> Result<Partner, YellowClubError> {
        Ok(self.resource.update(id, input).await?)
    }

    pub async fn delete(&self, id: PartnerID) -> Result<(), YellowClubError> {
        Ok(self.resource.delete_by_id(id).await?)
    }
}
