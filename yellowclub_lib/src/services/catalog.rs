use yellowclub_api::types::{PaginatedResult, ServiceID, ServiceInput, ServiceOffering};
use yellowclub_api::{Client, Query, RequestParams, Resource};

use crate::error::YellowClubError;

/// The catalog of billable services (hangarage, maintenance, fuel, ...), at `/services`.
#[derive(Clone)]
pub struct ServiceCatalog {
    resource: Resource<ServiceOffering>,
}

impl ServiceCatalog {
    pub const ENDPOINT: &'static str = "/services";

    pub fn new(client: Client) -> Self {
        Self {
            resource: Resource::new(client, Self::ENDPOINT),
        }
    }

    pub async fn list(
        &self,
        query: &impl Query,
    ) -> Result<PaginatedResult<ServiceOffering>, YellowClubError> {
        Ok(self.resource.list(query).await?)
    }

    /// Services the server reports as active. Rows explicitly flagged inactive
    /// are also dropped locally; rows without a flag are kept. The paging
    /// fields (`total`, `last_page`) stay as the server counted them.
    pub async fn active(&self) -> Result<PaginatedResult<ServiceOffering>, YellowClubError> {
        let mut page = self
            .list(&RequestParams::new().with("active", true))
            .await?;
        page.data.retain(|service| service.active);
        Ok(page)
    }

    pub async fn get(&self, id: ServiceID) -> Result<ServiceOffering, YellowClubError> {
        Ok(self.resource.get_by_id(id).await?)
    }

    pub async fn create(&self, input: &ServiceInput) -> Result<ServiceOffering, YellowClubError> {
        Ok(self.resource.create(input).await?)
    }

    pub async fn update(
        &self,
        id: ServiceID,
        input: &ServiceInput,
    ) -> Result<ServiceOffering, YellowClubError> {
        Ok(self.resource.update(id, input).await?)
    }

    pub async fn delete(&self, id: ServiceID) -> Result<(), YellowClubError> {
        Ok(self.resource.delete_by_id(id).await?)
    }
}
