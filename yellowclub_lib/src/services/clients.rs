use yellowclub_api::types::{ClientAccount, ClientID, ClientInput, PaginatedResult};
use yellowclub_api::{Client, ClientQuery, PagedQuery, Resource};

use crate::error::YellowClubError;
use crate::validation::validate_search;

/// Aircraft owners and club members, at `/clients`.
#[derive(Clone)]
pub struct ClientService {
    resource: Resource<ClientAccount>,
}

impl ClientService {
    pub const ENDPOINT: &'static str = "/clients";

    pub fn new(client: Client) -> Self {
        Self {
            resource: Resource::new(client, Self::ENDPOINT),
        }
    }

    pub fn resource(&self) -> &Resource<ClientAccount> {
        &self.resource
    }

    pub async fn list(
        &self,
        query: &ClientQuery,
    ) -> Result<PaginatedResult<ClientAccount>, YellowClubError> {
        Ok(self.resource.list(query).await?)
    }

    /// First page of clients matching `term` by name, document, or e-mail.
    pub async fn search_clients(
        &self,
        term: &str,
    ) -> Result<PaginatedResult<ClientAccount>, YellowClubError> {
        let term = validate_search(term)?;
        Ok(self
            .resource
            .search(&term, &ClientQuery::default().with_page(1))
            .await?)
    }

    pub async fn get(&self, id: ClientID) -> Result<ClientAccount, YellowClubError> {
        Ok(self.resource.get_by_id(id).await?)
    }

    pub async fn create(&self, input: &ClientInput) -> Result<ClientAccount, YellowClubError> {
        tracing::debug!("Creating client {}", input.name);
        Ok(self.resource.create(input).await?)
    }

    pub async fn update(
        &self,
        id: ClientID,
        input: &ClientInput,
    ) -> Result<ClientAccount, YellowClubError> {
        Ok(self.resource.update(id, input).await?)
    }

    pub async fn delete(&self, id: ClientID) -> Result<(), YellowClubError> {
        Ok(self.resource.delete_by_id(id).await?)
    }
}
