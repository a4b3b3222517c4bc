use yellowclub_api::types::{Aircraft, AircraftID, AircraftInput, ClientID, PaginatedResult};
use yellowclub_api::{Client, Query, RequestParams, Resource};

use crate::error::YellowClubError;
use crate::validation::validate_registration;

/// Registered aircraft, at `/aircraft`.
#[derive(Clone)]
pub struct AircraftService {
    resource: Resource<Aircraft>,
}

impl AircraftService {
    pub const ENDPOINT: &'static str = "/aircraft";

    pub fn new(client: Client) -> Self {
        Self {
            resource: Resource::new(client, Self::ENDPOINT),
        }
    }

    pub async fn list(
        &self,
        query: &impl Query,
    ) -> Result<PaginatedResult<Aircraft>, YellowClubError> {
        Ok(self.resource.list(query).await?)
    }

    /// Aircraft owned by one client.
    pub async fn for_client(
        &self,
        client_id: ClientID,
    ) -> Result<PaginatedResult<Aircraft>, YellowClubError> {
        self.list(&RequestParams::new().with("client_id", client_id))
            .await
    }

    pub async fn get(&self, id: AircraftID) -> Result<Aircraft, YellowClubError> {
        Ok(self.resource.get_by_id(id).await?)
    }

    /// Creates the aircraft after normalizing its registration mark.
    pub async fn create(&self, input: &AircraftInput) -> Result<Aircraft, YellowClubError> {
        let input = AircraftInput {
            registration: validate_registration(&input.registration)?,
            ..input.clone()
        };
        Ok(self.resource.create(&input).await?)
    }

    pub async fn update(
        &self,
        id: AircraftID,
        input: &AircraftInput,
    ) -> Result<Aircraft, YellowClubError> {
        Ok(self.resource.update(id, input).await?)
    }

    pub async fn delete(&self, id: AircraftID) -> Result<(), YellowClubError> {
        Ok(self.resource.delete_by_id(id).await?)
    }
}
