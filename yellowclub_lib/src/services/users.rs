use serde_json::Value;
use yellowclub_api::types::{PaginatedResult, User, UserID};
use yellowclub_api::{Client, Query, Resource};

use crate::error::YellowClubError;

/// Back-office users, at `/users`.
#[derive(Clone)]
pub struct UserService {
    resource: Resource<User>,
}

impl UserService {
    pub const ENDPOINT: &'static str = "/users";

    pub fn new(client: Client) -> Self {
        Self {
            resource: Resource::new(client, Self::ENDPOINT),
        }
    }

    pub async fn list(&self, query: &impl Query) -> Result<PaginatedResult<User>, YellowClubError> {
        Ok(self.resource.list(query).await?)
    }

    pub async fn get(&self, id: UserID) -> Result<User, YellowClubError> {
        Ok(self.resource.get_by_id(id).await?)
    }

    pub async fn delete(&self, id: UserID) -> Result<(), YellowClubError> {
        Ok(self.resource.delete_by_id(id).await?)
    }

    /// Triggers a password reset e-mail; returns the server's message, if any.
    pub async fn reset_password(&self, id: UserID) -> Result<Option<String>, YellowClubError> {
        let body: Value = self
            .resource
            .custom_post(&format!("/{}/reset-password", id), None::<&()>)
            .await?;
        Ok(body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string))
    }
}
