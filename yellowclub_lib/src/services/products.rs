use yellowclub_api::types::{PaginatedResult, Product, ProductID, ProductInput};
use yellowclub_api::{normalize_into, Client, Query, RequestParams, Resource};

use crate::error::YellowClubError;

/// Points-store products, at `/products`.
#[derive(Clone)]
pub struct ProductService {
    resource: Resource<Product>,
}

impl ProductService {
    pub const ENDPOINT: &'static str = "/products";

    pub fn new(client: Client) -> Self {
        Self {
            resource: Resource::new(client, Self::ENDPOINT),
        }
    }

    pub async fn list(
        &self,
        query: &impl Query,
    ) -> Result<PaginatedResult<Product>, YellowClubError> {
        Ok(self.resource.list(query).await?)
    }

    /// Products visible in the member-facing store (`GET /products/store`).
    pub async fn store_products(&self) -> Result<PaginatedResult<Product>, YellowClubError> {
        let body: serde_json::Value = self
            .resource
            .custom_get("/store", &RequestParams::new())
            .await?;
        Ok(normalize_into(body)?)
    }

    pub async fn get(&self, id: ProductID) -> Result<Product, YellowClubError> {
        Ok(self.resource.get_by_id(id).await?)
    }

    pub async fn create(&self, input: &ProductInput) -> Result<Product, YellowClubError> {
        Ok(self.resource.create(input).await?)
    }

    pub async fn update(
        &self,
        id: ProductID,
        input: &ProductInput,
    ) -> Result<Product, YellowClubError> {
        Ok(self.resource.update(id, input).await?)
    }

    pub async fn delete(&self, id: ProductID) -> Result<(), YellowClubError> {
        Ok(self.resource.delete_by_id(id).await?)
    }
}
