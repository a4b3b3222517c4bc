use yellowclub_api::types::{
    round_cents, OrderNumber, PaginatedResult, ServiceOrder, ServiceOrderID, ServiceOrderInput,
    ServiceOrderItem,
};
use yellowclub_api::{unwrap_data, Client, RequestParams, Resource, ServiceOrderQuery};

use crate::error::YellowClubError;

/// Work orders billed to clients, at `/service-orders`.
#[derive(Clone)]
pub struct ServiceOrderService {
    resource: Resource<ServiceOrder>,
}

impl ServiceOrderService {
    pub const ENDPOINT: &'static str = "/service-orders";

    pub fn new(client: Client) -> Self {
        Self {
            resource: Resource::new(client, Self::ENDPOINT),
        }
    }

    pub async fn list(
        &self,
        query: &ServiceOrderQuery,
    ) -> Result<PaginatedResult<ServiceOrder>, YellowClubError> {
        Ok(self.resource.list(query).await?)
    }

    pub async fn get(&self, id: ServiceOrderID) -> Result<ServiceOrder, YellowClubError> {
        Ok(self.resource.get_by_id(id).await?)
    }

    /// Creates the order with `total` recomputed from its items. Orders
    /// without items keep the total they were given.
    pub async fn create(
        &self,
        input: &ServiceOrderInput,
    ) -> Result<ServiceOrder, YellowClubError> {
        let input = with_item_total(input)?;
        tracing::debug!(
            "Creating service order for client {} with {} item(s), total {:.2}",
            input.client_id,
            input.items.len(),
            input.total
        );
        Ok(self.resource.create(&input).await?)
    }

    pub async fn update(
        &self,
        id: ServiceOrderID,
        input: &ServiceOrderInput,
    ) -> Result<ServiceOrder, YellowClubError> {
        let input = with_item_total(input)?;
        Ok(self.resource.update(id, &input).await?)
    }

    pub async fn delete(&self, id: ServiceOrderID) -> Result<(), YellowClubError> {
        Ok(self.resource.delete_by_id(id).await?)
    }

    /// Copies an existing order server-side (`POST /service-orders/{id}/duplicate`).
    pub async fn duplicate_service_order(
        &self,
        id: ServiceOrderID,
    ) -> Result<ServiceOrder, YellowClubError> {
        let body: serde_json::Value = self
            .resource
            .custom_post(&format!("/{}/duplicate", id), None::<&()>)
            .await?;
        Ok(unwrap_data(body)?)
    }

    /// Reserves the next order number (`GET /service-orders/generate-number`).
    pub async fn generate_order_number(&self) -> Result<String, YellowClubError> {
        let body: serde_json::Value = self
            .resource
            .custom_get("/generate-number", &RequestParams::new())
            .await?;
        let number: OrderNumber = unwrap_data(body)?;
        Ok(number.order_number)
    }
}

fn with_item_total(input: &ServiceOrderInput) -> Result<ServiceOrderInput, YellowClubError> {
    if let Some(item) = input
        .items
        .iter()
        .find(|item| item.quantity <= 0.0 || item.unit_price < 0.0)
    {
        return Err(YellowClubError::InvalidInput(format!(
            "order item has quantity {} and unit price {}; quantity must be positive and price non-negative",
            item.quantity, item.unit_price
        )));
    }
    let mut input = input.clone();
    if !input.items.is_empty() {
        input.total = round_cents(input.items.iter().map(ServiceOrderItem::line_total).sum());
    }
    Ok(input)
}
