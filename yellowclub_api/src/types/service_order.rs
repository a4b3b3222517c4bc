use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    de::{f64_lenient, opt_datetime_lenient, opt_f64_lenient},
    AircraftID, ClientID, ServiceID,
};

pub type ServiceOrderID = i64;

/// Rounds a currency amount to cents.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn one() -> f64 {
    1.0
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceOrderItem {
    #[serde(default, alias = "servico_id", skip_serializing_if = "Option::is_none")]
    pub service_id: Option<ServiceID>,
    #[serde(default, alias = "descricao", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "one", alias = "quantidade", deserialize_with = "f64_lenient")]
    pub quantity: f64,
    #[serde(default, alias = "valor_unitario", deserialize_with = "f64_lenient")]
    pub unit_price: f64,
    /// Line total as computed by the server, when it sends one.
    #[serde(
        default,
        alias = "valor_total",
        alias = "subtotal",
        deserialize_with = "opt_f64_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub total: Option<f64>,
}

impl ServiceOrderItem {
    pub fn new(service_id: ServiceID, quantity: f64, unit_price: f64) -> Self {
        Self {
            service_id: Some(service_id),
            description: None,
            quantity,
            unit_price,
            total: None,
        }
    }

    /// Server total if present, otherwise quantity times unit price.
    pub fn line_total(&self) -> f64 {
        self.total
            .unwrap_or_else(|| round_cents(self.quantity * self.unit_price))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceOrder {
    pub id: ServiceOrderID,
    #[serde(alias = "numero", alias = "numero_os")]
    pub order_number: Option<String>,
    #[serde(alias = "cliente_id")]
    pub client_id: Option<ClientID>,
    #[serde(alias = "aeronave_id")]
    pub aircraft_id: Option<AircraftID>,
    pub status: Option<String>,
    #[serde(alias = "descricao")]
    pub description: Option<String>,
    #[serde(default, alias = "itens")]
    pub items: Vec<ServiceOrderItem>,
    #[serde(default, alias = "valor_total", deserialize_with = "opt_f64_lenient")]
    pub total: Option<f64>,
    #[serde(default, deserialize_with = "opt_datetime_lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ServiceOrder {
    /// Sum of all line totals.
    pub fn computed_total(&self) -> f64 {
        round_cents(self.items.iter().map(ServiceOrderItem::line_total).sum())
    }

    /// The server-reported total, falling back to the computed one.
    pub fn total_or_computed(&self) -> f64 {
        self.total.unwrap_or_else(|| self.computed_total())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceOrderInput {
    pub client_id: ClientID,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft_id: Option<AircraftID>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub items: Vec<ServiceOrderItem>,
    pub total: f64,
}

impl ServiceOrderInput {
    /// Builds an input whose `total` is the sum of its line totals.
    pub fn new(client_id: ClientID, items: Vec<ServiceOrderItem>) -> Self {
        let total = round_cents(items.iter().map(ServiceOrderItem::line_total).sum());
        Self {
            client_id,
            items,
            total,
            ..Default::default()
        }
    }
}

/// Response of the order-number generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderNumber {
    #[serde(alias = "numero", alias = "number")]
    pub order_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn line_total_prefers_server_value() {
        let item: ServiceOrderItem =
            serde_json::from_value(json!({"quantidade": 2, "valor_unitario": "10.50", "valor_total": 20})).unwrap();
        assert_eq!(item.line_total(), 20.0);
    }

    #[test]
    fn line_total_computed() {
        let item = ServiceOrderItem::new(1, 3.0, 0.1);
        assert_eq!(item.line_total(), 0.3);
    }

    #[test]
    fn order_total_sums_items() {
        let order: ServiceOrder = serde_json::from_value(json!({
            "id": 9,
            "numero": "OS-0009",
            "itens": [
                {"servico_id": 1, "quantidade": 1, "valor_unitario": 150.25},
                {"servico_id": 2, "quantidade": "2", "valor_unitario": 99.9}
            ]
        }))
        .unwrap();
        assert_eq!(order.order_number.as_deref(), Some("OS-0009"));
        assert_eq!(order.computed_total(), 350.05);
        assert_eq!(order.total_or_computed(), 350.05);
    }

    #[test]
    fn missing_quantity_defaults_to_one() {
        let item: ServiceOrderItem = serde_json::from_value(json!({"unit_price": 12})).unwrap();
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.line_total(), 12.0);
    }

    #[test]
    fn input_total_is_precomputed() {
        let input = ServiceOrderInput::new(
            4,
            vec![ServiceOrderItem::new(1, 2.0, 10.0), ServiceOrderItem::new(2, 1.0, 5.5)],
        );
        assert_eq!(input.total, 25.5);
        let body = serde_json::to_value(&input).unwrap();
        assert!(body.get("aircraft_id").is_none());
        assert_eq!(body["client_id"], 4);
    }
}
