//! Redeeming points for store products.
//!
//! The balance is checked here before anything is sent, so an obviously
//! unaffordable redemption never reaches the server. Deducting the points
//! stays server-side.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use yellowclub_api::types::{round_cents, ProductID};
use yellowclub_api::{unwrap_data, Client, Resource};

use crate::error::YellowClubError;
use crate::services::{ProductService, UserPointsService};
use crate::validation::{sanitize_text, validate_pix_key, validate_quantity, validate_uf};

/// Postal delivery address for physical products.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "cep")]
    pub zip_code: String,
    #[serde(rename = "logradouro")]
    pub street: String,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "complemento", skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(rename = "bairro")]
    pub district: String,
    #[serde(rename = "cidade")]
    pub city: String,
    pub uf: String,
}

/// How the redeemed product reaches the member.
#[derive(Clone, Debug, PartialEq)]
pub enum Delivery {
    /// Cash-back products paid out to a PIX key.
    Pix { key: String },
    /// Physical products shipped to an address.
    Address(Address),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RedemptionRequest {
    pub product_id: ProductID,
    pub quantity: u32,
    pub delivery: Delivery,
}

/// Server acknowledgement of a redemption.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Redemption {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, alias = "produto_id")]
    pub product_id: Option<ProductID>,
    #[serde(default, alias = "quantidade")]
    pub quantity: Option<u32>,
    #[serde(default, alias = "pontos")]
    pub points: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Serialize)]
struct RedemptionBody<'a> {
    product_id: ProductID,
    quantity: u32,
    points: f64,
    delivery_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pix_key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pix_key_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<&'a Address>,
}

pub struct RedemptionService {
    products: ProductService,
    points: UserPointsService,
    redemptions: Resource<Value>,
}

impl RedemptionService {
    pub const ENDPOINT: &'static str = "/points/redemptions";

    pub fn new(client: Client) -> Self {
        Self {
            products: ProductService::new(client.clone()),
            points: UserPointsService::new(client.clone()),
            redemptions: Resource::new(client, Self::ENDPOINT),
        }
    }

    /// Validates the request, checks stock and balance, then posts the
    /// redemption. Fails with [`YellowClubError::InsufficientPoints`] without
    /// calling the server when the balance does not cover the cost.
    pub async fn redeem(&self, request: &RedemptionRequest) -> Result<Redemption, YellowClubError> {
        let quantity = validate_quantity(request.quantity)?;
        let delivery = normalize_delivery(&request.delivery)?;

        let (product, balance) = tokio::try_join!(
            self.products.get(request.product_id),
            self.points.balance()
        )?;

        if !product.in_stock(quantity) {
            return Err(YellowClubError::InvalidInput(format!(
                "product {} is not available in quantity {}",
                product.id, quantity
            )));
        }

        let required = round_cents(product.points_price * f64::from(quantity));
        if balance.balance < required {
            tracing::warn!(
                "Redemption of product {} refused: {} points required, {} available",
                product.id,
                required,
                balance.balance
            );
            return Err(YellowClubError::InsufficientPoints {
                required,
                available: balance.balance,
            });
        }

        let body = match &delivery {
            NormalizedDelivery::Pix { key, kind } => RedemptionBody {
                product_id: product.id,
                quantity,
                points: required,
                delivery_type: "pix",
                pix_key: Some(key.as_str()),
                pix_key_type: Some(*kind),
                address: None,
            },
            NormalizedDelivery::Address(address) => RedemptionBody {
                product_id: product.id,
                quantity,
                points: required,
                delivery_type: "address",
                pix_key: None,
                pix_key_type: None,
                address: Some(address),
            },
        };
        let response: Value = self.redemptions.custom_post("", Some(&body)).await?;
        Ok(unwrap_data(response)?)
    }
}

enum NormalizedDelivery {
    Pix { key: String, kind: &'static str },
    Address(Address),
}

fn normalize_delivery(delivery: &Delivery) -> Result<NormalizedDelivery, YellowClubError> {
    match delivery {
        Delivery::Pix { key } => {
            let (kind, key) = validate_pix_key(key)?;
            Ok(NormalizedDelivery::Pix {
                key,
                kind: kind.as_str(),
            })
        }
        Delivery::Address(address) => {
            let zip_digits: String = address
                .zip_code
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            if zip_digits.len() != 8 {
                return Err(YellowClubError::InvalidInput(format!(
                    "CEP '{}' must have 8 digits",
                    address.zip_code
                )));
            }
            Ok(NormalizedDelivery::Address(Address {
                zip_code: address.zip_code.trim().to_string(),
                street: sanitize_text(&address.street, 200)?,
                number: sanitize_text(&address.number, 20)?,
                complement: address
                    .complement
                    .as_deref()
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string),
                district: sanitize_text(&address.district, 100)?,
                city: sanitize_text(&address.city, 100)?,
                uf: validate_uf(&address.uf)?,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address {
            zip_code: "01310-100".to_string(),
            street: " Avenida Paulista ".to_string(),
            number: "1000".to_string(),
            complement: Some("  ".to_string()),
            district: "Bela Vista".to_string(),
            city: "São Paulo".to_string(),
            uf: "sp".to_string(),
        }
    }

    #[test]
    fn address_is_cleaned() {
        match normalize_delivery(&Delivery::Address(address())).unwrap() {
            NormalizedDelivery::Address(a) => {
                assert_eq!(a.street, "Avenida Paulista");
                assert_eq!(a.uf, "SP");
                assert_eq!(a.complement, None);
            }
            NormalizedDelivery::Pix { .. } => panic!("expected address"),
        }
    }

    #[test]
    fn bad_zip_rejected() {
        let mut a = address();
        a.zip_code = "0131".to_string();
        assert!(normalize_delivery(&Delivery::Address(a)).is_err());
    }

    #[test]
    fn pix_key_kind_attached() {
        let delivery = Delivery::Pix {
            key: "piloto@aeroclube.com.br".to_string(),
        };
        match normalize_delivery(&delivery).unwrap() {
            NormalizedDelivery::Pix { key, kind } => {
                assert_eq!(key, "piloto@aeroclube.com.br");
                assert_eq!(kind, "email");
            }
            NormalizedDelivery::Address(_) => panic!("expected pix"),
        }
    }

    #[test]
    fn address_serializes_with_server_names() {
        let body = serde_json::to_value(address()).unwrap();
        assert_eq!(body["cep"], "01310-100");
        assert_eq!(body["logradouro"], " Avenida Paulista ");
        assert_eq!(body["uf"], "sp");
    }
}
