use serde::{Deserialize, Serialize};

use super::de::{bool_lenient_or_true, default_true, f64_lenient, opt_i64_lenient};

pub type ProductID = i64;

/// A points-store product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductID,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "descricao")]
    pub description: Option<String>,
    /// Cost of one unit, in points.
    #[serde(alias = "pontos", alias = "points", deserialize_with = "f64_lenient")]
    pub points_price: f64,
    #[serde(default, alias = "estoque", deserialize_with = "opt_i64_lenient")]
    pub stock: Option<i64>,
    #[serde(
        default = "default_true",
        alias = "ativo",
        deserialize_with = "bool_lenient_or_true"
    )]
    pub active: bool,
    #[serde(alias = "imagem")]
    pub image_url: Option<String>,
}

impl Product {
    /// Whether `quantity` units can be ordered given the known stock.
    /// Unknown stock counts as available.
    pub fn in_stock(&self, quantity: u32) -> bool {
        self.active && self.stock.map_or(true, |s| s >= i64::from(quantity))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub points_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_flag_and_string_stock() {
        let product: Product = serde_json::from_value(json!({
            "id": 1,
            "nome": "Boné",
            "pontos": 100,
            "ativo": null,
            "estoque": "10"
        }))
        .unwrap();
        assert!(product.active);
        assert_eq!(product.stock, Some(10));
        assert!(product.in_stock(10));
        assert!(!product.in_stock(11));
    }

    #[test]
    fn inactive_product_is_never_in_stock() {
        let product: Product =
            serde_json::from_value(json!({"id": 2, "nome": "Caneca", "pontos": 50, "ativo": "0"}))
                .unwrap();
        assert!(!product.active);
        assert!(!product.in_stock(1));
    }
}
