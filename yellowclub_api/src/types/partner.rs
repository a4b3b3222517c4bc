use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de::{opt_datetime_lenient, opt_f64_lenient};

pub type PartnerID = i64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerID,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "cnpj", alias = "documento")]
    pub document: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "telefone")]
    pub phone: Option<String>,
    pub status: Option<String>,
    /// Points credited per currency unit spent with this partner.
    #[serde(
        default,
        alias = "taxa_pontos",
        deserialize_with = "opt_f64_lenient"
    )]
    pub points_rate: Option<f64>,
    #[serde(default, deserialize_with = "opt_datetime_lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartnerInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_rate: Option<f64>,
}
