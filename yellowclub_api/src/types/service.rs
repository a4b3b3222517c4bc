use serde::{Deserialize, Serialize};

use super::de::{bool_lenient_or_true, default_true, opt_f64_lenient};

pub type ServiceID = i64;

/// An entry of the service catalog (maintenance, inspection, ...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub id: ServiceID,
    #[serde(alias = "nome")]
    pub name: String,
    #[serde(alias = "descricao")]
    pub description: Option<String>,
    #[serde(default, alias = "valor", alias = "preco", deserialize_with = "opt_f64_lenient")]
    pub price: Option<f64>,
    #[serde(
        default = "default_true",
        alias = "ativo",
        deserialize_with = "bool_lenient_or_true"
    )]
    pub active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub active: bool,
}
