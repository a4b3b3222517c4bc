use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{de::opt_datetime_lenient, PartnerID};

pub type ClientID = i64;

/// A loyalty-program member company or person.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientAccount {
    pub id: ClientID,
    #[serde(alias = "nome")]
    pub name: String,
    /// CPF or CNPJ, unformatted as sent by the server.
    #[serde(alias = "cpf_cnpj", alias = "documento")]
    pub document: Option<String>,
    pub email: Option<String>,
    #[serde(alias = "telefone")]
    pub phone: Option<String>,
    pub status: Option<String>,
    #[serde(alias = "parceiro_id")]
    pub partner_id: Option<PartnerID>,
    #[serde(default, deserialize_with = "opt_datetime_lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for creating or updating a client.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientInput {
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
    pub partner_id: Option<PartnerID>,
}
