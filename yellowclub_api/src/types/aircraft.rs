use serde::{Deserialize, Serialize};

use super::ClientID;

pub type AircraftID = i64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    pub id: AircraftID,
    /// Registration mark, e.g. `PR-ABC`.
    #[serde(alias = "matricula")]
    pub registration: String,
    #[serde(alias = "modelo")]
    pub model: Option<String>,
    #[serde(alias = "fabricante")]
    pub manufacturer: Option<String>,
    #[serde(alias = "cliente_id")]
    pub client_id: Option<ClientID>,
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftInput {
    pub registration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientID>,
}
