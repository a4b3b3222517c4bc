use serde::{Deserialize, Serialize};

use super::de::{bool_lenient_or_true, default_true};

pub type UserID = i64;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserID,
    #[serde(alias = "nome")]
    pub name: String,
    pub email: String,
    #[serde(alias = "perfil")]
    pub role: Option<String>,
    #[serde(
        default = "default_true",
        alias = "ativo",
        deserialize_with = "bool_lenient_or_true"
    )]
    pub active: bool,
}
