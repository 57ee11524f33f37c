use serde::{Deserialize, Serialize};

/// A backoffice user as listed by the administration screens.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub usuario: String,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub correo: Option<String>,
    #[serde(default)]
    pub grupo_id: Option<i64>,
    #[serde(default)]
    pub grupo: Option<String>,
    #[serde(default)]
    pub activo: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub usuario: String,
    pub nombre: String,
    pub correo: String,
    pub grupo_id: i64,
    pub activo: bool,
}
