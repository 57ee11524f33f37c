use serde::{Deserialize, Serialize};

/// Login credentials as the backend expects them.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub usuario: String,
    pub clave: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("usuario", &self.usuario)
            .field("clave", &"***")
            .finish()
    }
}

/// Profile of the authenticated backoffice user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub usuario: String,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub correo: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Payload of a successful login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub usuario: UserProfile,
    /// Set when the user must change the password before using the backoffice.
    #[serde(default)]
    pub cambiar_clave: bool,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub clave_actual: String,
    pub clave_nueva: String,
}

/// Challenge issued when a soft token is requested.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftTokenChallenge {
    pub referencia: String,
    #[serde(default)]
    pub expira_en: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoftTokenValidation {
    pub valido: bool,
}
