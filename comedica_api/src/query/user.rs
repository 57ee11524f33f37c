use serde::Serialize;

use super::common::{Query, RequestCommon};

/// Filters for the backoffice users list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    #[serde(skip)]
    pub common: RequestCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grupo_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activo: Option<bool>,
}

impl Query for UserFilter {
    fn common(&self) -> &RequestCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut RequestCommon {
        &mut self.common
    }
}

impl UserFilter {
    pub fn with_usuario(mut self, usuario: &str) -> Self {
        self.usuario = Some(usuario.to_string());
        self
    }

    pub fn with_nombre(mut self, nombre: &str) -> Self {
        self.nombre = Some(nombre.to_string());
        self
    }

    pub fn with_grupo_id(mut self, grupo_id: i64) -> Self {
        self.grupo_id = Some(grupo_id);
        self
    }

    pub fn with_activo(mut self, activo: bool) -> Self {
        self.activo = Some(activo);
        self
    }
}
