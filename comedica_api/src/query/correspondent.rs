use serde::Serialize;

use super::common::{Query, RequestCommon};

/// Filters for the correspondents list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrespondentFilter {
    #[serde(skip)]
    pub common: RequestCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
}

impl Query for CorrespondentFilter {
    fn common(&self) -> &RequestCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut RequestCommon {
        &mut self.common
    }
}

impl CorrespondentFilter {
    pub fn with_codigo(mut self, codigo: &str) -> Self {
        self.codigo = Some(codigo.to_string());
        self
    }

    pub fn with_nombre(mut self, nombre: &str) -> Self {
        self.nombre = Some(nombre.to_string());
        self
    }

    pub fn with_estado(mut self, estado: &str) -> Self {
        self.estado = Some(estado.to_string());
        self
    }
}
