use chrono::NaiveDate;
use serde::Serialize;

use super::common::{Query, RequestCommon};

/// Filters shared by the consolidated and complaints reports.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    #[serde(skip)]
    pub common: RequestCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_desde: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hasta: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corresponsal_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
}

impl Query for ReportFilter {
    fn common(&self) -> &RequestCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut RequestCommon {
        &mut self.common
    }
}

impl ReportFilter {
    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.fecha_desde = Some(from);
        self.fecha_hasta = Some(to);
        self
    }

    pub fn with_corresponsal_id(mut self, id: i64) -> Self {
        self.corresponsal_id = Some(id);
        self
    }

    pub fn with_estado(mut self, estado: &str) -> Self {
        self.estado = Some(estado.to_string());
        self
    }
}

/// Filters for the audit trail.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditFilter {
    #[serde(skip)]
    pub common: RequestCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usuario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modulo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_desde: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hasta: Option<NaiveDate>,
}

impl Query for AuditFilter {
    fn common(&self) -> &RequestCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut RequestCommon {
        &mut self.common
    }
}

impl AuditFilter {
    pub fn with_usuario(mut self, usuario: &str) -> Self {
        self.usuario = Some(usuario.to_string());
        self
    }

    pub fn with_modulo(mut self, modulo: &str) -> Self {
        self.modulo = Some(modulo.to_string());
        self
    }

    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.fecha_desde = Some(from);
        self.fecha_hasta = Some(to);
        self
    }
}
