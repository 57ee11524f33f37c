use serde::{Deserialize, Serialize};

/// One row of the consolidated report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsolidatedRow {
    #[serde(default)]
    pub fecha_desde: Option<String>,
    #[serde(default)]
    pub fecha_hasta: Option<String>,
    #[serde(default)]
    pub corresponsal: Option<String>,
    #[serde(default)]
    pub total_transacciones: i64,
    #[serde(default)]
    pub monto_total: f64,
    #[serde(default)]
    pub total_reclamos: i64,
}

/// One audit trail entry.
///
/// The action label arrives under different fields depending on the module
/// that produced the entry, so all three are kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRecord {
    pub id: i64,
    #[serde(default)]
    pub usuario: Option<String>,
    #[serde(default)]
    pub fecha: Option<String>,
    #[serde(default)]
    pub modulo: Option<String>,
    #[serde(default)]
    pub accion: Option<String>,
    #[serde(default)]
    pub tipo_accion: Option<String>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub codigo: String,
    pub descripcion: String,
    #[serde(default)]
    pub activo: Option<bool>,
}
