use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub numero_transaccion: Option<String>,
    #[serde(default)]
    pub numero_cuenta: Option<String>,
    #[serde(default)]
    pub tipo_transaccion: Option<String>,
    #[serde(default)]
    pub monto: Option<f64>,
    #[serde(default)]
    pub fecha_transaccion: Option<String>,
    #[serde(default)]
    pub corresponsal: Option<String>,
    #[serde(default)]
    pub estado: Option<String>,
}
