use chrono::NaiveDate;
use serde::Serialize;

use super::common::{Query, RequestCommon};

/// Filters for the transactions list, the transactions report and the XML export.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    #[serde(skip)]
    pub common: RequestCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_cuenta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_transaccion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corresponsal_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monto_minimo: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monto_maximo: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_desde: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hasta: Option<NaiveDate>,
}

impl Query for TransactionFilter {
    fn common(&self) -> &RequestCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut RequestCommon {
        &mut self.common
    }
}

impl TransactionFilter {
    pub fn with_numero_cuenta(mut self, cuenta: &str) -> Self {
        self.numero_cuenta = Some(cuenta.to_string());
        self
    }

    pub fn with_tipo_transaccion(mut self, tipo: &str) -> Self {
        self.tipo_transaccion = Some(tipo.to_string());
        self
    }

    pub fn with_corresponsal_id(mut self, id: i64) -> Self {
        self.corresponsal_id = Some(id);
        self
    }

    pub fn with_amount_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.monto_minimo = min;
        self.monto_maximo = max;
        self
    }

    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.fecha_desde = Some(from);
        self.fecha_hasta = Some(to);
        self
    }
}
