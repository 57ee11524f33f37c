use chrono::NaiveDate;
use serde::Serialize;

use super::common::{Query, RequestCommon};

/// Filters for the complaints list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintFilter {
    #[serde(skip)]
    pub common: RequestCommon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_reclamo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_reclamo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busqueda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_desde: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_hasta: Option<NaiveDate>,
}

impl Query for ComplaintFilter {
    fn common(&self) -> &RequestCommon {
        &self.common
    }
    fn get_common(&mut self) -> &mut RequestCommon {
        &mut self.common
    }
}

impl ComplaintFilter {
    pub fn with_numero_reclamo(mut self, numero: &str) -> Self {
        self.numero_reclamo = Some(numero.to_string());
        self
    }

    pub fn with_estado(mut self, estado: &str) -> Self {
        self.estado = Some(estado.to_string());
        self
    }

    pub fn with_tipo_reclamo(mut self, tipo: &str) -> Self {
        self.tipo_reclamo = Some(tipo.to_string());
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.busqueda = Some(search.to_string());
        self
    }

    pub fn with_date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.fecha_desde = Some(from);
        self.fecha_hasta = Some(to);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_serializes_to_empty_object() {
        let json = serde_json::to_value(ComplaintFilter::default().with_page(2)).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn filter_fields_use_backend_names() {
        let filter = ComplaintFilter::default()
            .with_estado("ABIERTO")
            .with_date_range(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            );
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["estado"], "ABIERTO");
        assert_eq!(json["fechaDesde"], "2024-01-01");
        assert_eq!(json["fechaHasta"], "2024-01-31");
    }
}
