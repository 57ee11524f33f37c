//! Field fallback rules and the display rows built with them.

use comedica_api::types::AuditRecord;
use serde::Serialize;

/// Accessor for one candidate source of a field.
pub type FieldSource<T> = (&'static str, fn(&T) -> Option<&str>);

/// An ordered chain of sources for one display field.
///
/// The first source holding a non-blank value wins. When every source is
/// blank or absent, `default` is used.
pub struct FieldFallback<T: 'static> {
    pub field: &'static str,
    pub chain: &'static [FieldSource<T>],
    pub default: &'static str,
}

impl<T> FieldFallback<T> {
    pub fn resolve<'a>(&self, row: &'a T) -> &'a str {
        self.chain
            .iter()
            .find_map(|(_, source)| source(row).filter(|v| !v.trim().is_empty()))
            .unwrap_or(self.default)
    }

    /// Names of the sources in the order they are consulted.
    pub fn sources(&self) -> Vec<&'static str> {
        self.chain.iter().map(|(name, _)| *name).collect()
    }
}

/// Audit `accion`: `accion`, then `tipoAccion`, then `descripcion`.
pub const AUDIT_ACCION: FieldFallback<AuditRecord> = FieldFallback {
    field: "accion",
    chain: &[
        ("accion", |r| r.accion.as_deref()),
        ("tipoAccion", |r| r.tipo_accion.as_deref()),
        ("descripcion", |r| r.descripcion.as_deref()),
    ],
    default: "Sin acción",
};

/// Audit trail row as shown to the user, with the action label resolved.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: i64,
    pub usuario: Option<String>,
    pub fecha: Option<String>,
    pub modulo: Option<String>,
    pub accion: String,
    pub ip: Option<String>,
}

impl From<AuditRecord> for AuditEntry {
    fn from(record: AuditRecord) -> Self {
        let accion = AUDIT_ACCION.resolve(&record).to_string();
        Self {
            id: record.id,
            usuario: record.usuario,
            fecha: record.fecha,
            modulo: record.modulo,
            accion,
            ip: record.ip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(accion: Option<&str>, tipo: Option<&str>, descripcion: Option<&str>) -> AuditRecord {
        AuditRecord {
            id: 1,
            usuario: Some("admin".to_string()),
            fecha: None,
            modulo: None,
            accion: accion.map(str::to_string),
            tipo_accion: tipo.map(str::to_string),
            descripcion: descripcion.map(str::to_string),
            ip: None,
        }
    }

    #[test]
    fn first_source_wins() {
        let r = record(Some("CREAR"), Some("ALTA"), Some("Creó usuario"));
        assert_eq!(AUDIT_ACCION.resolve(&r), "CREAR");
    }

    #[test]
    fn falls_through_blank_values_in_order() {
        let r = record(Some("  "), None, Some("Inicio de sesión"));
        assert_eq!(AUDIT_ACCION.resolve(&r), "Inicio de sesión");

        let r = record(None, Some("ASIGNAR_ROLES"), Some("otra"));
        assert_eq!(AUDIT_ACCION.resolve(&r), "ASIGNAR_ROLES");
    }

    #[test]
    fn default_when_all_absent() {
        let entry = AuditEntry::from(record(None, None, None));
        assert_eq!(entry.accion, "Sin acción");
        assert_eq!(entry.usuario.as_deref(), Some("admin"));
    }

    #[test]
    fn chain_is_documented_in_order() {
        assert_eq!(AUDIT_ACCION.field, "accion");
        assert_eq!(
            AUDIT_ACCION.sources(),
            vec!["accion", "tipoAccion", "descripcion"]
        );
    }
}
