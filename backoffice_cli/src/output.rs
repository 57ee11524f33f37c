use comedica_lib::types::{CatalogItem, Complaint, ConsolidatedRow, SecurityGroup, Transaction, User};
use comedica_lib::{AuditEntry, PageInfo};
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct ComplaintRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Número")]
    numero: String,
    #[tabled(rename = "Cliente")]
    cliente: String,
    #[tabled(rename = "Tipo")]
    tipo: String,
    #[tabled(rename = "Estado")]
    estado: String,
    #[tabled(rename = "Monto")]
    monto: String,
    #[tabled(rename = "Creado")]
    creado: String,
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Número")]
    numero: String,
    #[tabled(rename = "Cuenta")]
    cuenta: String,
    #[tabled(rename = "Tipo")]
    tipo: String,
    #[tabled(rename = "Monto")]
    monto: String,
    #[tabled(rename = "Fecha")]
    fecha: String,
    #[tabled(rename = "Corresponsal")]
    corresponsal: String,
}

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Usuario")]
    usuario: String,
    #[tabled(rename = "Nombre")]
    nombre: String,
    #[tabled(rename = "Correo")]
    correo: String,
    #[tabled(rename = "Grupo")]
    grupo: String,
    #[tabled(rename = "Activo")]
    activo: String,
}

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Nombre")]
    nombre: String,
    #[tabled(rename = "Roles")]
    roles: String,
}

#[derive(Tabled)]
struct ConsolidatedTableRow {
    #[tabled(rename = "Desde")]
    desde: String,
    #[tabled(rename = "Hasta")]
    hasta: String,
    #[tabled(rename = "Corresponsal")]
    corresponsal: String,
    #[tabled(rename = "Transacciones")]
    transacciones: i64,
    #[tabled(rename = "Monto total")]
    monto_total: String,
    #[tabled(rename = "Reclamos")]
    reclamos: i64,
}

#[derive(Tabled)]
struct AuditRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Fecha")]
    fecha: String,
    #[tabled(rename = "Usuario")]
    usuario: String,
    #[tabled(rename = "Módulo")]
    modulo: String,
    #[tabled(rename = "Acción")]
    accion: String,
}

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "Código")]
    codigo: String,
    #[tabled(rename = "Descripción")]
    descripcion: String,
    #[tabled(rename = "Activo")]
    activo: String,
}

// -- Row builders --

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn build_complaint_rows(complaints: &[Complaint]) -> Vec<ComplaintRow> {
    complaints
        .iter()
        .map(|c| ComplaintRow {
            id: c.id,
            numero: text(&c.numero_reclamo),
            cliente: text(&c.cliente),
            tipo: text(&c.tipo_reclamo),
            estado: text(&c.estado),
            monto: c.monto.map(format_amount).unwrap_or_default(),
            creado: text(&c.fecha_creacion),
        })
        .collect()
}

fn build_transaction_rows(transactions: &[Transaction]) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|t| TransactionRow {
            id: t.id,
            numero: text(&t.numero_transaccion),
            cuenta: text(&t.numero_cuenta),
            tipo: text(&t.tipo_transaccion),
            monto: t.monto.map(format_amount).unwrap_or_default(),
            fecha: text(&t.fecha_transaccion),
            corresponsal: text(&t.corresponsal),
        })
        .collect()
}

fn build_user_rows(users: &[User]) -> Vec<UserRow> {
    users
        .iter()
        .map(|u| UserRow {
            id: u.id,
            usuario: u.usuario.clone(),
            nombre: text(&u.nombre),
            correo: text(&u.correo),
            grupo: text(&u.grupo),
            activo: yes_no(u.activo),
        })
        .collect()
}

fn build_group_rows(groups: &[SecurityGroup]) -> Vec<GroupRow> {
    groups
        .iter()
        .map(|g| GroupRow {
            id: g.id,
            nombre: g.nombre.clone(),
            roles: g
                .roles
                .iter()
                .map(|r| r.nombre.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

fn build_consolidated_rows(rows: &[ConsolidatedRow]) -> Vec<ConsolidatedTableRow> {
    rows.iter()
        .map(|r| ConsolidatedTableRow {
            desde: text(&r.fecha_desde),
            hasta: text(&r.fecha_hasta),
            corresponsal: text(&r.corresponsal),
            transacciones: r.total_transacciones,
            monto_total: format_amount(r.monto_total),
            reclamos: r.total_reclamos,
        })
        .collect()
}

fn build_audit_rows(entries: &[AuditEntry]) -> Vec<AuditRow> {
    entries
        .iter()
        .map(|e| AuditRow {
            id: e.id,
            fecha: text(&e.fecha),
            usuario: text(&e.usuario),
            modulo: text(&e.modulo),
            accion: e.accion.clone(),
        })
        .collect()
}

fn build_catalog_rows(items: &[CatalogItem]) -> Vec<CatalogRow> {
    items
        .iter()
        .map(|i| CatalogRow {
            codigo: i.codigo.clone(),
            descripcion: i.descripcion.clone(),
            activo: yes_no(i.activo),
        })
        .collect()
}

// -- Table output --

pub fn print_complaints_table(complaints: &[Complaint]) {
    println!("{}", Table::new(build_complaint_rows(complaints)));
}

pub fn print_transactions_table(transactions: &[Transaction]) {
    println!("{}", Table::new(build_transaction_rows(transactions)));
}

pub fn print_users_table(users: &[User]) {
    println!("{}", Table::new(build_user_rows(users)));
}

pub fn print_groups_table(groups: &[SecurityGroup]) {
    println!("{}", Table::new(build_group_rows(groups)));
}

pub fn print_consolidated_table(rows: &[ConsolidatedRow]) {
    println!("{}", Table::new(build_consolidated_rows(rows)));
}

pub fn print_audit_table(entries: &[AuditEntry]) {
    println!("{}", Table::new(build_audit_rows(entries)));
}

pub fn print_catalog_table(items: &[CatalogItem]) {
    println!("{}", Table::new(build_catalog_rows(items)));
}

/// Page footer on stderr so table output stays pipeable.
pub fn print_page_footer(page: &PageInfo) {
    eprintln!("{}", page_footer(page));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn page_footer(page: &PageInfo) -> String {
    let current = if page.total_pages == 0 {
        0
    } else {
        page.page_number + 1
    };
    format!(
        "Página {}/{} ({} registros)",
        current, page.total_pages, page.total_elements
    )
}

fn format_amount(value: f64) -> String {
    format!("${:.2}", value)
}

fn yes_no(value: Option<bool>) -> String {
    match value {
        Some(true) => "Sí".to_string(),
        Some(false) => "No".to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_complaints_fixture() -> Vec<Complaint> {
        let json_str = include_str!("../../comedica_api/tests/fixtures/complaints.json");
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        serde_json::from_value(resp["data"].clone()).unwrap()
    }

    fn load_consolidated_fixture() -> Vec<ConsolidatedRow> {
        let json_str = include_str!("../../comedica_api/tests/fixtures/consolidated.json");
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        serde_json::from_value(resp["data"].clone()).unwrap()
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(25.5), "$25.50");
        assert_eq!(format_amount(0.0), "$0.00");
    }

    #[test]
    fn test_complaint_rows_fill_missing_fields() {
        let rows = build_complaint_rows(&load_complaints_fixture());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].numero, "REC-2024-0001");
        assert_eq!(rows[0].monto, "$25.50");
        assert_eq!(rows[1].cliente, "");
        assert_eq!(rows[1].estado, "CERRADO");
    }

    #[test]
    fn test_consolidated_table_headers() {
        let table = Table::new(build_consolidated_rows(&load_consolidated_fixture())).to_string();
        assert!(table.contains("Corresponsal"));
        assert!(table.contains("Agente Centro"));
        assert!(table.contains("$48210.75"));
    }

    #[test]
    fn test_audit_rows_use_resolved_action() {
        let entries = vec![AuditEntry {
            id: 5,
            usuario: Some("admin".to_string()),
            fecha: None,
            modulo: Some("LOGIN".to_string()),
            accion: "Sin acción".to_string(),
            ip: None,
        }];
        let rows = build_audit_rows(&entries);
        assert_eq!(rows[0].accion, "Sin acción");
        assert_eq!(rows[0].fecha, "");
    }

    #[test]
    fn test_page_footer() {
        let page = PageInfo {
            page_number: 1,
            page_size: 10,
            total_pages: 4,
            total_elements: 35,
        };
        assert_eq!(page_footer(&page), "Página 2/4 (35 registros)");
        let empty = PageInfo {
            page_number: 0,
            page_size: 10,
            total_pages: 0,
            total_elements: 0,
        };
        assert_eq!(page_footer(&empty), "Página 0/0 (0 registros)");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(Some(true)), "Sí");
        assert_eq!(yes_no(Some(false)), "No");
        assert_eq!(yes_no(None), "");
    }
}
