use comedica_api::types::{ApiResponse, AuditRecord, Complaint, ConsolidatedRow, LoginData};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_complaints() {
    let json = load_fixture("complaints.json");
    let resp: ApiResponse<Vec<Complaint>> = serde_json::from_str(&json).unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.message(), Some("Operación exitosa"));

    let data = resp.data.as_ref().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0].numero_reclamo.as_deref(), Some("REC-2024-0001"));
    assert_eq!(data[0].monto, Some(25.5));
    assert_eq!(data[1].cliente, None);

    let pagination = resp.pagination.unwrap();
    assert_eq!(pagination.total_elements, Some(2));
    assert_eq!(pagination.total_pages, Some(1));
}

#[test]
fn deserialize_audit_with_metadata() {
    let json = load_fixture("audit.json");
    let resp: ApiResponse<Vec<AuditRecord>> = serde_json::from_str(&json).unwrap();
    assert!(resp.pagination.is_none());
    let metadata = resp.metadata.unwrap();
    assert_eq!(metadata.page_number, Some(0));
    assert_eq!(metadata.total_records, Some(4));

    let data = resp.data.unwrap();
    assert_eq!(data[0].accion.as_deref(), Some("CREAR"));
    assert_eq!(data[1].accion, None);
    assert_eq!(data[1].tipo_accion.as_deref(), Some("ASIGNAR_ROLES"));
}

#[test]
fn deserialize_consolidated_report() {
    let json = load_fixture("consolidated.json");
    let resp: ApiResponse<Vec<ConsolidatedRow>> = serde_json::from_str(&json).unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.message(), None);
    let row = &resp.data.unwrap()[0];
    assert_eq!(row.total_transacciones, 1520);
    assert_eq!(row.monto_total, 48210.75);
}

#[test]
fn deserialize_login() {
    let json = load_fixture("login.json");
    let resp: ApiResponse<LoginData> = serde_json::from_str(&json).unwrap();
    let login = resp.data.unwrap();
    assert_eq!(login.usuario.usuario, "jperez");
    assert_eq!(login.refresh_token.as_deref(), Some("refresh-123"));
    assert!(!login.cambiar_clave);
}

#[test]
fn business_error_without_data() {
    let resp: ApiResponse<Vec<Complaint>> =
        serde_json::from_str(r#"{"result":{"code":1,"message":"no autorizado"}}"#).unwrap();
    assert!(!resp.is_success());
    assert_eq!(resp.message(), Some("no autorizado"));
    assert!(resp.data.is_none());
}
