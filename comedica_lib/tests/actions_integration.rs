use std::collections::HashMap;

use chrono::NaiveDate;
use comedica_lib::comedica_api::auth::AUTH_DATA_COOKIE;
use comedica_lib::comedica_api::Client;
use comedica_lib::types::{Credentials, UserInput};
use comedica_lib::{
    Backoffice, ComplaintFilter, DateRange, LoginRedirect, NoCookies, Query, SessionContext,
    UserFilter, UNEXPECTED_ERROR,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backoffice(server: &MockServer) -> Backoffice {
    Backoffice::new(Client::with_base_url(&server.uri()).unwrap())
}

fn token_cookies(token: &str) -> HashMap<String, String> {
    HashMap::from([(
        AUTH_DATA_COOKIE.to_string(),
        json!({ "accessToken": token }).to_string(),
    )])
}

#[tokio::test]
async fn list_complaints_without_filter_returns_backend_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reclamos/listar"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "result": { "code": 0 }, "data": [{ "id": 1 }] })),
        )
        .mount(&server)
        .await;

    let result = backoffice(&server)
        .list_complaints(&token_cookies("t"), None)
        .await;

    assert!(!result.errors());
    assert_eq!(result.error_message(), None);
    let data = result.data().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].id, 1);
}

#[tokio::test]
async fn business_failure_carries_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reclamos/listar"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "result": { "code": 1, "message": "no autorizado" } })),
        )
        .mount(&server)
        .await;

    let result = backoffice(&server)
        .list_complaints(&token_cookies("t"), None)
        .await;

    assert!(result.errors());
    assert!(result.data().is_none());
    assert_eq!(result.error_message(), Some("no autorizado"));
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({ "data": null, "errors": true, "errorMessage": "no autorizado" })
    );
}

#[tokio::test]
async fn missing_backend_message_uses_endpoint_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reclamos/listar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": { "code": 7 } })))
        .mount(&server)
        .await;

    let result = backoffice(&server)
        .list_complaints(&token_cookies("t"), None)
        .await;

    assert_eq!(result.error_message(), Some("Error al obtener reclamos"));
}

#[tokio::test]
async fn in_band_envelope_on_error_status_is_a_business_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transacciones/listar"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "result": { "code": 401, "message": "Sesión expirada" } })),
        )
        .mount(&server)
        .await;

    let result = backoffice(&server)
        .list_transactions(&token_cookies("old"), None)
        .await;

    assert_eq!(result.error_message(), Some("Sesión expirada"));
}

#[tokio::test]
async fn unreachable_backend_yields_failure_with_message() {
    let client = Client::with_base_url("http://127.0.0.1:9").unwrap();
    let result = Backoffice::new(client)
        .list_complaints(&NoCookies, None)
        .await;

    assert!(result.errors());
    let message = result.error_message().unwrap();
    assert!(!message.trim().is_empty());
    assert_ne!(message, "Error al obtener reclamos");
}

#[tokio::test]
async fn missing_cookie_still_attempts_the_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/seguridad/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({ "result": { "code": 0 }, "data": [{ "id": 1, "nombre": "ADMIN" }] }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let bo = backoffice(&server);
    let malformed = HashMap::from([(AUTH_DATA_COOKIE.to_string(), "%%%".to_string())]);
    let result = bo.list_roles(&malformed).await;
    assert_eq!(result.data().unwrap()[0].nombre, "ADMIN");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn consolidated_report_uses_default_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reportes/consolidado"))
        .and(body_partial_json(json!({
            "pageId": 40,
            "pagination": {
                "page": 0,
                "size": 10,
                "sortBy": "fechaDesde",
                "sortDirection": "DESC"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "code": 0 },
            "data": [{ "corresponsal": "Agente Centro", "totalTransacciones": 12, "montoTotal": 100.5 }],
            "pagination": { "page": 0, "size": 10, "totalElements": 1, "totalPages": 1 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = backoffice(&server)
        .consolidated_report(&token_cookies("t"), None, None)
        .await;

    let paged = result.into_data().unwrap();
    assert_eq!(paged.items[0].total_transacciones, 12);
    assert_eq!(paged.page.total_pages, 1);
}

#[tokio::test]
async fn custom_range_overrides_report_dates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reportes/reclamos"))
        .and(body_partial_json(json!({
            "request": { "fechaDesde": "2024-03-01", "fechaHasta": "2024-03-31" },
            "pagination": { "size": 1000, "sortBy": "fechaCreacion" }
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "result": { "code": 0 }, "data": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let range = DateRange::Custom {
        from: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        to: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    };
    let result = backoffice(&server)
        .complaints_report(&token_cookies("t"), None, Some(range))
        .await;

    let paged = result.into_data().unwrap();
    assert!(paged.items.is_empty());
    assert_eq!(paged.page.total_pages, 0);
}

#[tokio::test]
async fn inverted_range_is_rejected_before_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let range = DateRange::Custom {
        from: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
        to: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
    };
    let result = backoffice(&server)
        .audit_log(&token_cookies("t"), None, Some(range))
        .await;

    assert!(result.errors());
    assert!(result.error_message().unwrap().contains("posterior"));
}

#[tokio::test]
async fn invalid_input_never_reaches_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let bo = backoffice(&server);
    let cookies = token_cookies("t");

    let oversized = UserFilter::default().with_page_size(5000);
    assert!(bo.list_users(&cookies, Some(&oversized)).await.errors());

    let bad_email = UserInput {
        usuario: "mlopez".to_string(),
        nombre: "María López".to_string(),
        correo: "no-es-correo".to_string(),
        grupo_id: 2,
        activo: true,
    };
    let result = bo.create_user(&cookies, &bad_email).await;
    assert_eq!(result.error_message(), Some("correo electrónico inválido 'no-es-correo'"));

    let long_search = ComplaintFilter::default().with_search(&"x".repeat(150));
    assert!(bo.list_complaints(&cookies, Some(&long_search)).await.errors());
}

#[tokio::test]
async fn export_is_base64_of_the_exact_bytes() {
    let server = MockServer::start().await;
    let xml = "<?xml version=\"1.0\"?><transacciones><t id=\"1\">ñ</t></transacciones>".as_bytes();
    Mock::given(method("POST"))
        .and(path("/transacciones/exportar"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/xml")
                .insert_header(
                    "content-disposition",
                    "attachment; filename=\"transacciones-marzo.xml\"",
                )
                .set_body_bytes(xml.to_vec()),
        )
        .mount(&server)
        .await;

    let result = backoffice(&server)
        .export_transactions_xml(&token_cookies("t"), None)
        .await;

    let doc = result.into_data().unwrap();
    assert_eq!(doc.file_name, "transacciones-marzo.xml");
    assert_eq!(doc.content_type, "application/xml");
    assert_eq!(doc.decode().unwrap(), xml);
}

#[tokio::test]
async fn export_error_envelope_uses_fallback_when_message_missing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/transacciones/exportar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": { "code": 3 } })))
        .mount(&server)
        .await;

    let result = backoffice(&server)
        .export_transactions_xml(&token_cookies("t"), None)
        .await;

    assert_eq!(result.error_message(), Some("Error al exportar transacciones"));
}

#[tokio::test]
async fn login_establishes_session_used_by_later_calls() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_partial_json(json!({ "request": { "usuario": "jperez" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "code": 0 },
            "data": {
                "accessToken": "fresh-token",
                "usuario": { "id": 7, "usuario": "jperez" },
                "cambiarClave": true
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/catalogos/tipo-reclamo"))
        .and(header("authorization", "Bearer fresh-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "code": 0 },
            "data": [{ "codigo": "TC", "descripcion": "Tarjeta de crédito" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let bo = backoffice(&server);
    let session = SessionContext::anonymous();
    let outcome = bo
        .login(
            &session,
            &Credentials {
                usuario: " jperez ".to_string(),
                clave: "secreto".to_string(),
            },
        )
        .await
        .into_data()
        .unwrap();

    assert_eq!(outcome.user.usuario, "jperez");
    assert_eq!(outcome.redirect, LoginRedirect::ForcePasswordChange);
    assert!(session.is_authenticated());

    let catalog = bo.list_catalog(&session, "Tipo-Reclamo").await;
    assert_eq!(catalog.data().unwrap()[0].codigo, "TC");
}

#[tokio::test]
async fn failed_login_leaves_no_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({ "result": { "code": 10, "message": "Credenciales inválidas" } }),
        ))
        .mount(&server)
        .await;

    let session = SessionContext::anonymous();
    let result = backoffice(&server)
        .login(
            &session,
            &Credentials {
                usuario: "jperez".to_string(),
                clave: "mala".to_string(),
            },
        )
        .await;

    assert_eq!(result.error_message(), Some("Credenciales inválidas"));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn logout_clears_session_even_when_backend_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "code": 0 },
            "data": { "accessToken": "tok", "usuario": { "id": 1, "usuario": "admin" } }
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/auth/logout"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let bo = backoffice(&server);
    let session = SessionContext::anonymous();
    let login = bo
        .login(
            &session,
            &Credentials {
                usuario: "admin".to_string(),
                clave: "clave".to_string(),
            },
        )
        .await;
    assert_eq!(login.into_data().unwrap().redirect, LoginRedirect::Dashboard);

    let result = bo.logout(&session).await;
    assert_eq!(result.data(), Some(&true));
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn audit_log_resolves_action_fallbacks_and_metadata_paging() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auditoria/listar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "code": 0 },
            "data": [
                { "id": 1, "accion": "CREAR" },
                { "id": 2, "tipoAccion": "ASIGNAR_ROLES" },
                { "id": 3, "accion": "", "descripcion": "Inicio de sesión" },
                { "id": 4 }
            ],
            "metadata": { "currentPage": 0, "pageSize": 3, "totalRecords": 4 }
        })))
        .mount(&server)
        .await;

    let paged = backoffice(&server)
        .audit_log(&token_cookies("t"), None, None)
        .await
        .into_data()
        .unwrap();

    let acciones: Vec<&str> = paged.items.iter().map(|e| e.accion.as_str()).collect();
    assert_eq!(
        acciones,
        vec!["CREAR", "ASIGNAR_ROLES", "Inicio de sesión", "Sin acción"]
    );
    assert_eq!(paged.page.total_pages, 2);
    assert_eq!(paged.page.total_elements, 4);
}

#[tokio::test]
async fn zero_code_without_data_is_not_success() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/usuarios/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": { "code": 0 } })))
        .mount(&server)
        .await;

    let result = backoffice(&server)
        .delete_user(&token_cookies("t"), 9)
        .await;

    assert!(result.errors());
    assert_eq!(result.error_message(), Some("Error al eliminar el usuario"));
    assert_ne!(result.error_message(), Some(UNEXPECTED_ERROR));
}
