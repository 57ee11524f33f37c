use std::fmt;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::query::SortDirection;
use crate::Error;

/// Everything except RFC 3986 unreserved characters, with `.` kept encoded.
const PATH_ID: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'~');

/// Short code identifying the calling surface, used by the backend for routing and auditing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    /// Login and session screens.
    #[serde(rename = "W")]
    Web,
    /// Soft-token screens shared with external channels.
    #[serde(rename = "E")]
    External,
    /// Backoffice administration screens.
    #[serde(rename = "WEB")]
    Backoffice,
}

impl Channel {
    pub fn code(self) -> &'static str {
        match self {
            Channel::Web => "W",
            Channel::External => "E",
            Channel::Backoffice => "WEB",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How the envelope travels to the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Envelope serialized as the JSON body.
    Json,
    /// Envelope metadata as query parameters, no body.
    Query,
    /// Envelope metadata and payload as form-urlencoded pairs.
    Form,
    /// Envelope metadata as text parts next to uploaded files.
    Multipart,
}

/// Default pagination for a paginated endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationPolicy {
    pub page: u32,
    pub size: u32,
    pub sort_by: &'static str,
    pub sort_direction: SortDirection,
}

const fn policy(size: u32, sort_by: &'static str, sort_direction: SortDirection) -> Option<PaginationPolicy> {
    Some(PaginationPolicy {
        page: 0,
        size,
        sort_by,
        sort_direction,
    })
}

/// Fixed routing data for one backend endpoint.
#[derive(Clone, Debug)]
pub struct EndpointDescriptor {
    pub method: Method,
    /// Path relative to the base URL. `{id}` is substituted by the caller.
    pub path: &'static str,
    pub page_id: u32,
    pub channel: Channel,
    pub body: BodyKind,
    pub pagination: Option<PaginationPolicy>,
}

/// Every backend endpoint the backoffice talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Login,
    Logout,
    ChangePassword,
    RequestSoftToken,
    ValidateSoftToken,
    ListComplaints,
    GetComplaint,
    CreateComplaint,
    UpdateComplaint,
    DeleteComplaint,
    ListCorrespondents,
    CreateCorrespondent,
    UpdateCorrespondent,
    DeleteCorrespondent,
    UploadCorrespondents,
    ListTransactions,
    GetTransaction,
    ExportTransactions,
    ListUsers,
    CreateUser,
    UpdateUser,
    DeleteUser,
    ResetUserPassword,
    ListGroups,
    CreateGroup,
    UpdateGroup,
    DeleteGroup,
    ListRoles,
    AssignGroupRoles,
    ConsolidatedReport,
    TransactionsReport,
    ComplaintsReport,
    AuditLog,
    ListCatalog,
}

impl Endpoint {
    /// Returns the descriptor for this endpoint.
    pub fn descriptor(self) -> EndpointDescriptor {
        use BodyKind::{Form, Json, Multipart, Query};
        use Channel::{Backoffice, External, Web};
        use SortDirection::{Asc, Desc};

        let (method, path, page_id, channel, body, pagination) = match self {
            Endpoint::Login => (Method::POST, "/auth/login", 1, Web, Json, None),
            Endpoint::Logout => (Method::POST, "/auth/logout", 1, Web, Json, None),
            Endpoint::ChangePassword => (Method::PUT, "/auth/clave", 2, Web, Json, None),
            Endpoint::RequestSoftToken => (Method::POST, "/auth/soft-token", 3, External, Form, None),
            Endpoint::ValidateSoftToken => {
                (Method::POST, "/auth/soft-token/validar", 3, External, Form, None)
            }
            Endpoint::ListComplaints => (
                Method::POST,
                "/reclamos/listar",
                12,
                Backoffice,
                Json,
                policy(10, "fechaCreacion", Desc),
            ),
            Endpoint::GetComplaint => (Method::GET, "/reclamos/{id}", 12, Backoffice, Query, None),
            Endpoint::CreateComplaint => (Method::POST, "/reclamos", 13, Backoffice, Json, None),
            Endpoint::UpdateComplaint => (Method::PUT, "/reclamos/{id}", 13, Backoffice, Json, None),
            Endpoint::DeleteComplaint => {
                (Method::DELETE, "/reclamos/{id}", 12, Backoffice, Query, None)
            }
            Endpoint::ListCorrespondents => (
                Method::POST,
                "/corresponsales/listar",
                14,
                Backoffice,
                Json,
                policy(10, "nombre", Asc),
            ),
            Endpoint::CreateCorrespondent => {
                (Method::POST, "/corresponsales", 15, Backoffice, Json, None)
            }
            Endpoint::UpdateCorrespondent => {
                (Method::PUT, "/corresponsales/{id}", 15, Backoffice, Json, None)
            }
            Endpoint::DeleteCorrespondent => {
                (Method::DELETE, "/corresponsales/{id}", 14, Backoffice, Query, None)
            }
            Endpoint::UploadCorrespondents => {
                (Method::POST, "/corresponsales/carga", 16, Backoffice, Multipart, None)
            }
            Endpoint::ListTransactions => (
                Method::POST,
                "/transacciones/listar",
                20,
                Backoffice,
                Json,
                policy(10, "fechaTransaccion", Desc),
            ),
            Endpoint::GetTransaction => {
                (Method::GET, "/transacciones/{id}", 20, Backoffice, Query, None)
            }
            Endpoint::ExportTransactions => {
                (Method::POST, "/transacciones/exportar", 21, Backoffice, Json, None)
            }
            Endpoint::ListUsers => (
                Method::POST,
                "/usuarios/listar",
                30,
                Backoffice,
                Json,
                policy(10, "usuario", Asc),
            ),
            Endpoint::CreateUser => (Method::POST, "/usuarios", 31, Backoffice, Json, None),
            Endpoint::UpdateUser => (Method::PUT, "/usuarios/{id}", 31, Backoffice, Json, None),
            Endpoint::DeleteUser => (Method::DELETE, "/usuarios/{id}", 30, Backoffice, Query, None),
            Endpoint::ResetUserPassword => {
                (Method::PUT, "/usuarios/{id}/restablecer", 31, Backoffice, Json, None)
            }
            Endpoint::ListGroups => (Method::GET, "/seguridad/grupos", 32, Backoffice, Query, None),
            Endpoint::CreateGroup => (Method::POST, "/seguridad/grupos", 33, Backoffice, Json, None),
            Endpoint::UpdateGroup => {
                (Method::PUT, "/seguridad/grupos/{id}", 33, Backoffice, Json, None)
            }
            Endpoint::DeleteGroup => {
                (Method::DELETE, "/seguridad/grupos/{id}", 32, Backoffice, Query, None)
            }
            Endpoint::ListRoles => (Method::GET, "/seguridad/roles", 34, Backoffice, Query, None),
            Endpoint::AssignGroupRoles => {
                (Method::PUT, "/seguridad/grupos/{id}/roles", 34, Backoffice, Json, None)
            }
            Endpoint::ConsolidatedReport => (
                Method::POST,
                "/reportes/consolidado",
                40,
                Backoffice,
                Json,
                policy(10, "fechaDesde", Desc),
            ),
            Endpoint::TransactionsReport => (
                Method::POST,
                "/reportes/transacciones",
                41,
                Backoffice,
                Json,
                policy(1000, "fechaTransaccion", Desc),
            ),
            Endpoint::ComplaintsReport => (
                Method::POST,
                "/reportes/reclamos",
                42,
                Backoffice,
                Json,
                policy(1000, "fechaCreacion", Desc),
            ),
            Endpoint::AuditLog => (
                Method::POST,
                "/auditoria/listar",
                50,
                Backoffice,
                Json,
                policy(10, "fecha", Desc),
            ),
            Endpoint::ListCatalog => (Method::GET, "/catalogos/{id}", 60, Backoffice, Query, None),
        };

        EndpointDescriptor {
            method,
            path,
            page_id,
            channel,
            body,
            pagination,
        }
    }

    /// Resolves the endpoint path, substituting `{id}` when the template has one.
    /// The id is percent-encoded as a single path segment; empty and dot
    /// segments are rejected.
    pub fn path(self, id: Option<&str>) -> Result<String, Error> {
        let template = self.descriptor().path;
        match id {
            Some(bad @ ("" | "." | "..")) => Err(Error::InvalidUrl(format!(
                "{:?} is not a valid id for {:?}",
                bad, self
            ))),
            Some(id) => {
                let segment = utf8_percent_encode(id, PATH_ID).to_string();
                Ok(template.replace("{id}", &segment))
            }
            None => Ok(template.to_string()),
        }
    }
}
