//! Client for the BackOffice Comédica backend API.
//!
//! Covers the transport ([`Client`]), bearer-token derivation from the session
//! cookie ([`auth`]), the canonical request envelope ([`envelope`]), filter
//! builders ([`Query`]), response types ([`types`]) and one service method
//! per backend endpoint.

pub mod auth;
mod client;
pub mod envelope;
mod errors;
mod query;
mod services;
pub mod types;

pub use self::auth::{CookieHeader, CookieSource, NoCookies};
pub use self::client::{BinaryPayload, Client, FetchBody, FetchRequest, FilePart, MultipartUpload};
pub use self::errors::Error;
pub use self::query::{
    AuditFilter, ComplaintFilter, CorrespondentFilter, Query, ReportFilter, RequestCommon,
    SortDirection, TransactionFilter, UserFilter,
};
