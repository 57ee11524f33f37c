//! Action layer for the BackOffice Comédica: session handling, validation,
//! result normalization and one total action per backend service.
//!
//! Wraps the `comedica_api` client so callers only ever see an
//! [`ActionResult`], never a transport error.

pub mod action;
pub mod actions;
pub mod config;
pub mod dates;
pub mod error;
pub mod export;
pub mod mapping;
pub mod paging;
pub mod routing;
pub mod session;
pub mod validation;

pub use comedica_api;
pub use comedica_api::types;
pub use comedica_api::{
    AuditFilter, ComplaintFilter, CookieHeader, CookieSource, CorrespondentFilter, NoCookies,
    Query, ReportFilter, SortDirection, TransactionFilter, UserFilter,
};

pub use action::{ActionResult, UNEXPECTED_ERROR};
pub use actions::{Backoffice, LoginOutcome, LoginRedirect};
pub use config::{Settings, SettingsFile};
pub use dates::DateRange;
pub use error::BackofficeError;
pub use export::ExportedDocument;
pub use mapping::{AuditEntry, FieldFallback};
pub use paging::{PageInfo, Paged};
pub use routing::{guard_route, RouteDecision};
pub use session::{AuthSession, FileSessionStore, MemorySessionStore, SessionContext, SessionStore};
