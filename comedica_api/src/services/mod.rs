//! Service functions: one per backend endpoint.
//!
//! Each service builds the canonical envelope for its endpoint and performs
//! the authenticated call, returning the backend's response envelope as is.

mod audit;
mod auth;
mod catalogs;
mod complaints;
mod correspondents;
mod reports;
mod security;
mod transactions;
mod users;
