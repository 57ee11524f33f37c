//! The action layer: one total operation per backend service.
//!
//! Every action returns an [`ActionResult`](crate::ActionResult). Input is
//! validated before the network is touched, and transport or backend failures
//! are folded into the result instead of being propagated.

use comedica_api::{Client, RequestCommon};

use crate::config::Settings;
use crate::error::BackofficeError;
use crate::validation::validate_page_size;

mod audit;
mod auth;
mod catalogs;
mod complaints;
mod correspondents;
pub mod messages;
mod reports;
mod security;
mod transactions;
mod users;

pub use self::auth::{LoginOutcome, LoginRedirect};

/// Entry point for the actions. Cheap to clone and safe to share.
#[derive(Clone, Debug)]
pub struct Backoffice {
    client: Client,
}

impl Backoffice {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, BackofficeError> {
        let client = Client::with_timeout(&settings.base_url, settings.timeout)?;
        Ok(Self::new(client))
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

/// Rejects caller pagination the backend would refuse.
fn check_common(common: &RequestCommon) -> Result<(), BackofficeError> {
    if let Some(size) = common.size {
        validate_page_size(size)?;
    }
    Ok(())
}

/// Sanitizes an optional free-text field in place.
fn sanitize_search(value: &mut Option<String>) -> Result<(), BackofficeError> {
    if let Some(text) = value.as_deref() {
        *value = Some(crate::validation::validate_search(text)?);
    }
    Ok(())
}
