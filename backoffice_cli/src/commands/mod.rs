//! CLI subcommand implementations.

pub mod audit;
pub mod auth;
pub mod catalog;
pub mod complaints;
pub mod groups;
pub mod reports;
pub mod route;
pub mod transactions;
pub mod users;

use anyhow::{bail, Result};
use comedica_lib::{ActionResult, Query, SessionContext};
use serde::Serialize;

use crate::output::{print_json, OutputFormat};

/// Printing for one action result. JSON mode prints the whole result, table
/// mode hands the data to `table`. A failed result becomes an error so the
/// process exits non-zero.
pub fn emit<T: Serialize>(
    result: ActionResult<T>,
    format: &OutputFormat,
    table: impl FnOnce(&T),
) -> Result<()> {
    if let OutputFormat::Json = format {
        print_json(&result);
    }
    match result.into_result() {
        Ok(data) => {
            if let OutputFormat::Table = format {
                table(&data);
            }
            Ok(())
        }
        Err(message) => bail!("{}", message),
    }
}

/// Applies 1-based `--page` and `--page-size` flags to a filter.
pub fn apply_paging<Q: Query>(mut query: Q, page: Option<u32>, page_size: Option<u32>) -> Q {
    if let Some(page) = page {
        query = query.with_page(page.saturating_sub(1));
    }
    if let Some(size) = page_size {
        query = query.with_page_size(size);
    }
    query
}

pub fn require_session(session: &SessionContext) -> Result<()> {
    if !session.is_authenticated() {
        bail!("No hay una sesión activa. Ejecute `backoffice login` primero.");
    }
    Ok(())
}
