use anyhow::Result;
use clap::Args;
use comedica_lib::{Backoffice, SessionContext};

use super::{emit, require_session};
use crate::output::{print_catalog_table, OutputFormat};

#[derive(Args)]
pub struct CatalogArgs {
    /// Catalog kind, e.g. tipo-reclamo
    pub tipo: String,
}

pub async fn run(
    args: &CatalogArgs,
    backoffice: &Backoffice,
    session: &SessionContext,
    format: &OutputFormat,
) -> Result<()> {
    require_session(session)?;
    let result = backoffice.list_catalog(session, &args.tipo).await;
    emit(result, format, |items| print_catalog_table(items))
}
