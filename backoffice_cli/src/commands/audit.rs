use anyhow::Result;
use clap::Args;
use comedica_lib::{AuditFilter, Backoffice, DateRange, SessionContext};

use super::{apply_paging, emit, require_session};
use crate::output::{print_audit_table, print_page_footer, OutputFormat};

#[derive(Args)]
pub struct AuditArgs {
    /// Period: today, month, 30d or 2024-01-01..2024-01-31
    #[arg(long)]
    pub range: Option<DateRange>,

    /// Filter by user
    #[arg(long)]
    pub usuario: Option<String>,

    /// Filter by module (e.g. LOGIN, USUARIOS)
    #[arg(long)]
    pub modulo: Option<String>,

    /// Page number (1-based)
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub page_size: Option<u32>,
}

pub async fn run(
    args: &AuditArgs,
    backoffice: &Backoffice,
    session: &SessionContext,
    format: &OutputFormat,
) -> Result<()> {
    require_session(session)?;
    let mut filter = apply_paging(AuditFilter::default(), args.page, args.page_size);
    if let Some(ref usuario) = args.usuario {
        filter = filter.with_usuario(usuario);
    }
    if let Some(ref modulo) = args.modulo {
        filter = filter.with_modulo(modulo);
    }
    let result = backoffice.audit_log(session, Some(&filter), args.range).await;
    emit(result, format, |paged| {
        print_audit_table(&paged.items);
        print_page_footer(&paged.page);
    })
}
