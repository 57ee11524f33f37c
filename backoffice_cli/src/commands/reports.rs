use anyhow::Result;
use clap::{Args, Subcommand};
use comedica_lib::{Backoffice, DateRange, ReportFilter, SessionContext};

use super::{apply_paging, emit, require_session};
use crate::output::{print_consolidated_table, print_page_footer, OutputFormat};

#[derive(Args)]
pub struct ReportArgs {
    #[command(subcommand)]
    pub command: ReportCommand,
}

#[derive(Subcommand)]
pub enum ReportCommand {
    /// Consolidated totals per correspondent
    Consolidated {
        /// Period: today, month, 30d or 2024-01-01..2024-01-31
        #[arg(long)]
        range: Option<DateRange>,

        /// Correspondent id
        #[arg(long)]
        corresponsal: Option<i64>,

        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,

        /// Results per page
        #[arg(long)]
        page_size: Option<u32>,
    },
}

pub async fn run(
    args: &ReportArgs,
    backoffice: &Backoffice,
    session: &SessionContext,
    format: &OutputFormat,
) -> Result<()> {
    require_session(session)?;
    match &args.command {
        ReportCommand::Consolidated {
            range,
            corresponsal,
            page,
            page_size,
        } => {
            let mut filter = apply_paging(ReportFilter::default(), *page, *page_size);
            if let Some(id) = corresponsal {
                filter = filter.with_corresponsal_id(*id);
            }
            let result = backoffice
                .consolidated_report(session, Some(&filter), *range)
                .await;
            emit(result, format, |paged| {
                print_consolidated_table(&paged.items);
                print_page_footer(&paged.page);
            })
        }
    }
}
