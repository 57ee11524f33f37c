use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use comedica_lib::{Backoffice, ComplaintFilter, SessionContext};

use super::{apply_paging, emit, require_session};
use crate::output::{print_complaints_table, OutputFormat};

#[derive(Args)]
pub struct ComplaintsArgs {
    #[command(subcommand)]
    pub command: ComplaintsCommand,
}

#[derive(Subcommand)]
pub enum ComplaintsCommand {
    /// List complaints
    List(ListArgs),
    /// Show one complaint
    Show {
        /// Complaint id
        id: i64,
    },
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by complaint number
    #[arg(long)]
    pub numero: Option<String>,

    /// Filter by status (e.g. ABIERTO, CERRADO)
    #[arg(long)]
    pub estado: Option<String>,

    /// Filter by complaint type
    #[arg(long)]
    pub tipo: Option<String>,

    /// Free-text search
    #[arg(long)]
    pub search: Option<String>,

    /// Created on or after (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// Created on or before (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Page number (1-based)
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub page_size: Option<u32>,
}

pub async fn run(
    args: &ComplaintsArgs,
    backoffice: &Backoffice,
    session: &SessionContext,
    format: &OutputFormat,
) -> Result<()> {
    require_session(session)?;
    match &args.command {
        ComplaintsCommand::List(list) => {
            let mut filter = apply_paging(ComplaintFilter::default(), list.page, list.page_size);
            if let Some(ref numero) = list.numero {
                filter = filter.with_numero_reclamo(numero);
            }
            if let Some(ref estado) = list.estado {
                filter = filter.with_estado(estado);
            }
            if let Some(ref tipo) = list.tipo {
                filter = filter.with_tipo_reclamo(tipo);
            }
            if let Some(ref search) = list.search {
                filter = filter.with_search(search);
            }
            if let (Some(from), Some(to)) = (list.from, list.to) {
                filter = filter.with_date_range(from, to);
            }
            let result = backoffice.list_complaints(session, Some(&filter)).await;
            emit(result, format, |complaints| print_complaints_table(complaints))
        }
        ComplaintsCommand::Show { id } => {
            let result = backoffice.get_complaint(session, *id).await;
            emit(result, format, |complaint| {
                print_complaints_table(std::slice::from_ref(complaint))
            })
        }
    }
}
