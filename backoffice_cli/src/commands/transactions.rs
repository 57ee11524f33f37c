use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use comedica_lib::{Backoffice, SessionContext, TransactionFilter};

use super::{apply_paging, emit, require_session};
use crate::output::{print_page_footer, print_transactions_table, OutputFormat};

#[derive(Args)]
pub struct TransactionsArgs {
    #[command(subcommand)]
    pub command: TransactionsCommand,
}

#[derive(Subcommand)]
pub enum TransactionsCommand {
    /// List transactions
    List(FilterArgs),
    /// Export the matching transactions as XML
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Where to write the document (defaults to the name sent by the backend)
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct FilterArgs {
    /// Account number
    #[arg(long)]
    pub cuenta: Option<String>,

    /// Transaction type
    #[arg(long)]
    pub tipo: Option<String>,

    /// Correspondent id
    #[arg(long)]
    pub corresponsal: Option<i64>,

    /// Minimum amount
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum amount
    #[arg(long)]
    pub max: Option<f64>,

    /// From date (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// To date (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Page number (1-based)
    #[arg(long)]
    pub page: Option<u32>,

    /// Results per page
    #[arg(long)]
    pub page_size: Option<u32>,
}

impl FilterArgs {
    fn to_filter(&self) -> TransactionFilter {
        let mut filter = apply_paging(TransactionFilter::default(), self.page, self.page_size);
        if let Some(ref cuenta) = self.cuenta {
            filter = filter.with_numero_cuenta(cuenta);
        }
        if let Some(ref tipo) = self.tipo {
            filter = filter.with_tipo_transaccion(tipo);
        }
        if let Some(id) = self.corresponsal {
            filter = filter.with_corresponsal_id(id);
        }
        if self.min.is_some() || self.max.is_some() {
            filter = filter.with_amount_range(self.min, self.max);
        }
        if let (Some(from), Some(to)) = (self.from, self.to) {
            filter = filter.with_date_range(from, to);
        }
        filter
    }
}

pub async fn run(
    args: &TransactionsArgs,
    backoffice: &Backoffice,
    session: &SessionContext,
    format: &OutputFormat,
) -> Result<()> {
    require_session(session)?;
    match &args.command {
        TransactionsCommand::List(filter) => {
            let result = backoffice
                .list_transactions(session, Some(&filter.to_filter()))
                .await;
            emit(result, format, |paged| {
                print_transactions_table(&paged.items);
                print_page_footer(&paged.page);
            })
        }
        TransactionsCommand::Export { filter, file } => {
            let result = backoffice
                .export_transactions_xml(session, Some(&filter.to_filter()))
                .await;
            let document = match result.into_result() {
                Ok(doc) => doc,
                Err(message) => anyhow::bail!("{}", message),
            };
            let bytes = document.decode()?;
            let target = file
                .clone()
                .unwrap_or_else(|| PathBuf::from(&document.file_name));
            std::fs::write(&target, &bytes)
                .with_context(|| format!("cannot write {}", target.display()))?;
            match format {
                OutputFormat::Json => crate::output::print_json(&serde_json::json!({
                    "file": target.display().to_string(),
                    "contentType": document.content_type,
                    "bytes": bytes.len(),
                })),
                OutputFormat::Table => {
                    println!("{} bytes escritos en {}", bytes.len(), target.display())
                }
            }
            Ok(())
        }
    }
}
