use anyhow::Result;
use clap::{Args, Subcommand};
use comedica_lib::{Backoffice, SessionContext, UserFilter};

use super::{apply_paging, emit, require_session};
use crate::output::{print_page_footer, print_users_table, OutputFormat};

#[derive(Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List backoffice users
    List {
        /// Filter by user name
        #[arg(long)]
        usuario: Option<String>,

        /// Filter by full name
        #[arg(long)]
        nombre: Option<String>,

        /// Filter by security group id
        #[arg(long)]
        grupo: Option<i64>,

        /// Only active (true) or inactive (false) users
        #[arg(long)]
        activo: Option<bool>,

        /// Page number (1-based)
        #[arg(long)]
        page: Option<u32>,

        /// Results per page
        #[arg(long)]
        page_size: Option<u32>,
    },
}

pub async fn run(
    args: &UsersArgs,
    backoffice: &Backoffice,
    session: &SessionContext,
    format: &OutputFormat,
) -> Result<()> {
    require_session(session)?;
    match &args.command {
        UsersCommand::List {
            usuario,
            nombre,
            grupo,
            activo,
            page,
            page_size,
        } => {
            let mut filter = apply_paging(UserFilter::default(), *page, *page_size);
            if let Some(usuario) = usuario {
                filter = filter.with_usuario(usuario);
            }
            if let Some(nombre) = nombre {
                filter = filter.with_nombre(nombre);
            }
            if let Some(grupo) = grupo {
                filter = filter.with_grupo_id(*grupo);
            }
            if let Some(activo) = activo {
                filter = filter.with_activo(*activo);
            }
            let result = backoffice.list_users(session, Some(&filter)).await;
            emit(result, format, |paged| {
                print_users_table(&paged.items);
                print_page_footer(&paged.page);
            })
        }
    }
}
