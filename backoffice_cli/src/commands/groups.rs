use anyhow::Result;
use clap::{Args, Subcommand};
use comedica_lib::{Backoffice, SessionContext};

use super::{emit, require_session};
use crate::output::{print_groups_table, OutputFormat};

#[derive(Args)]
pub struct GroupsArgs {
    #[command(subcommand)]
    pub command: GroupsCommand,
}

#[derive(Subcommand)]
pub enum GroupsCommand {
    /// List security groups and their roles
    List,
}

pub async fn run(
    args: &GroupsArgs,
    backoffice: &Backoffice,
    session: &SessionContext,
    format: &OutputFormat,
) -> Result<()> {
    require_session(session)?;
    match args.command {
        GroupsCommand::List => {
            let result = backoffice.list_groups(session).await;
            emit(result, format, |groups| print_groups_table(groups))
        }
    }
}
