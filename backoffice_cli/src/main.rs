mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use comedica_lib::{Backoffice, FileSessionStore, SessionContext, Settings, SettingsFile};

use crate::output::OutputFormat;

const DEFAULT_SESSION_FILE: &str = ".backoffice/session.json";

#[derive(Parser)]
#[command(name = "backoffice")]
#[command(about = "Operate the BackOffice Comédica from the command line")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// TOML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Where the session is stored between invocations
    #[arg(long, global = true)]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session
    Login(commands::auth::LoginArgs),
    /// Sign out and remove the stored session
    Logout,
    /// List or show complaints
    Complaints(commands::complaints::ComplaintsArgs),
    /// List or export transactions
    Transactions(commands::transactions::TransactionsArgs),
    /// Backoffice users
    Users(commands::users::UsersArgs),
    /// Security groups
    Groups(commands::groups::GroupsArgs),
    /// Reports
    Report(commands::reports::ReportArgs),
    /// Audit trail
    Audit(commands::audit::AuditArgs),
    /// Lookup catalogs
    Catalog(commands::catalog::CatalogArgs),
    /// Check what the route guard does for a path
    Route(commands::route::RouteArgs),
}

fn default_session_file() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(DEFAULT_SESSION_FILE),
        None => PathBuf::from(DEFAULT_SESSION_FILE),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("backoffice=info".parse()?)
                .add_directive("comedica_lib=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let file = cli.config.as_deref().map(SettingsFile::load).transpose()?;
    let file_session = file.as_ref().and_then(|f| f.session.file.clone());
    let session_path = cli
        .session_file
        .clone()
        .or_else(|| {
            std::env::var(comedica_lib::config::SESSION_FILE_ENV)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
        })
        .or(file_session)
        .unwrap_or_else(default_session_file);
    let session = SessionContext::hydrate(Box::new(FileSessionStore::new(session_path)));

    // The guard only looks at the session, so no backend is needed.
    if let Commands::Route(args) = &cli.command {
        return commands::route::run(args, &session, &format);
    }

    let settings = Settings::from_env(file.as_ref(), None)?;
    let backoffice = Backoffice::from_settings(&settings)?;

    match &cli.command {
        Commands::Login(args) => commands::auth::login(args, &backoffice, &session, &format).await?,
        Commands::Logout => commands::auth::logout(&backoffice, &session, &format).await?,
        Commands::Complaints(args) => {
            commands::complaints::run(args, &backoffice, &session, &format).await?
        }
        Commands::Transactions(args) => {
            commands::transactions::run(args, &backoffice, &session, &format).await?
        }
        Commands::Users(args) => commands::users::run(args, &backoffice, &session, &format).await?,
        Commands::Groups(args) => commands::groups::run(args, &backoffice, &session, &format).await?,
        Commands::Report(args) => commands::reports::run(args, &backoffice, &session, &format).await?,
        Commands::Audit(args) => commands::audit::run(args, &backoffice, &session, &format).await?,
        Commands::Catalog(args) => commands::catalog::run(args, &backoffice, &session, &format).await?,
        Commands::Route(args) => commands::route::run(args, &session, &format)?,
    }

    Ok(())
}
