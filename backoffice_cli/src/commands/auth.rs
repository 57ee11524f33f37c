use anyhow::{bail, Result};
use clap::Args;
use comedica_lib::types::Credentials;
use comedica_lib::{Backoffice, SessionContext};

use super::emit;
use crate::output::OutputFormat;

/// Environment variable read when `--clave` is not given.
const PASSWORD_ENV: &str = "BACKOFFICE_CLAVE";

#[derive(Args)]
pub struct LoginArgs {
    /// Backoffice user name
    #[arg(long)]
    pub usuario: String,

    /// Password (falls back to BACKOFFICE_CLAVE)
    #[arg(long)]
    pub clave: Option<String>,
}

pub async fn login(
    args: &LoginArgs,
    backoffice: &Backoffice,
    session: &SessionContext,
    format: &OutputFormat,
) -> Result<()> {
    let clave = match args.clave.clone().or_else(|| std::env::var(PASSWORD_ENV).ok()) {
        Some(c) => c,
        None => bail!("Indique la contraseña con --clave o {}", PASSWORD_ENV),
    };
    let credentials = Credentials {
        usuario: args.usuario.clone(),
        clave,
    };
    let result = backoffice.login(session, &credentials).await;
    emit(result, format, |outcome| {
        println!(
            "Sesión iniciada como {}. Continúe en {}",
            outcome.user.usuario,
            outcome.redirect.path()
        );
    })
}

pub async fn logout(
    backoffice: &Backoffice,
    session: &SessionContext,
    format: &OutputFormat,
) -> Result<()> {
    let result = backoffice.logout(session).await;
    emit(result, format, |_| println!("Sesión cerrada"))
}
