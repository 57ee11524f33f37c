use anyhow::Result;
use clap::Args;
use comedica_lib::{guard_route, SessionContext};

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct RouteArgs {
    /// Path to check, e.g. /reclamos
    pub path: String,
}

/// Shows what the route guard decides for `path` with the current session.
pub fn run(args: &RouteArgs, session: &SessionContext, format: &OutputFormat) -> Result<()> {
    let decision = guard_route(&args.path, session);
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "path": args.path,
            "decision": decision,
            "location": decision.location(),
        })),
        OutputFormat::Table => match decision.location() {
            Some(location) => println!("{} -> {}", args.path, location),
            None => println!("{} -> continuar", args.path),
        },
    }
    Ok(())
}
