//! Settings: backend base URL, request timeout and session file location.
//!
//! Resolution order for the base URL is fixed: the primary environment
//! variable, the public fallback variable, the TOML settings file, and
//! finally a derivation from the incoming request's host.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::BackofficeError;

pub const BASE_URL_ENV: &str = "BACKOFFICE_BASE_NEW_API_URL";
pub const PUBLIC_BASE_URL_ENV: &str = "BACKOFFICE_PUBLIC_API_URL";
pub const TIMEOUT_ENV: &str = "BACKOFFICE_TIMEOUT_SECS";
pub const SESSION_FILE_ENV: &str = "BACKOFFICE_SESSION_FILE";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Optional TOML settings file.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub session: SessionSection,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SessionSection {
    pub file: Option<PathBuf>,
}

impl SettingsFile {
    pub fn parse(content: &str) -> Result<Self, BackofficeError> {
        toml::from_str(content)
            .map_err(|e| BackofficeError::Config(format!("invalid settings file: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self, BackofficeError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BackofficeError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }
}

/// Resolved settings.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Duration,
    pub session_file: Option<PathBuf>,
}

impl Settings {
    /// Resolves settings from the process environment.
    pub fn from_env(file: Option<&SettingsFile>, host: Option<&str>) -> Result<Self, BackofficeError> {
        Self::resolve(|key| std::env::var(key).ok(), file, host)
    }

    /// Resolves settings from an arbitrary variable lookup.
    pub fn resolve<E>(env: E, file: Option<&SettingsFile>, host: Option<&str>) -> Result<Self, BackofficeError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let file_url = file.and_then(|f| f.api.base_url.as_deref());
        let base_url = resolve_base_url(&env, file_url, host)?;

        // Zero would time out every request, so it counts as unset.
        let timeout_secs = env(TIMEOUT_ENV)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .or_else(|| file.and_then(|f| f.api.timeout_secs).filter(|secs| *secs > 0))
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let session_file = non_blank(env(SESSION_FILE_ENV))
            .map(PathBuf::from)
            .or_else(|| file.and_then(|f| f.session.file.clone()));

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            session_file,
        })
    }
}

/// Picks the backend base URL. Blank candidates are skipped and trailing
/// slashes trimmed.
pub fn resolve_base_url<E>(env: &E, file_url: Option<&str>, host: Option<&str>) -> Result<String, BackofficeError>
where
    E: Fn(&str) -> Option<String>,
{
    let candidate = non_blank(env(BASE_URL_ENV))
        .or_else(|| non_blank(env(PUBLIC_BASE_URL_ENV)))
        .or_else(|| non_blank(file_url.map(str::to_string)))
        .or_else(|| host.and_then(url_from_host));

    match candidate {
        Some(url) => Ok(url.trim_end_matches('/').to_string()),
        None => Err(BackofficeError::Config(format!(
            "no backend URL configured; set {} or {}",
            BASE_URL_ENV, PUBLIC_BASE_URL_ENV
        ))),
    }
}

/// `http://` for local hosts, `https://` otherwise, always under `/api`.
fn url_from_host(host: &str) -> Option<String> {
    let host = host.trim();
    if host.is_empty() {
        return None;
    }
    let local = host.starts_with("localhost") || host.starts_with("127.0.0.1");
    let scheme = if local { "http" } else { "https" };
    Some(format!("{}://{}/api", scheme, host))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
