//! Authenticated session state and where it is persisted.
//!
//! The [`SessionContext`] is handed to every action as its cookie source, so
//! the bearer token is always taken from explicit state rather than globals.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, RwLock};

use chrono::{DateTime, Utc};
use comedica_api::auth::{AUTH_DATA_COOKIE, AUTH_TOKEN_COOKIE};
use comedica_api::types::{LoginData, UserProfile};
use comedica_api::CookieSource;
use serde::{Deserialize, Serialize};

use crate::error::BackofficeError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: UserProfile,
    #[serde(default)]
    pub must_change_password: bool,
    pub established_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn from_login(data: LoginData, now: DateTime<Utc>) -> Self {
        Self {
            access_token: data.access_token,
            refresh_token: data.refresh_token,
            user: data.usuario,
            must_change_password: data.cambiar_clave,
            established_at: now,
        }
    }

    /// The `auth_data` cookie blob.
    pub fn cookie_blob(&self) -> Result<String, BackofficeError> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Blob<'a> {
            access_token: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            refresh_token: Option<&'a str>,
            user: &'a UserProfile,
        }
        let blob = Blob {
            access_token: &self.access_token,
            refresh_token: self.refresh_token.as_deref(),
            user: &self.user,
        };
        Ok(serde_json::to_string(&blob)?)
    }
}

/// Persistence for the current session.
pub trait SessionStore: Send + Sync {
    /// Returns the stored session. A missing or unreadable record is `None`.
    fn load(&self) -> Option<AuthSession>;
    fn save(&self, session: &AuthSession) -> Result<(), BackofficeError>;
    fn clear(&self) -> Result<(), BackofficeError>;
}

/// Stores the session as a JSON file.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<AuthSession> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(
                    "ignoring unreadable session file {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    fn save(&self, session: &AuthSession) -> Result<(), BackofficeError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                create_private_dir(parent).map_err(|e| {
                    BackofficeError::Session(format!("cannot create {}: {}", parent.display(), e))
                })?;
            }
        }
        let json = serde_json::to_string_pretty(session)?;
        write_private_file(&self.path, json.as_bytes()).map_err(|e| {
            BackofficeError::Session(format!("cannot write {}: {}", self.path.display(), e))
        })
    }

    fn clear(&self) -> Result<(), BackofficeError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(BackofficeError::Session(format!(
                "cannot remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

// The session file holds bearer tokens: owner access only.
#[cfg(unix)]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)
}

#[cfg(unix)]
fn write_private_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on creation; tighten files left by older versions.
    file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private_file(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, contents)
}

/// Keeps the session in memory only.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<AuthSession>>,
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<AuthSession> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn save(&self, session: &AuthSession) -> Result<(), BackofficeError> {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner()) = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), BackofficeError> {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner()) = None;
        Ok(())
    }
}

pub struct SessionContext {
    store: Box<dyn SessionStore>,
    state: RwLock<Option<AuthSession>>,
}

impl SessionContext {
    pub fn new(store: Box<dyn SessionStore>) -> Self {
        Self {
            store,
            state: RwLock::new(None),
        }
    }

    /// A context with an empty in-memory store.
    pub fn anonymous() -> Self {
        Self::new(Box::new(MemorySessionStore::default()))
    }

    /// Builds a context and loads whatever session the store holds.
    pub fn hydrate(store: Box<dyn SessionStore>) -> Self {
        let ctx = Self::new(store);
        let loaded = ctx.store.load();
        if loaded.is_some() {
            tracing::debug!("session restored from store");
        }
        *ctx.state.write().unwrap_or_else(|e| e.into_inner()) = loaded;
        ctx
    }

    /// Replaces the current session and persists it.
    pub fn establish(&self, session: AuthSession) -> Result<(), BackofficeError> {
        self.store.save(&session)?;
        *self.state.write().unwrap_or_else(|e| e.into_inner()) = Some(session);
        Ok(())
    }

    /// Drops the in-memory session even when the store fails to clear.
    pub fn clear(&self) -> Result<(), BackofficeError> {
        *self.state.write().unwrap_or_else(|e| e.into_inner()) = None;
        self.store.clear()
    }

    pub fn current(&self) -> Option<AuthSession> {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }
}

impl CookieSource for SessionContext {
    fn cookie(&self, name: &str) -> Option<String> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        let session = state.as_ref()?;
        match name {
            AUTH_DATA_COOKIE => match session.cookie_blob() {
                Ok(blob) => Some(blob),
                Err(e) => {
                    tracing::warn!("cannot serialize session blob: {}", e);
                    None
                }
            },
            AUTH_TOKEN_COOKIE => Some("true".to_string()),
            _ => None,
        }
    }
}
