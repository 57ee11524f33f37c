use chrono::Utc;
use comedica_api::types::{Credentials, PasswordChange, SoftTokenChallenge, UserProfile};
use comedica_api::CookieSource;
use serde::Serialize;

use super::{messages, Backoffice};
use crate::action::{from_error, normalize, normalize_with, ActionResult};
use crate::session::{AuthSession, SessionContext};
use crate::validation::{sanitize_text, validate_credentials, validate_new_password};

const MAX_TOKEN_FIELD_LENGTH: usize = 100;

/// Where the user goes after a successful login.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LoginRedirect {
    ForcePasswordChange,
    Dashboard,
}

impl LoginRedirect {
    pub fn path(self) -> &'static str {
        match self {
            LoginRedirect::ForcePasswordChange => "/cambiar-clave",
            LoginRedirect::Dashboard => crate::routing::DASHBOARD_PATH,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutcome {
    pub user: UserProfile,
    pub redirect: LoginRedirect,
}

impl Backoffice {
    /// Authenticates and, on success, establishes the session.
    pub async fn login(
        &self,
        session: &SessionContext,
        credentials: &Credentials,
    ) -> ActionResult<LoginOutcome> {
        const LABEL: &str = "login";
        let credentials = match validate_credentials(credentials) {
            Ok(c) => c,
            Err(e) => return from_error(LABEL, messages::LOGIN, e),
        };

        let data = match normalize(LABEL, messages::LOGIN, self.client.login(&credentials).await)
            .into_result()
        {
            Ok(data) => data,
            Err(message) => return ActionResult::failure(message),
        };

        let auth = AuthSession::from_login(data, Utc::now());
        let outcome = LoginOutcome {
            user: auth.user.clone(),
            redirect: if auth.must_change_password {
                LoginRedirect::ForcePasswordChange
            } else {
                LoginRedirect::Dashboard
            },
        };
        if let Err(e) = session.establish(auth) {
            return from_error(LABEL, messages::LOGIN, e);
        }
        tracing::info!("user {} signed in", outcome.user.usuario);
        ActionResult::success(outcome)
    }

    /// Notifies the backend, then always tears down the local session.
    ///
    /// The result only reflects the local teardown.
    pub async fn logout(&self, session: &SessionContext) -> ActionResult<bool> {
        const LABEL: &str = "logout";
        if session.is_authenticated() {
            let remote = normalize(LABEL, messages::LOGOUT, self.client.logout(session).await);
            if let Some(message) = remote.error_message() {
                tracing::warn!("backend logout failed, clearing session anyway: {}", message);
            }
        }
        match session.clear() {
            Ok(()) => ActionResult::success(true),
            Err(e) => from_error(LABEL, messages::LOGOUT, e),
        }
    }

    pub async fn change_password(
        &self,
        cookies: &dyn CookieSource,
        change: &PasswordChange,
    ) -> ActionResult<bool> {
        const LABEL: &str = "change_password";
        if let Err(e) = validate_new_password(change) {
            return from_error(LABEL, messages::CHANGE_PASSWORD, e);
        }
        normalize_with(
            LABEL,
            messages::CHANGE_PASSWORD,
            self.client.change_password(cookies, change).await,
            |_, _| true,
        )
    }

    pub async fn request_soft_token(
        &self,
        cookies: &dyn CookieSource,
        usuario: &str,
    ) -> ActionResult<SoftTokenChallenge> {
        const LABEL: &str = "request_soft_token";
        let usuario = match sanitize_text(usuario, MAX_TOKEN_FIELD_LENGTH) {
            Ok(u) => u,
            Err(e) => return from_error(LABEL, messages::REQUEST_SOFT_TOKEN, e),
        };
        normalize(
            LABEL,
            messages::REQUEST_SOFT_TOKEN,
            self.client.request_soft_token(cookies, &usuario).await,
        )
    }

    /// Returns whether the backend accepted the token.
    pub async fn validate_soft_token(
        &self,
        cookies: &dyn CookieSource,
        referencia: &str,
        token: &str,
    ) -> ActionResult<bool> {
        const LABEL: &str = "validate_soft_token";
        let fields = sanitize_text(referencia, MAX_TOKEN_FIELD_LENGTH).and_then(|r| {
            sanitize_text(token, MAX_TOKEN_FIELD_LENGTH).map(|t| (r, t))
        });
        let (referencia, token) = match fields {
            Ok(f) => f,
            Err(e) => return from_error(LABEL, messages::VALIDATE_SOFT_TOKEN, e),
        };
        normalize_with(
            LABEL,
            messages::VALIDATE_SOFT_TOKEN,
            self.client
                .validate_soft_token(cookies, &referencia, &token)
                .await,
            |validation, _| validation.valido,
        )
    }
}
