//! Route guard for the backoffice screens.

use comedica_api::auth::AUTH_TOKEN_COOKIE;
use comedica_api::CookieSource;
use serde::Serialize;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Screens that require an authenticated session, sub-paths included.
pub const PROTECTED_PREFIXES: &[&str] = &[
    "/dashboard",
    "/usuarios",
    "/seguridad",
    "/corresponsales",
    "/reclamos",
    "/transacciones",
    "/reportes",
    "/auditoria",
    "/cambiar-clave",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteDecision {
    Continue,
    RedirectToLogin,
    RedirectToDashboard,
}

impl RouteDecision {
    /// Target path of a redirect.
    pub fn location(self) -> Option<&'static str> {
        match self {
            RouteDecision::Continue => None,
            RouteDecision::RedirectToLogin => Some(LOGIN_PATH),
            RouteDecision::RedirectToDashboard => Some(DASHBOARD_PATH),
        }
    }
}

/// `/reclamos` and `/reclamos/12` match the prefix, `/reclamosx` does not.
fn under(path: &str, prefix: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

pub fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES.iter().any(|prefix| under(path, prefix))
}

/// Decides what to do with a navigation to `path`. Only the presence of the
/// `auth_token` cookie is checked.
pub fn guard_route(path: &str, cookies: &dyn CookieSource) -> RouteDecision {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let authenticated = cookies.cookie(AUTH_TOKEN_COOKIE).is_some();

    if is_protected(path) && !authenticated {
        tracing::debug!("{} requires a session, redirecting to login", path);
        return RouteDecision::RedirectToLogin;
    }
    if under(path, LOGIN_PATH) && authenticated {
        return RouteDecision::RedirectToDashboard;
    }
    RouteDecision::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use comedica_api::NoCookies;
    use std::collections::HashMap;

    fn signed_in() -> HashMap<String, String> {
        HashMap::from([(AUTH_TOKEN_COOKIE.to_string(), "true".to_string())])
    }

    #[test]
    fn protected_without_cookie_goes_to_login() {
        assert_eq!(
            guard_route("/reclamos/15", &NoCookies),
            RouteDecision::RedirectToLogin
        );
        assert_eq!(
            guard_route("/dashboard?tab=1", &NoCookies),
            RouteDecision::RedirectToLogin
        );
        assert_eq!(
            RouteDecision::RedirectToLogin.location(),
            Some("/login")
        );
    }

    #[test]
    fn protected_with_cookie_continues() {
        assert_eq!(guard_route("/usuarios", &signed_in()), RouteDecision::Continue);
    }

    #[test]
    fn login_with_cookie_goes_to_dashboard() {
        assert_eq!(
            guard_route("/login", &signed_in()),
            RouteDecision::RedirectToDashboard
        );
        assert_eq!(guard_route("/login", &NoCookies), RouteDecision::Continue);
    }

    #[test]
    fn public_and_lookalike_paths_continue() {
        assert_eq!(guard_route("/", &NoCookies), RouteDecision::Continue);
        assert_eq!(guard_route("/reclamosx", &NoCookies), RouteDecision::Continue);
        assert!(!is_protected("/ayuda"));
        assert!(is_protected("/cambiar-clave"));
    }
}
