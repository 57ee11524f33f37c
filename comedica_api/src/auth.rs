//! Authentication header derivation from the cookie-stored session blob.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Deserialize;

/// Cookie holding the JSON session blob (`{ "accessToken": "...", ... }`).
pub const AUTH_DATA_COOKIE: &str = "auth_data";
/// Presence-only cookie consulted by the route guard.
pub const AUTH_TOKEN_COOKIE: &str = "auth_token";

/// Read access to the cookies of the current request.
pub trait CookieSource: Send + Sync {
    /// Returns the raw value of the named cookie, if present.
    fn cookie(&self, name: &str) -> Option<String>;
}

impl CookieSource for HashMap<String, String> {
    fn cookie(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// A cookie source with no cookies at all. Used for unauthenticated calls like login.
pub struct NoCookies;

impl CookieSource for NoCookies {
    fn cookie(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Cookies parsed from a raw `Cookie:` request header.
#[derive(Clone, Debug, Default)]
pub struct CookieHeader {
    pairs: Vec<(String, String)>,
}

impl CookieHeader {
    /// Parses `name=value; other=value` pairs. Malformed segments are skipped
    /// and surrounding double quotes are stripped from values.
    pub fn parse(header: &str) -> Self {
        let pairs = header
            .split(';')
            .filter_map(|segment| {
                let (name, value) = segment.trim().split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                let value = value.trim();
                let value = value
                    .strip_prefix('"')
                    .and_then(|v| v.strip_suffix('"'))
                    .unwrap_or(value);
                Some((name.to_string(), value.to_string()))
            })
            .collect();
        Self { pairs }
    }
}

impl CookieSource for CookieHeader {
    fn cookie(&self, name: &str) -> Option<String> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }
}

/// How the outbound request body is encoded. Drives the `Content-Type` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentKind {
    Json,
    FormUrlEncoded,
    /// The transport sets the multipart boundary itself.
    Multipart,
    NoBody,
}

impl ContentKind {
    fn content_type(self) -> Option<&'static str> {
        match self {
            ContentKind::Json => Some("application/json"),
            ContentKind::FormUrlEncoded => Some("application/x-www-form-urlencoded"),
            ContentKind::Multipart | ContentKind::NoBody => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredToken {
    access_token: Option<String>,
}

/// Extracts the access token from the session cookie, if one is present and well-formed.
pub fn access_token(cookies: &dyn CookieSource) -> Option<String> {
    let raw = cookies.cookie(AUTH_DATA_COOKIE)?;
    match serde_json::from_str::<StoredToken>(&raw) {
        Ok(StoredToken {
            access_token: Some(token),
        }) if !token.trim().is_empty() => Some(token),
        Ok(_) => {
            tracing::debug!("Session cookie carries no access token");
            None
        }
        Err(e) => {
            tracing::debug!("Ignoring malformed session cookie: {}", e);
            None
        }
    }
}

/// Builds the header map for an outbound call.
///
/// `Authorization` is only added when a usable token is found. A missing or
/// malformed cookie is not an error: the call proceeds unauthenticated and
/// the backend answers with its own error code.
pub fn auth_headers(cookies: &dyn CookieSource, content: ContentKind) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(content_type) = content.content_type() {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
    if let Some(token) = access_token(cookies) {
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(e) => tracing::debug!("Access token is not a valid header value: {}", e),
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jar(value: &str) -> HashMap<String, String> {
        HashMap::from([(AUTH_DATA_COOKIE.to_string(), value.to_string())])
    }

    #[test]
    fn bearer_header_from_valid_blob() {
        let headers = auth_headers(
            &jar(r#"{"accessToken":"abc.def","user":{"id":3}}"#),
            ContentKind::Json,
        );
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc.def");
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    }

    #[test]
    fn missing_cookie_yields_no_authorization() {
        let headers = auth_headers(&NoCookies, ContentKind::Json);
        assert!(headers.get(AUTHORIZATION).is_none());
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn malformed_blob_yields_no_authorization() {
        let headers = auth_headers(&jar("{not json"), ContentKind::NoBody);
        assert!(headers.is_empty());
    }

    #[test]
    fn empty_token_is_treated_as_absent() {
        let headers = auth_headers(&jar(r#"{"accessToken":"  "}"#), ContentKind::NoBody);
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn form_and_multipart_content_types() {
        let form = auth_headers(&NoCookies, ContentKind::FormUrlEncoded);
        assert_eq!(
            form.get(CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
        let multipart = auth_headers(&NoCookies, ContentKind::Multipart);
        assert!(multipart.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn cookie_header_parsing() {
        let cookies = CookieHeader::parse(
            r#"theme=dark; auth_token=true; auth_data="{"accessToken":"t1"}"; =broken; junk"#,
        );
        assert_eq!(cookies.cookie("theme").as_deref(), Some("dark"));
        assert_eq!(cookies.cookie(AUTH_TOKEN_COOKIE).as_deref(), Some("true"));
        assert_eq!(access_token(&cookies).as_deref(), Some("t1"));
        assert!(cookies.cookie("junk").is_none());
    }
}
