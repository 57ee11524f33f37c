//! Authenticated HTTP client for the backoffice backend API.

use std::time::Duration;

use reqwest::header::{HeaderMap, CONTENT_DISPOSITION, CONTENT_TYPE};
use reqwest::multipart;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{
    auth::{auth_headers, ContentKind, CookieSource},
    envelope::{build_envelope, BodyKind, Endpoint, RequestEnvelope},
    query::RequestCommon,
    types::ApiResponse,
    Error,
};

/// Outbound request body.
#[derive(Debug)]
pub enum FetchBody {
    Empty,
    /// Pre-serialized JSON text.
    Json(String),
    Form(Vec<(String, String)>),
    Multipart(MultipartUpload),
}

/// Text fields and file parts of a multipart upload.
#[derive(Clone, Debug, Default)]
pub struct MultipartUpload {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

#[derive(Clone, Debug)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl MultipartUpload {
    pub fn with_file(mut self, part: FilePart) -> Self {
        self.files.push(part);
        self
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    fn into_form(self) -> Result<multipart::Form, Error> {
        let mut form = multipart::Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for file in self.files {
            let part = multipart::Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.content_type)
                .map_err(|e| {
                    tracing::error!("Invalid content type for upload: {}", e);
                    Error::RequestFailed(e.to_string())
                })?;
            form = form.part(file.field, part);
        }
        Ok(form)
    }
}

/// One fully prepared HTTP call.
#[derive(Debug)]
pub struct FetchRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: FetchBody,
}

/// Raw document returned by a binary export endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryPayload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}

/// HTTP client for the backoffice backend.
///
/// Holds one `reqwest::Client` with a request timeout. Authentication is not
/// stored here: every call derives its headers from the cookies it is given.
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL for the API, without a trailing slash.
    base_api_url: String,
    http: reqwest::Client,
}

impl Client {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a client for the given base URL with the default timeout.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT)
    }

    /// Creates a client for the given base URL with a custom request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        Url::parse(base_url).map_err(|e| {
            tracing::error!("Invalid base URL '{}': {}", base_url, e);
            Error::InvalidUrl(format!("{}: {}", base_url, e))
        })?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed(e.to_string())
            })?;
        Ok(Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e.to_string())
        })
    }

    async fn send(&self, request: FetchRequest) -> Result<reqwest::Response, Error> {
        let mut builder = self
            .http
            .request(request.method, request.url)
            .headers(request.headers);
        builder = match request.body {
            FetchBody::Empty => builder,
            FetchBody::Json(text) => builder.body(text),
            FetchBody::Form(pairs) => builder.form(&pairs),
            FetchBody::Multipart(upload) => builder.multipart(upload.into_form()?),
        };
        builder.send().await.map_err(|e| {
            tracing::error!("Failed to reach backend: {}", e);
            Error::RequestFailed(e.to_string())
        })
    }

    /// Performs the call and decodes the response envelope.
    ///
    /// A non-2xx response whose body still carries a `result` block is
    /// returned as an envelope so the caller sees the backend's own code and
    /// message. Any other non-2xx response is an [`Error::HttpStatus`].
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        request: FetchRequest,
    ) -> Result<ApiResponse<T>, Error> {
        let resp = self.send(request).await?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e.to_string())
        })?;

        if !status.is_success() {
            if let Some(envelope) = in_band_error::<T>(&body) {
                tracing::warn!(
                    "Backend answered {} with result code {:?}",
                    status,
                    envelope.code()
                );
                return Ok(envelope);
            }
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<ApiResponse<T>>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::Parse(e.to_string())
        })
    }

    /// Performs the call and returns the raw body. Used by document export
    /// endpoints. A JSON error envelope in place of the document becomes
    /// [`Error::Backend`].
    pub async fn fetch_bytes(&self, request: FetchRequest) -> Result<BinaryPayload, Error> {
        let resp = self.send(request).await?;
        let status = resp.status();
        let content_type = header_string(resp.headers(), CONTENT_TYPE.as_str());
        let file_name = header_string(resp.headers(), CONTENT_DISPOSITION.as_str())
            .and_then(|value| disposition_file_name(&value));
        let bytes = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed(e.to_string())
        })?;

        let is_json = content_type
            .as_deref()
            .is_some_and(|ct| ct.contains("application/json"));
        if is_json || !status.is_success() {
            let text = String::from_utf8_lossy(&bytes);
            if let Some(envelope) = in_band_error::<serde_json::Value>(&text) {
                if let Some(result) = envelope.result.filter(|r| r.code != 0) {
                    tracing::warn!("Export rejected with result code {}", result.code);
                    return Err(Error::Backend {
                        code: result.code,
                        message: result.message.unwrap_or_default(),
                    });
                }
            }
            if !status.is_success() {
                let snippet = truncate_body(&text);
                tracing::error!("Export failed with status {}: {}", status, snippet);
                return Err(Error::HttpStatus {
                    status: status.as_u16(),
                    body: snippet,
                });
            }
        }

        Ok(BinaryPayload {
            bytes: bytes.to_vec(),
            content_type,
            file_name,
        })
    }

    fn prepare<R: Serialize>(
        &self,
        endpoint: Endpoint,
        id: Option<&str>,
        envelope: &RequestEnvelope<R>,
        cookies: &dyn CookieSource,
    ) -> Result<FetchRequest, Error> {
        let descriptor = endpoint.descriptor();
        let url = self.get_url(&endpoint.path(id)?)?;
        let (url, content, body) = match descriptor.body {
            BodyKind::Json => {
                let text = serde_json::to_string(envelope).map_err(|e| {
                    tracing::error!("Failed to serialize request envelope: {}", e);
                    Error::Parse(e.to_string())
                })?;
                (url, ContentKind::Json, FetchBody::Json(text))
            }
            BodyKind::Query => (envelope.add_to_url(&url), ContentKind::NoBody, FetchBody::Empty),
            BodyKind::Form => (
                url,
                ContentKind::FormUrlEncoded,
                FetchBody::Form(envelope.metadata_pairs()),
            ),
            BodyKind::Multipart => (
                url,
                ContentKind::Multipart,
                FetchBody::Multipart(MultipartUpload {
                    fields: envelope.metadata_pairs(),
                    files: Vec::new(),
                }),
            ),
        };
        Ok(FetchRequest {
            method: descriptor.method,
            url,
            headers: auth_headers(cookies, content),
            body,
        })
    }

    /// Builds the envelope for `endpoint` and performs the authenticated call.
    pub(crate) async fn call<R, T>(
        &self,
        endpoint: Endpoint,
        id: Option<&str>,
        request: R,
        common: &RequestCommon,
        cookies: &dyn CookieSource,
    ) -> Result<ApiResponse<T>, Error>
    where
        R: Serialize,
        T: DeserializeOwned,
    {
        let envelope = build_envelope(endpoint, request, common);
        let prepared = self.prepare(endpoint, id, &envelope, cookies)?;
        tracing::debug!("{:?} {} (uuid {})", endpoint, prepared.url.path(), envelope.uuid);
        self.fetch(prepared).await
    }

    /// Form-encoded variant: envelope metadata plus `fields` as urlencoded pairs.
    pub(crate) async fn call_form<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        fields: Vec<(String, String)>,
        cookies: &dyn CookieSource,
    ) -> Result<ApiResponse<T>, Error> {
        let envelope = build_envelope(endpoint, (), &RequestCommon::default());
        let mut prepared = self.prepare(endpoint, None, &envelope, cookies)?;
        if let FetchBody::Form(pairs) = &mut prepared.body {
            pairs.extend(fields);
        }
        self.fetch(prepared).await
    }

    /// Multipart variant: envelope metadata as text parts next to the upload.
    pub(crate) async fn call_multipart<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        upload: MultipartUpload,
        cookies: &dyn CookieSource,
    ) -> Result<ApiResponse<T>, Error> {
        let envelope = build_envelope(endpoint, (), &RequestCommon::default());
        let mut prepared = self.prepare(endpoint, None, &envelope, cookies)?;
        if let FetchBody::Multipart(parts) = &mut prepared.body {
            parts.fields.extend(upload.fields);
            parts.files.extend(upload.files);
        }
        self.fetch(prepared).await
    }

    /// Binary variant: same envelope as [`Client::call`], raw document back.
    pub(crate) async fn call_binary<R: Serialize>(
        &self,
        endpoint: Endpoint,
        request: R,
        common: &RequestCommon,
        cookies: &dyn CookieSource,
    ) -> Result<BinaryPayload, Error> {
        let envelope = build_envelope(endpoint, request, common);
        let prepared = self.prepare(endpoint, None, &envelope, cookies)?;
        self.fetch_bytes(prepared).await
    }
}

/// Decodes a body as an envelope only when it carries a `result` block.
fn in_band_error<T>(body: &str) -> Option<ApiResponse<T>> {
    let envelope = serde_json::from_str::<ApiResponse<serde_json::Value>>(body).ok()?;
    envelope.result.as_ref()?;
    Some(ApiResponse {
        result: envelope.result,
        data: None,
        pagination: envelope.pagination,
        metadata: envelope.metadata,
    })
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.to_string())
}

/// File name from a `Content-Disposition` header, reduced to its last path
/// component. Names that would resolve outside the working directory are
/// dropped.
fn disposition_file_name(value: &str) -> Option<String> {
    let raw = value.split(';').find_map(|part| {
        let (key, name) = part.trim().split_once('=')?;
        if key.trim().eq_ignore_ascii_case("filename") {
            Some(name.trim().trim_matches('"'))
        } else {
            None
        }
    })?;
    let base = raw.rsplit(|c| c == '/' || c == '\\').next()?.trim();
    if base.is_empty() || base == "." || base == ".." {
        tracing::warn!("Ignoring unusable export file name {:?}", raw);
        return None;
    }
    Some(base.to_string())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
