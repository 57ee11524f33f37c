//! The uniform result shape returned by every action, and the normalizer
//! that turns backend envelopes and transport errors into it.

use comedica_api::types::{ApiResponse, Metadata, Pagination};
use serde::Serialize;

use crate::error::BackofficeError;

/// Message used when a transport error carries no usable text.
pub const UNEXPECTED_ERROR: &str = "Ocurrió un error inesperado";

/// Result consumed by callers of the action layer.
///
/// `errors` is true exactly when `data` is `None`. The fields are private so
/// only [`ActionResult::success`] and [`ActionResult::failure`] can build one.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult<T> {
    data: Option<T>,
    errors: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl<T> ActionResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            errors: false,
            error_message: None,
        }
    }

    /// Builds a failed result. A blank message is replaced by [`UNEXPECTED_ERROR`].
    pub fn failure(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            UNEXPECTED_ERROR.to_string()
        } else {
            message
        };
        Self {
            data: None,
            errors: true,
            error_message: Some(message),
        }
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn errors(&self) -> bool {
        self.errors
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Converts into a `Result`, with the error message as the error value.
    pub fn into_result(self) -> Result<T, String> {
        match self.data {
            Some(data) => Ok(data),
            None => Err(self
                .error_message
                .unwrap_or_else(|| UNEXPECTED_ERROR.to_string())),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ActionResult<U> {
        ActionResult {
            data: self.data.map(f),
            errors: self.errors,
            error_message: self.error_message,
        }
    }
}

/// Paging blocks of a successful envelope, handed to mappers that need them.
#[derive(Clone, Debug, Default)]
pub struct PagingBlocks {
    pub pagination: Option<Pagination>,
    pub metadata: Option<Metadata>,
}

/// Normalizes a service outcome.
///
/// * `code == 0` with data: `map` is applied and the result succeeds.
/// * Any other envelope: fails with the backend message, or `fallback` when
///   the backend sent none.
/// * A transport error: fails with the error's own message.
pub fn normalize_with<T, U, F>(
    label: &str,
    fallback: &str,
    response: Result<ApiResponse<T>, comedica_api::Error>,
    map: F,
) -> ActionResult<U>
where
    F: FnOnce(T, PagingBlocks) -> U,
{
    match response {
        Ok(envelope) => {
            let message = envelope.message().map(str::to_string);
            let ApiResponse {
                result,
                data,
                pagination,
                metadata,
            } = envelope;
            let code = result.map(|r| r.code);
            match (code, data) {
                (Some(0), Some(data)) => ActionResult::success(map(
                    data,
                    PagingBlocks {
                        pagination,
                        metadata,
                    },
                )),
                (code, _) => {
                    tracing::warn!("{} failed with result code {:?}", label, code);
                    ActionResult::failure(message.unwrap_or_else(|| fallback.to_string()))
                }
            }
        }
        Err(err) => {
            tracing::error!("{} failed: {}", label, err);
            ActionResult::failure(transport_message(&err, fallback))
        }
    }
}

/// [`normalize_with`] without any data mapping.
pub fn normalize<T>(
    label: &str,
    fallback: &str,
    response: Result<ApiResponse<T>, comedica_api::Error>,
) -> ActionResult<T> {
    normalize_with(label, fallback, response, |data, _| data)
}

/// Converts a library error raised before or after the service call.
pub fn from_error<T>(label: &str, fallback: &str, err: BackofficeError) -> ActionResult<T> {
    match err {
        BackofficeError::Api(api) => {
            tracing::error!("{} failed: {}", label, api);
            ActionResult::failure(transport_message(&api, fallback))
        }
        BackofficeError::InvalidInput(message) => {
            tracing::warn!("{} rejected: {}", label, message);
            ActionResult::failure(message)
        }
        other => {
            tracing::error!("{} failed: {}", label, other);
            ActionResult::failure(other.to_string())
        }
    }
}

fn transport_message(err: &comedica_api::Error, fallback: &str) -> String {
    match err {
        comedica_api::Error::Backend { message, .. } if message.trim().is_empty() => {
            fallback.to_string()
        }
        comedica_api::Error::Backend { message, .. } => message.clone(),
        other => {
            let text = other.to_string();
            if text.trim().is_empty() {
                UNEXPECTED_ERROR.to_string()
            } else {
                text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> Result<ApiResponse<Vec<serde_json::Value>>, comedica_api::Error> {
        Ok(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn success_keeps_data() {
        let result = normalize(
            "test",
            "Error al obtener reclamos",
            envelope(r#"{"result":{"code":0},"data":[{"id":1}]}"#),
        );
        assert!(!result.errors());
        assert_eq!(result.data().unwrap()[0]["id"], 1);
        assert_eq!(result.error_message(), None);
    }

    #[test]
    fn business_failure_uses_backend_message() {
        let result = normalize(
            "test",
            "Error al obtener reclamos",
            envelope(r#"{"result":{"code":1,"message":"no autorizado"}}"#),
        );
        assert!(result.errors());
        assert!(result.data().is_none());
        assert_eq!(result.error_message(), Some("no autorizado"));
    }

    #[test]
    fn business_failure_without_message_uses_fallback() {
        let result = normalize(
            "test",
            "Error al obtener reclamos",
            envelope(r#"{"result":{"code":99}}"#),
        );
        assert_eq!(result.error_message(), Some("Error al obtener reclamos"));
    }

    #[test]
    fn zero_code_without_data_is_failure() {
        let result = normalize("test", "Sin datos", envelope(r#"{"result":{"code":0}}"#));
        assert!(result.errors());
        assert_eq!(result.error_message(), Some("Sin datos"));
    }

    #[test]
    fn transport_failure_uses_error_text() {
        let result: ActionResult<Vec<serde_json::Value>> = normalize(
            "test",
            "fallback",
            Err(comedica_api::Error::RequestFailed("connection refused".to_string())),
        );
        assert_eq!(
            result.error_message(),
            Some("Request failed: connection refused")
        );
    }

    #[test]
    fn backend_error_without_message_uses_fallback() {
        let result: ActionResult<()> = normalize(
            "test",
            "Error al exportar transacciones",
            Err(comedica_api::Error::Backend {
                code: 4,
                message: String::new(),
            }),
        );
        assert_eq!(
            result.error_message(),
            Some("Error al exportar transacciones")
        );
    }

    #[test]
    fn blank_failure_message_is_replaced() {
        let result: ActionResult<()> = ActionResult::failure("   ");
        assert_eq!(result.error_message(), Some(UNEXPECTED_ERROR));
    }

    #[test]
    fn serialized_shape() {
        let ok = serde_json::to_value(ActionResult::success(vec![1, 2])).unwrap();
        assert_eq!(ok, serde_json::json!({ "data": [1, 2], "errors": false }));

        let failed = serde_json::to_value(ActionResult::<Vec<i32>>::failure("x")).unwrap();
        assert_eq!(
            failed,
            serde_json::json!({ "data": null, "errors": true, "errorMessage": "x" })
        );
    }

    #[test]
    fn invalid_input_message_is_passed_through() {
        let result: ActionResult<()> = from_error(
            "test",
            "fallback",
            BackofficeError::InvalidInput("correo inválido".to_string()),
        );
        assert_eq!(result.error_message(), Some("correo inválido"));
    }
}
