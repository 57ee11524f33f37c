use serde::{Deserialize, Serialize};

/// Outcome block carried by every backend response. `code == 0` is the only success signal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultStatus {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Primary pagination block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub total_elements: Option<i64>,
    pub total_pages: Option<i64>,
}

/// Alternate paging metadata used by some endpoints instead of [`Pagination`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(alias = "currentPage")]
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
    pub total_pages: Option<i64>,
    #[serde(alias = "totalElements")]
    pub total_records: Option<i64>,
}

/// Response envelope returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<ResultStatus>,
    pub data: Option<T>,
    pub pagination: Option<Pagination>,
    pub metadata: Option<Metadata>,
}

impl<T> ApiResponse<T> {
    /// True only when the result code is zero and a payload is present.
    pub fn is_success(&self) -> bool {
        self.code() == Some(0) && self.data.is_some()
    }

    pub fn code(&self) -> Option<i64> {
        self.result.as_ref().map(|r| r.code)
    }

    /// The backend message, if present and not blank.
    pub fn message(&self) -> Option<&str> {
        self.result
            .as_ref()
            .and_then(|r| r.message.as_deref())
            .filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_requires_zero_code_and_data() {
        let ok: ApiResponse<Vec<i64>> =
            serde_json::from_str(r#"{"result":{"code":0,"message":"OK"},"data":[1]}"#).unwrap();
        assert!(ok.is_success());

        let no_data: ApiResponse<Vec<i64>> =
            serde_json::from_str(r#"{"result":{"code":0}}"#).unwrap();
        assert!(!no_data.is_success());

        let failed: ApiResponse<Vec<i64>> =
            serde_json::from_str(r#"{"result":{"code":7,"message":"x"},"data":[1]}"#).unwrap();
        assert!(!failed.is_success());

        let no_result: ApiResponse<Vec<i64>> = serde_json::from_str(r#"{"data":[1]}"#).unwrap();
        assert!(!no_result.is_success());
    }

    #[test]
    fn blank_message_is_absent() {
        let resp: ApiResponse<()> =
            serde_json::from_str(r#"{"result":{"code":3,"message":"  "}}"#).unwrap();
        assert_eq!(resp.message(), None);
        assert_eq!(resp.code(), Some(3));
    }

    #[test]
    fn metadata_accepts_alternate_names() {
        let meta: Metadata =
            serde_json::from_str(r#"{"currentPage":2,"pageSize":10,"totalElements":35}"#).unwrap();
        assert_eq!(meta.page_number, Some(2));
        assert_eq!(meta.total_records, Some(35));
        assert_eq!(meta.total_pages, None);
    }
}
