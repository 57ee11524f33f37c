//! Text-safe transport of exported documents.

use base64::{engine::general_purpose, Engine as _};
use comedica_api::BinaryPayload;
use serde::Serialize;

use crate::error::BackofficeError;

/// A binary export encoded as base64 so it can cross the action boundary as text.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedDocument {
    pub file_name: String,
    pub content_type: String,
    pub content_base64: String,
}

impl ExportedDocument {
    /// Encodes a payload, using the given defaults when the backend sent no
    /// file name or content type.
    pub fn from_payload(payload: BinaryPayload, default_name: &str, default_type: &str) -> Self {
        Self {
            file_name: payload
                .file_name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| default_name.to_string()),
            content_type: payload
                .content_type
                .unwrap_or_else(|| default_type.to_string()),
            content_base64: general_purpose::STANDARD.encode(&payload.bytes),
        }
    }

    /// Decodes the document back to its original bytes.
    pub fn decode(&self) -> Result<Vec<u8>, BackofficeError> {
        general_purpose::STANDARD
            .decode(&self.content_base64)
            .map_err(|e| BackofficeError::InvalidInput(format!("invalid base64 document: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_restores_original_bytes() {
        let bytes: Vec<u8> = (0u8..=255).chain([0, 0, 255]).collect();
        let doc = ExportedDocument::from_payload(
            BinaryPayload {
                bytes: bytes.clone(),
                content_type: Some("application/xml".to_string()),
                file_name: Some("tx.xml".to_string()),
            },
            "transacciones.xml",
            "application/xml",
        );
        assert_eq!(doc.file_name, "tx.xml");
        assert_eq!(doc.decode().unwrap(), bytes);
    }

    #[test]
    fn defaults_fill_missing_headers() {
        let doc = ExportedDocument::from_payload(
            BinaryPayload {
                bytes: b"<a/>".to_vec(),
                content_type: None,
                file_name: Some(" ".to_string()),
            },
            "transacciones.xml",
            "application/xml",
        );
        assert_eq!(doc.file_name, "transacciones.xml");
        assert_eq!(doc.content_type, "application/xml");
        assert_eq!(doc.content_base64, "PGEvPg==");
    }

    #[test]
    fn empty_payload_round_trips() {
        let doc = ExportedDocument::from_payload(
            BinaryPayload {
                bytes: Vec::new(),
                content_type: None,
                file_name: None,
            },
            "x.xml",
            "application/xml",
        );
        assert_eq!(doc.content_base64, "");
        assert!(doc.decode().unwrap().is_empty());
    }

    #[test]
    fn corrupt_text_fails_to_decode() {
        let doc = ExportedDocument {
            file_name: "x".to_string(),
            content_type: "x".to_string(),
            content_base64: "***".to_string(),
        };
        assert!(doc.decode().is_err());
    }
}
