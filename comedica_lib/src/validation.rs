use lazy_static::lazy_static;
use regex::Regex;

use comedica_api::types::{Credentials, PasswordChange};

use crate::error::BackofficeError;

pub const MAX_SEARCH_LENGTH: usize = 100;
pub const MAX_PAGE_SIZE: u32 = 1000;
pub const MIN_PASSWORD_LENGTH: usize = 8;

lazy_static! {
    static ref EMAIL_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
            .expect("email pattern compiles");
    static ref CATALOG_KIND_REGEX: Regex =
        Regex::new(r"^[a-z0-9-]{1,40}$").expect("catalog kind pattern compiles");
}

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, BackofficeError> {
    if input.len() > max_len {
        return Err(BackofficeError::InvalidInput(format!(
            "el texto excede el máximo de {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(BackofficeError::InvalidInput(
            "el texto está vacío".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate free-text search input.
pub fn validate_search(input: &str) -> Result<String, BackofficeError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate an email address, trimmed and lowercased.
pub fn validate_email(input: &str) -> Result<String, BackofficeError> {
    let trimmed = input.trim().to_lowercase();
    if EMAIL_REGEX.is_match(&trimmed) {
        Ok(trimmed)
    } else {
        Err(BackofficeError::InvalidInput(format!(
            "correo electrónico inválido '{}'",
            input.trim()
        )))
    }
}

/// Validate page size (must be 1..=1000).
pub fn validate_page_size(size: u32) -> Result<u32, BackofficeError> {
    if !(1..=MAX_PAGE_SIZE).contains(&size) {
        return Err(BackofficeError::InvalidInput(format!(
            "el tamaño de página debe estar entre 1 y {}",
            MAX_PAGE_SIZE
        )));
    }
    Ok(size)
}

/// Both fields must be present; the user name is trimmed, the password is not.
pub fn validate_credentials(credentials: &Credentials) -> Result<Credentials, BackofficeError> {
    let usuario = credentials.usuario.trim();
    if usuario.is_empty() {
        return Err(BackofficeError::InvalidInput(
            "el usuario es requerido".to_string(),
        ));
    }
    if credentials.clave.is_empty() {
        return Err(BackofficeError::InvalidInput(
            "la contraseña es requerida".to_string(),
        ));
    }
    Ok(Credentials {
        usuario: usuario.to_string(),
        clave: credentials.clave.clone(),
    })
}

pub fn validate_new_password(change: &PasswordChange) -> Result<(), BackofficeError> {
    if change.clave_actual.is_empty() {
        return Err(BackofficeError::InvalidInput(
            "la contraseña actual es requerida".to_string(),
        ));
    }
    if change.clave_nueva.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(BackofficeError::InvalidInput(format!(
            "la nueva contraseña debe tener al menos {} caracteres",
            MIN_PASSWORD_LENGTH
        )));
    }
    if change.clave_nueva == change.clave_actual {
        return Err(BackofficeError::InvalidInput(
            "la nueva contraseña debe ser distinta de la actual".to_string(),
        ));
    }
    Ok(())
}

/// Catalog kinds go into the URL path, so only lowercase slugs are accepted.
pub fn validate_catalog_kind(input: &str) -> Result<String, BackofficeError> {
    let lower = input.trim().to_lowercase();
    if CATALOG_KIND_REGEX.is_match(&lower) {
        Ok(lower)
    } else {
        Err(BackofficeError::InvalidInput(format!(
            "tipo de catálogo inválido '{}'",
            input.trim()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Text sanitization --

    #[test]
    fn sanitize_strips_control_chars() {
        assert_eq!(sanitize_text("ab\x00c\x07d", 50).unwrap(), "abcd");
    }

    #[test]
    fn sanitize_trims() {
        assert_eq!(sanitize_text("  tarjeta \n", 50).unwrap(), "tarjeta");
    }

    #[test]
    fn sanitize_rejects_only_control_chars() {
        assert!(sanitize_text("\x01\x02", 50).is_err());
    }

    #[test]
    fn search_length_limit_is_in_bytes() {
        assert!(validate_search(&"a".repeat(100)).is_ok());
        assert!(validate_search(&"a".repeat(101)).is_err());
        // 51 two-byte characters exceed 100 bytes
        assert!(validate_search(&"ñ".repeat(51)).is_err());
    }

    // -- Email --

    #[test]
    fn patterns_compile_once() {
        lazy_static::initialize(&EMAIL_REGEX);
        lazy_static::initialize(&CATALOG_KIND_REGEX);
        assert!(EMAIL_REGEX.is_match("ana@comedica.com.sv"));
        assert!(CATALOG_KIND_REGEX.is_match("tipos-reclamo"));
    }

    #[test]
    fn email_valid_is_normalized() {
        assert_eq!(
            validate_email(" Ana.Perez@Comedica.COM.sv ").unwrap(),
            "ana.perez@comedica.com.sv"
        );
    }

    #[test]
    fn email_invalid() {
        assert!(validate_email("ana").is_err());
        assert!(validate_email("ana@").is_err());
        assert!(validate_email("ana@dominio").is_err());
        assert!(validate_email("").is_err());
    }

    // -- Page size --

    #[test]
    fn page_size_bounds() {
        assert!(validate_page_size(0).is_err());
        assert_eq!(validate_page_size(1).unwrap(), 1);
        assert_eq!(validate_page_size(1000).unwrap(), 1000);
        assert!(validate_page_size(1001).is_err());
    }

    // -- Credentials --

    #[test]
    fn credentials_trim_user_only() {
        let creds = validate_credentials(&Credentials {
            usuario: "  admin ".to_string(),
            clave: " secreto ".to_string(),
        })
        .unwrap();
        assert_eq!(creds.usuario, "admin");
        assert_eq!(creds.clave, " secreto ");
    }

    #[test]
    fn credentials_require_both_fields() {
        assert!(validate_credentials(&Credentials {
            usuario: " ".to_string(),
            clave: "x".to_string(),
        })
        .is_err());
        assert!(validate_credentials(&Credentials {
            usuario: "admin".to_string(),
            clave: String::new(),
        })
        .is_err());
    }

    // -- Password change --

    #[test]
    fn new_password_rules() {
        let change = |actual: &str, nueva: &str| PasswordChange {
            clave_actual: actual.to_string(),
            clave_nueva: nueva.to_string(),
        };
        assert!(validate_new_password(&change("anterior1", "nuevaClave9")).is_ok());
        assert!(validate_new_password(&change("anterior1", "corta")).is_err());
        assert!(validate_new_password(&change("mismaClave", "mismaClave")).is_err());
        assert!(validate_new_password(&change("", "nuevaClave9")).is_err());
    }

    // -- Catalog kind --

    #[test]
    fn catalog_kind_slug() {
        assert_eq!(validate_catalog_kind("Tipo-Reclamo").unwrap(), "tipo-reclamo");
        assert!(validate_catalog_kind("../usuarios").is_err());
        assert!(validate_catalog_kind("").is_err());
        assert!(validate_catalog_kind(&"a".repeat(41)).is_err());
    }
}
