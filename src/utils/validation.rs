use crate::utils::error::{LoveError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LoveError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(LoveError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(LoveError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(LoveError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LoveError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(LoveError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| LoveError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// Whitespace as browsers strip it from form input: Unicode `White_Space`
/// without NEL (U+0085), plus the byte-order mark (U+FEFF).
pub fn is_input_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// 使用者輸入的必填欄位：空字串或只有空白都視為缺漏
pub fn require_non_blank(field_name: &str, value: &str) -> Result<()> {
    if value.chars().all(is_input_whitespace) {
        return Err(LoveError::invalid_input(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_whitespace_set() {
        for c in [' ', '\t', '\n', '\u{A0}', '\u{3000}', '\u{FEFF}'] {
            assert!(is_input_whitespace(c), "{c:?}");
        }
        for c in ['\u{85}', '\u{200B}', 'a'] {
            assert!(!is_input_whitespace(c), "{c:?}");
        }
    }

    #[test]
    fn test_require_non_blank_uses_input_whitespace() {
        assert!(require_non_blank("name", " \u{FEFF}\u{3000} ").is_err());
        assert!(require_non_blank("name", "\u{85}").is_ok());
        assert!(require_non_blank("name", " Sam ").is_ok());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("remote.url", "https://example.supabase.co").is_ok());
        assert!(validate_url("remote.url", "http://localhost:54321").is_ok());
        assert!(validate_url("remote.url", "").is_err());
        assert!(validate_url("remote.url", "invalid-url").is_err());
        assert!(validate_url("remote.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("remote.timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("remote.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("title", "First date").is_ok());
        assert!(matches!(
            require_non_blank("title", ""),
            Err(LoveError::InvalidInput { .. })
        ));
        assert!(matches!(
            require_non_blank("title", " \t\n"),
            Err(LoveError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("key".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("remote.api_key", &present).unwrap(), "key");
        assert!(matches!(
            validate_required_field("remote.api_key", &missing),
            Err(LoveError::MissingConfigError { .. })
        ));
    }
}
