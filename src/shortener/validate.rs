//! Long URL validation
//!
//! Pure and synchronous. Surrounding whitespace is trimmed, then the text
//! must parse as an absolute URL with both a scheme and a host. The
//! normalized form is whatever the `url` crate serializes the parsed URL to.

use thiserror::Error;
use url::Url;

/// Why a raw input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Empty or whitespace-only input
    #[error("missing URL")]
    Missing,
    /// Not an absolute URL with scheme + authority
    #[error("malformed URL")]
    Malformed,
}

impl ValidationError {
    /// Message shown under the input field
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Missing => "Please enter a URL.",
            Self::Malformed => "Please enter a valid URL.",
        }
    }
}

/// Validate raw user input, returning the normalized long URL
pub fn validate(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing);
    }

    let parsed = Url::parse(trimmed).map_err(|_| ValidationError::Malformed)?;

    // `mailto:x`, `data:...` and `file:///tmp` parse fine but carry no authority
    let has_authority = parsed.host_str().is_some_and(|host| !host.is_empty());
    if parsed.cannot_be_a_base() || !has_authority {
        return Err(ValidationError::Malformed);
    }

    Ok(parsed.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_blank_input_is_missing() {
        for raw in ["", " ", "\t", "\n  \r\n", "   \t  "] {
            assert_eq!(validate(raw), Err(ValidationError::Missing), "input {raw:?}");
        }
    }

    #[test]
    fn unparseable_input_is_malformed() {
        for raw in [
            "not a url",
            "example.com",
            "www.example.com/path",
            "http://",
            "://missing-scheme.com",
            "https://exa mple.com",
        ] {
            assert_eq!(
                validate(raw),
                Err(ValidationError::Malformed),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn urls_without_authority_are_malformed() {
        for raw in ["mailto:someone@example.com", "data:text/plain,hi", "file:///tmp/x"] {
            assert_eq!(
                validate(raw),
                Err(ValidationError::Malformed),
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn valid_url_passes_through_unchanged() {
        assert_eq!(
            validate("https://example.com/very/long/path").as_deref(),
            Ok("https://example.com/very/long/path")
        );
        assert_eq!(
            validate("http://localhost:8080/a?b=c#d").as_deref(),
            Ok("http://localhost:8080/a?b=c#d")
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            validate("  https://example.com/path \n").as_deref(),
            Ok("https://example.com/path")
        );
    }

    #[test]
    fn parser_normalization_is_applied() {
        assert_eq!(
            validate("HTTPS://Example.COM").as_deref(),
            Ok("https://example.com/")
        );
    }

    #[test]
    fn user_messages() {
        assert_eq!(ValidationError::Missing.user_message(), "Please enter a URL.");
        assert_eq!(
            ValidationError::Malformed.user_message(),
            "Please enter a valid URL."
        );
        assert_eq!(ValidationError::Malformed.to_string(), "malformed URL");
    }
}
