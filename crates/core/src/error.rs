//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// HTTP mapping lives in the API crate; this type only says what went wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A numeric form field could not be parsed.
    #[error("invalid {field}: {value:?} is not a valid number")]
    Parse { field: &'static str, value: String },

    /// An identifier was invalid (e.g. non-numeric path segment).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The referenced item does not exist.
    #[error("item not found")]
    NotFound,

    /// The backing store cannot be used (e.g. poisoned lock).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl DomainError {
    pub fn parse(field: &'static str, value: impl Into<String>) -> Self {
        Self::Parse {
            field,
            value: value.into(),
        }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound | Self::InvalidId(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_field_and_value() {
        let err = DomainError::parse("quantity", "ten");
        assert_eq!(err.to_string(), "invalid quantity: \"ten\" is not a valid number");
    }

    #[test]
    fn invalid_id_counts_as_not_found() {
        assert!(DomainError::invalid_id("abc").is_not_found());
        assert!(DomainError::not_found().is_not_found());
        assert!(!DomainError::parse("price", "x").is_not_found());
        assert!(!DomainError::unavailable("poisoned").is_not_found());
    }
}
