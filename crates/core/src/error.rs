//! Parse error model.

use thiserror::Error;

/// Result type used across the offerings parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error raised while turning a raw offerings document into the typed model.
///
/// Only the top-level variants ever cross the parser boundary. Item-level
/// and sub-document failures are built with the same type, logged, and then
/// turned into omission by the caller that owns the item.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was not valid JSON.
    #[error("invalid json: {0}")]
    InvalidJson(String),

    /// A required field was absent.
    #[error("missing field `{0}`")]
    MissingField(String),

    /// A field was present with the wrong JSON type.
    #[error("field `{field}` is not {expected}")]
    InvalidField { field: String, expected: &'static str },

    /// A sub-document (ui config, paywall, components) failed to decode.
    #[error("{document} could not be decoded: {reason}")]
    SubDocument { document: &'static str, reason: String },

    /// A package lookup by identifier found nothing.
    #[error("package `{0}` not found")]
    PackageNotFound(String),
}

impl ParseError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn invalid(field: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidField {
            field: field.into(),
            expected,
        }
    }

    pub fn sub_document(document: &'static str, reason: impl core::fmt::Display) -> Self {
        Self::SubDocument {
            document,
            reason: reason.to_string(),
        }
    }

    pub fn package_not_found(identifier: impl Into<String>) -> Self {
        Self::PackageNotFound(identifier.into())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidJson(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_field() {
        assert_eq!(
            ParseError::missing("current_offering_id").to_string(),
            "missing field `current_offering_id`"
        );
        assert_eq!(
            ParseError::invalid("offerings", "an array").to_string(),
            "field `offerings` is not an array"
        );
    }

    #[test]
    fn serde_errors_become_invalid_json() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        match ParseError::from(err) {
            ParseError::InvalidJson(_) => {}
            other => panic!("Expected InvalidJson, got {other:?}"),
        }
    }
}
