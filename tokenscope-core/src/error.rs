//! Research Error Types
//!
//! Schema validation failures and per-token fetch failures.

use thiserror::Error;

/// Why a research payload was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("missing required field `{field}`")]
    Missing { field: &'static str },

    #[error("field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field `{field}` is not a valid URL: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("unknown sentiment `{0}`")]
    UnknownSentiment(String),
}

impl ValidationError {
    /// The offending field, if the error concerns one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::NotAnObject => None,
            ValidationError::Missing { field }
            | ValidationError::WrongType { field, .. }
            | ValidationError::InvalidUrl { field, .. } => Some(field),
            ValidationError::UnknownSentiment(_) => Some("sentiment"),
        }
    }
}

/// Why a single token failed to resolve
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never completed
    #[error("transport error: {0}")]
    Transport(String),

    /// The proxy answered with a non-success status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The body was not JSON
    #[error("unreadable body: {0}")]
    Body(String),

    /// The body was JSON but did not match the research schema
    #[error("invalid research payload: {0}")]
    Invalid(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!(ValidationError::NotAnObject.field(), None);
        assert_eq!(
            ValidationError::Missing { field: "id" }.field(),
            Some("id")
        );
        assert_eq!(
            ValidationError::UnknownSentiment("meh".to_string()).field(),
            Some("sentiment")
        );
    }

    #[test]
    fn test_fetch_error_from_validation() {
        let err: FetchError = ValidationError::Missing { field: "sentiment" }.into();
        assert_eq!(
            err.to_string(),
            "invalid research payload: missing required field `sentiment`"
        );
    }
}
