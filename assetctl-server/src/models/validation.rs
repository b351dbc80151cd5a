//! Validation error types

use std::fmt;

/// Validation error for request payloads
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Request body could not be parsed into the expected shape
    Body { reason: String },

    /// Query string could not be parsed into the expected filter
    Query { reason: String },

    /// Invalid enum variant
    InvalidVariant { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body { reason } => write!(f, "invalid request body: {}", reason),
            Self::Query { reason } => write!(f, "invalid query parameters: {}", reason),
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidVariant {
            field: "result",
            value: "MAYBE".into(),
        };
        assert_eq!(err.to_string(), "invalid result value: 'MAYBE'");
    }

    #[test]
    fn query_error_display() {
        let err = ValidationError::Query {
            reason: "testbed_id: invalid digit".into(),
        };
        assert!(err.to_string().starts_with("invalid query parameters"));
    }
}
