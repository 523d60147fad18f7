//! Error types for predicate translation.

use thiserror::Error;

/// The main error type for translation.
///
/// Any error aborts the whole call: the translator never hands back partial SQL.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// No rendering rule exists for a node under the active dialect.
    #[error("{dialect} dialect cannot translate `{construct}`")]
    Unsupported {
        dialect: &'static str,
        construct: String,
    },

    /// A constant's host type has no database type mapping.
    #[error("No database type mapping for host type '{host_type}'")]
    TypeResolution { host_type: String },

    /// The tree violates a structural invariant the front end guarantees.
    #[error("Malformed expression: {0}")]
    Malformed(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranslateError {
    /// Create an unsupported-construct error for the given dialect.
    pub fn unsupported(dialect: &'static str, construct: impl ToString) -> Self {
        Self::Unsupported {
            dialect,
            construct: construct.to_string(),
        }
    }

    /// Create a malformed-tree error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

/// Result type alias for translation.
pub type TranslateResult<T> = Result<T, TranslateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TranslateError::unsupported("access", "x.Millisecond");
        assert_eq!(err.to_string(), "access dialect cannot translate `x.Millisecond`");

        let err = TranslateError::malformed("Substring expects 1..=2 arguments, got 3");
        assert_eq!(
            err.to_string(),
            "Malformed expression: Substring expects 1..=2 arguments, got 3"
        );
    }
}
