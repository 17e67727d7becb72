//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    /// The generative backend failed: network error, timeout, or a non-2xx
    /// response.
    #[error("backend error: {0}")]
    Backend(String),

    /// The backend responded, but the output failed schema or consistency
    /// checks.
    #[error("validation error: {0}")]
    Validation(String),

    /// An internal reference (injury location, evidence id) does not match
    /// any known anatomical target. Non-fatal; callers skip and log.
    #[error("lookup error: {0}")]
    Lookup(String),

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_detail() {
        let err = DomainError::Validation("evidence id must be unique".into());
        assert_eq!(err.to_string(), "validation error: evidence id must be unique");
    }
}
