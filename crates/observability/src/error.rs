//! Error types for observability crate

use thiserror::Error;

/// Errors that can occur during observability initialization
#[derive(Error, Debug)]
pub enum ObservabilityError {
    /// A global subscriber is already set, or installing it failed
    #[error("Failed to initialize observability: {0}")]
    InitFailed(String),

    /// Configuration error (e.g. unparsable log filter)
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ObservabilityError::Config("bad filter".into());
        assert_eq!(err.to_string(), "Configuration error: bad filter");
        let err = ObservabilityError::InitFailed("already set".into());
        assert!(err.to_string().contains("already set"));
    }
}
