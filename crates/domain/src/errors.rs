//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Wayfest.
///
/// `Validation` and `Rejected` carry text that is shown to the user as-is:
/// validation messages are produced locally before any request is issued,
/// rejection messages come verbatim from the server.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum WayfestError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Wayfest operations
pub type Result<T> = std::result::Result<T, WayfestError>;

impl WayfestError {
    /// Stable label for logging and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Rejected(_) => "rejected",
            Self::Network(_) => "network",
            Self::Decode(_) => "decode",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_text_is_verbatim() {
        let err = WayfestError::Rejected("Только организаторы могут добавлять события".into());
        assert_eq!(err.to_string(), "Только организаторы могут добавлять события");
    }

    #[test]
    fn network_errors_are_prefixed() {
        let err = WayfestError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(WayfestError::Validation(String::new()).label(), "validation");
        assert_eq!(WayfestError::Rejected(String::new()).label(), "rejected");
        assert_eq!(WayfestError::Network(String::new()).label(), "network");
    }
}
