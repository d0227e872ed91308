//! Student Helper Error Types
//!
//! Centralized error handling for the task pipeline and remote services.

use thiserror::Error;

/// Central error type for Student Helper
#[derive(Error, Debug)]
pub enum HelperError {
    /// Input rejected before any endpoint is tried. The message is user-facing.
    #[error("{0}")]
    Validation(String),

    #[error("{endpoint} request failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },

    #[error("{endpoint} returned an unusable response: {reason}")]
    Payload { endpoint: String, reason: String },

    #[error("{endpoint} timed out after {secs}s")]
    Timeout { endpoint: String, secs: u64 },

    #[error("{0} is not configured (missing API key)")]
    NotConfigured(String),

    #[error("No sentences long enough to work with")]
    EmptyInput,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lock poisoned: {0}")]
    Lock(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HelperError {
    pub(crate) fn http(endpoint: &str, source: reqwest::Error) -> Self {
        HelperError::Http {
            endpoint: endpoint.to_string(),
            source,
        }
    }

    pub(crate) fn payload(endpoint: &str, reason: impl Into<String>) -> Self {
        HelperError::Payload {
            endpoint: endpoint.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error is a validation failure meant to be shown as-is
    pub fn is_validation(&self) -> bool {
        matches!(self, HelperError::Validation(_))
    }
}

/// Result type alias for Student Helper operations
pub type HelperResult<T> = Result<T, HelperError>;

/// Helper to convert Mutex poison errors
impl<T> From<std::sync::PoisonError<T>> for HelperError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        HelperError::Lock(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = HelperError::Validation("Please enter a topic for your essay.".into());
        assert_eq!(err.to_string(), "Please enter a topic for your essay.");
        assert!(err.is_validation());
    }

    #[test]
    fn test_endpoint_errors_name_the_endpoint() {
        let err = HelperError::Status {
            endpoint: "LanguageTool".into(),
            status: 503,
        };
        assert_eq!(err.to_string(), "LanguageTool returned HTTP 503");
        assert!(!err.is_validation());

        let err = HelperError::payload("MyMemory", "missing translatedText");
        assert!(err.to_string().contains("MyMemory"));
    }
}
