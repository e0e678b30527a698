//! Error Types

use thiserror::Error;

/// Result type alias for checkout operations
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Checkout error types
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Backend answered with a non-2xx status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Request never completed
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the expected contract
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The payment SDK rejected a call or reported a failure
    #[error("SDK error: {0}")]
    Sdk(String),

    /// The SDK script could not be loaded
    #[error("Script load failed: {0}")]
    ScriptLoad(String),

    /// A required page element is missing
    #[error("Mount point missing: {0}")]
    MountPoint(String),

    /// Order id that cannot stand as a single URL path segment
    #[error("Invalid order id: {0:?}")]
    InvalidOrderId(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CheckoutError {
    /// HTTP status code, if the backend produced one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            CheckoutError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CheckoutError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => CheckoutError::Status(status.as_u16()),
            None => CheckoutError::Network(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for CheckoutError {
    fn from(err: serde_json::Error) -> Self {
        CheckoutError::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_matches_page_text() {
        let err = CheckoutError::Status(500);
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert_eq!(err.status_code(), Some(500));
    }

    #[test]
    fn test_json_error_is_malformed_response() {
        let err: CheckoutError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, CheckoutError::MalformedResponse(_)));
        assert_eq!(err.status_code(), None);
    }
}
