//! Internal error types for backend API operations.
//!
//! These errors stay inside `curavox-api` and are mapped to
//! [`SearchPortError`](curavox_core::ports::SearchPortError) at the port
//! boundary.

use thiserror::Error;

/// Result type alias for backend API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from the backend medicine API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed with an HTTP error status.
    #[error("API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The backend answered but the envelope was malformed or rejected.
    #[error("Invalid response from backend: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The backend explicitly reported failure (`success: false`).
    #[error("Backend rejected the search request")]
    Rejected,

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL construction error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_failed_message_names_status_and_url() {
        let error = ApiError::RequestFailed {
            status: 503,
            url: "http://localhost:5000/api/medicine/search/aspirin".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("/api/medicine/search/aspirin"));
    }

    #[test]
    fn invalid_response_message_carries_detail() {
        let error = ApiError::InvalidResponse {
            message: "missing 'data' field".to_string(),
        };
        assert!(error.to_string().contains("missing 'data' field"));
    }
}
