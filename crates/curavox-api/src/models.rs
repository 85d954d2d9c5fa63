//! Wire types for the backend search envelope.
//!
//! The backend wraps every search result in the same envelope:
//!
//! ```json
//! { "success": true, "data": { "medicines": [ ... ] } }
//! ```
//!
//! Medicine entries deserialize directly into
//! [`MedicineSummary`](curavox_core::domain::MedicineSummary); only the
//! envelope around them is private to this crate.

use serde::Deserialize;

use curavox_core::domain::MedicineSummary;

use crate::error::{ApiError, ApiResult};

/// Configuration for the backend client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. `http://localhost:5000`.
    pub base_url: url::Url,
    /// Maximum retry attempts for transient failures.
    pub max_retries: u8,
    /// Base delay for exponential backoff between retries.
    pub retry_base_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: url::Url::parse("http://localhost:5000")
                .expect("default base URL is valid"),
            max_retries: 2,
            retry_base_delay_ms: 250,
        }
    }
}

/// Top-level response envelope.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    /// Whether the backend accepted the request.
    pub success: bool,
    /// Payload, present on success.
    #[serde(default)]
    pub data: Option<SearchData>,
}

/// Payload of a successful search.
#[derive(Debug, Deserialize)]
pub struct SearchData {
    /// Matching medicines, best match first.
    #[serde(default)]
    pub medicines: Vec<MedicineSummary>,
}

impl SearchEnvelope {
    /// Unwrap the envelope into the medicine list.
    ///
    /// `success: false` and a missing `data` field are both treated as
    /// errors; an empty `medicines` array is a valid no-results answer.
    pub fn into_medicines(self) -> ApiResult<Vec<MedicineSummary>> {
        if !self.success {
            return Err(ApiError::Rejected);
        }
        let data = self.data.ok_or_else(|| ApiError::InvalidResponse {
            message: "envelope has success: true but no data".to_string(),
        })?;
        Ok(data.medicines)
    }
}
