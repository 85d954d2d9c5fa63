//! Medicine search port - read-only lookups against the backend.
//!
//! Implemented by the reqwest client in `curavox-api`; consumed by the
//! action bridge in `curavox-dispatch`. Error variants are deliberately
//! coarse: the bridge never surfaces raw error text to the user, so all a
//! handler needs is "did it work".

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::MedicineSummary;

/// Errors returned by [`MedicineSearchPort`] operations.
#[derive(Debug, Error)]
pub enum SearchPortError {
    /// Transport failure (connection refused, timeout, DNS, non-2xx).
    #[error("Medicine search request failed: {message}")]
    Network {
        /// Human-readable description.
        message: String,
    },

    /// The backend answered but the payload did not decode.
    #[error("Medicine search returned an invalid response: {message}")]
    InvalidResponse {
        /// Human-readable description.
        message: String,
    },

    /// The backend answered with `success: false`.
    #[error("The medicine service rejected the query")]
    Rejected,
}

/// Port trait for the backend medicine search endpoint.
#[async_trait]
pub trait MedicineSearchPort: Send + Sync {
    /// Search medicines by free-text query.
    ///
    /// The query is an opaque key - typically a medicine name extracted
    /// from a voice command. An empty result list is not an error.
    async fn search(&self, query: &str) -> Result<Vec<MedicineSummary>, SearchPortError>;
}
