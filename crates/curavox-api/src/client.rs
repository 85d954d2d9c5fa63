//! Search client implementing the medicine search port.

use async_trait::async_trait;
use url::Url;

use curavox_core::domain::MedicineSummary;
use curavox_core::ports::{MedicineSearchPort, SearchPortError};

use crate::error::{ApiError, ApiResult};
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{ApiConfig, SearchEnvelope};

/// The production search client over reqwest.
pub type DefaultSearchClient = SearchClient<ReqwestBackend>;

/// Client for `GET {base}/api/medicine/search/{query}`.
///
/// Generic over the HTTP backend so tests can inject canned responses.
pub struct SearchClient<B: HttpBackend> {
    backend: B,
    base_url: Url,
}

impl DefaultSearchClient {
    /// Create a production client from configuration.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            backend: ReqwestBackend::new(config),
            base_url: config.base_url.clone(),
        }
    }
}

impl<B: HttpBackend> SearchClient<B> {
    /// Create a client over a custom backend.
    pub fn with_backend(backend: B, base_url: Url) -> Self {
        Self { backend, base_url }
    }

    /// Build the search URL for a query.
    ///
    /// The query lands as a single path segment, so reserved characters
    /// are percent-encoded by the URL library.
    fn search_url(&self, query: &str) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                ApiError::InvalidUrl(format!(
                    "base URL {} cannot take path segments",
                    self.base_url
                ))
            })?;
            segments.pop_if_empty();
            segments.extend(["api", "medicine", "search", query]);
        }
        Ok(url)
    }

    async fn run_search(&self, query: &str) -> ApiResult<Vec<MedicineSummary>> {
        let url = self.search_url(query)?;
        tracing::debug!(%url, "Searching backend");
        let envelope: SearchEnvelope = self.backend.get_json(&url).await?;
        envelope.into_medicines()
    }
}

/// Map internal errors to the port's error type at the boundary.
fn map_error(error: ApiError) -> SearchPortError {
    match error {
        ApiError::Rejected => SearchPortError::Rejected,
        ApiError::RequestFailed { .. } | ApiError::Network(_) => SearchPortError::Network {
            message: error.to_string(),
        },
        ApiError::InvalidResponse { .. } | ApiError::JsonParse(_) | ApiError::InvalidUrl(_) => {
            SearchPortError::InvalidResponse {
                message: error.to_string(),
            }
        }
    }
}

#[async_trait]
impl<B: HttpBackend> MedicineSearchPort for SearchClient<B> {
    async fn search(&self, query: &str) -> Result<Vec<MedicineSummary>, SearchPortError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        self.run_search(query).await.map_err(map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use serde_json::json;

    fn base() -> Url {
        Url::parse("http://localhost:5000").unwrap()
    }

    fn envelope_json() -> serde_json::Value {
        json!({
            "success": true,
            "data": {
                "medicines": [
                    { "name": "Aspirin", "genericName": "acetylsalicylic acid" }
                ]
            }
        })
    }

    #[test]
    fn search_url_has_the_expected_shape() {
        let client = SearchClient::with_backend(FakeBackend::new(), base());
        let url = client.search_url("aspirin").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/medicine/search/aspirin"
        );
    }

    #[test]
    fn search_url_percent_encodes_the_query() {
        let client = SearchClient::with_backend(FakeBackend::new(), base());
        let url = client.search_url("vitamin d").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/medicine/search/vitamin%20d"
        );
    }

    #[test]
    fn search_url_respects_a_base_path() {
        let prefixed = Url::parse("http://localhost:5000/v2/").unwrap();
        let client = SearchClient::with_backend(FakeBackend::new(), prefixed);
        let url = client.search_url("aspirin").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/v2/api/medicine/search/aspirin"
        );
    }

    #[tokio::test]
    async fn successful_search_returns_medicines() {
        let backend = FakeBackend::new().with_response("search/aspirin", envelope_json());
        let client = SearchClient::with_backend(backend, base());

        let results = client.search("aspirin").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Aspirin");
    }

    #[tokio::test]
    async fn empty_query_short_circuits_to_no_results() {
        let backend = FakeBackend::new();
        let client = SearchClient::with_backend(backend, base());

        let results = client.search("   ").await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn rejected_envelope_maps_to_rejected() {
        let backend =
            FakeBackend::new().with_response("search/aspirin", json!({ "success": false }));
        let client = SearchClient::with_backend(backend, base());

        let result = client.search("aspirin").await;
        assert!(matches!(result, Err(SearchPortError::Rejected)));
    }

    #[tokio::test]
    async fn http_failure_maps_to_network_error() {
        let backend = FakeBackend::new().failing_with(503);
        let client = SearchClient::with_backend(backend, base());

        let result = client.search("aspirin").await;
        match result {
            Err(SearchPortError::Network { message }) => assert!(message.contains("503")),
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_envelope_maps_to_invalid_response() {
        let backend =
            FakeBackend::new().with_response("search/aspirin", json!({ "success": true }));
        let client = SearchClient::with_backend(backend, base());

        let result = client.search("aspirin").await;
        assert!(matches!(
            result,
            Err(SearchPortError::InvalidResponse { .. })
        ));
    }
}
