//! Search provider plumbing.
//!
//! [`SearchProvider`] is the seam between the pipeline and the external
//! search service: a single relevance-ordered search operation. Any
//! backend satisfying the contract is interchangeable; the crate ships
//! [`ArxivProvider`] for the real arXiv API and [`MockProvider`] for
//! tests.

mod arxiv;
pub mod mock;

pub use arxiv::ArxivProvider;
pub use mock::MockProvider;

use async_trait::async_trait;

use crate::models::Paper;

/// A search backend exposing one operation.
#[async_trait]
pub trait SearchProvider: Send + Sync + std::fmt::Debug {
    /// Human-readable name of the backing service
    fn name(&self) -> &str;

    /// Search for papers matching `query`, capped at `max_results`, in
    /// the provider's relevance order. The returned list is fully
    /// materialized, possibly empty.
    async fn search(&self, query: &str, max_results: usize)
        -> Result<Vec<Paper>, ProviderError>;
}

/// Errors that can occur when talking to a search provider
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Network or HTTP transport error
    #[error("Network error: {0}")]
    Network(String),

    /// Feed parsing error
    #[error("Parse error: {0}")]
    Parse(String),

    /// API error from the provider
    #[error("API error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProviderError::Api("arXiv API returned status: 503".to_string());
        assert_eq!(err.to_string(), "API error: arXiv API returned status: 503");
    }

    #[tokio::test]
    async fn test_reqwest_error_converts_to_network() {
        // Port 0 is never connectable, so this fails at the transport layer.
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:0/")
            .send()
            .await
            .unwrap_err();

        let converted = ProviderError::from(err);
        assert!(matches!(converted, ProviderError::Network(_)));
    }
}
