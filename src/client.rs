//! Fail-soft search client over a [`SearchProvider`].

use std::sync::Arc;

use crate::models::Paper;
use crate::provider::SearchProvider;

/// Default result cap when the caller does not specify one.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Search client delegating to a provider.
///
/// Provider failures never propagate: they are logged at error level and
/// collapsed into an empty result list, so a failed search reads the same
/// as a search with no matches. Only the log stream tells the two cases
/// apart.
#[derive(Debug, Clone)]
pub struct SearchClient {
    provider: Arc<dyn SearchProvider>,
}

impl SearchClient {
    /// Create a client over the given provider.
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }

    /// Search with the default result cap of [`DEFAULT_MAX_RESULTS`].
    pub async fn search(&self, query: &str) -> Vec<Paper> {
        self.search_with_limit(query, DEFAULT_MAX_RESULTS).await
    }

    /// Search for papers matching `query`, capped at `max_results`, in
    /// the provider's relevance order.
    pub async fn search_with_limit(&self, query: &str, max_results: usize) -> Vec<Paper> {
        match self.provider.search(query, max_results).await {
            Ok(papers) => {
                if papers.is_empty() {
                    tracing::info!(query, "No relevant results found for the query");
                }
                papers
            }
            Err(e) => {
                tracing::error!(
                    query,
                    error = %e,
                    "Error occurred while searching {}",
                    self.provider.name()
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::mock::{make_paper, MockProvider};

    #[tokio::test]
    async fn test_provider_error_degrades_to_empty() {
        let provider = Arc::new(MockProvider::new());
        provider.set_error("connection refused");
        let client = SearchClient::new(provider);

        let papers = client.search("ti:\"quantum\"").await;
        assert!(papers.is_empty());
    }

    #[tokio::test]
    async fn test_zero_matches_return_empty() {
        let client = SearchClient::new(Arc::new(MockProvider::new()));

        let papers = client.search("ti:\"nothing\"").await;
        assert!(papers.is_empty());
    }

    #[tokio::test]
    async fn test_results_pass_through_in_order() {
        let provider = Arc::new(MockProvider::new());
        provider.set_papers(vec![
            make_paper("First", "http://example.com/1"),
            make_paper("Second", "http://example.com/2"),
        ]);
        let client = SearchClient::new(provider);

        let papers = client.search("ti:\"quantum\"").await;
        let titles: Vec<&str> = papers.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_limit_caps_results() {
        let provider = Arc::new(MockProvider::new());
        provider.set_papers(vec![
            make_paper("First", "http://example.com/1"),
            make_paper("Second", "http://example.com/2"),
            make_paper("Third", "http://example.com/3"),
        ]);
        let client = SearchClient::new(provider);

        let papers = client.search_with_limit("ti:\"quantum\"", 2).await;
        assert_eq!(papers.len(), 2);
    }
}
