//! arXiv search provider implementation.

use async_trait::async_trait;
use feed_rs::parser;
use reqwest::Client;
use std::time::Duration;

use crate::models::Paper;
use crate::provider::{ProviderError, SearchProvider};

/// Base URL for the arXiv API
const ARXIV_API_URL: &str = "http://export.arxiv.org/api/query";

/// arXiv search provider
///
/// Queries the arXiv Atom API sorted by relevance and maps feed entries
/// into [`Paper`] records.
#[derive(Debug, Clone)]
pub struct ArxivProvider {
    client: Client,
    base_url: String,
}

impl ArxivProvider {
    /// Create a new arXiv provider
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_base_url(ARXIV_API_URL)
    }

    /// Create a provider pointed at a custom API endpoint (for testing)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| {
                ProviderError::Network(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Parse an arXiv Atom feed entry into a Paper
    fn parse_entry(entry: &feed_rs::model::Entry) -> Result<Paper, ProviderError> {
        let title = entry
            .title
            .as_ref()
            .map(|t| t.content.clone())
            .unwrap_or_default();

        let authors = entry
            .authors
            .iter()
            .map(|a| a.name.clone())
            .collect::<Vec<_>>();

        // arXiv always stamps entries with a published date; a feed entry
        // without one is malformed.
        let published = entry.published.map(|d| d.date_naive()).ok_or_else(|| {
            ProviderError::Parse(format!("Entry {} has no published date", entry.id))
        })?;

        let categories = entry
            .categories
            .iter()
            .map(|c| c.term.clone())
            .collect::<Vec<_>>();

        Ok(Paper::new(title, entry.id.clone())
            .authors(authors)
            .published(published)
            .categories(categories))
    }
}

#[async_trait]
impl SearchProvider for ArxivProvider {
    fn name(&self) -> &str {
        "arXiv"
    }

    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Paper>, ProviderError> {
        let url = format!(
            "{}?search_query={}&max_results={}&sortBy=relevance&sortOrder=descending",
            self.base_url,
            urlencoding::encode(query),
            max_results
        );

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/atom+xml")
            .send()
            .await
            .map_err(|e| {
                ProviderError::Network(format!("Failed to fetch arXiv results: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(ProviderError::Api(format!(
                "arXiv API returned status: {}",
                response.status()
            )));
        }

        let bytes = response.bytes().await?;

        let feed = parser::parse(bytes.as_ref())
            .map_err(|e| ProviderError::Parse(format!("Failed to parse Atom feed: {}", e)))?;

        feed.entries.iter().map(Self::parse_entry).collect()
    }
}
