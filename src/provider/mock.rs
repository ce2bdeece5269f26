//! Mock provider for testing purposes.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Mutex;

use crate::models::Paper;
use crate::provider::{ProviderError, SearchProvider};

/// A mock provider that returns predefined responses.
#[derive(Debug, Default)]
pub struct MockProvider {
    response: Mutex<Response>,
}

#[derive(Debug, Default)]
enum Response {
    #[default]
    Empty,
    Papers(Vec<Paper>),
    Error(String),
}

impl MockProvider {
    /// Create a new mock provider; searches return no matches until a
    /// response is configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return these papers from subsequent searches.
    pub fn set_papers(&self, papers: Vec<Paper>) {
        let mut guard = self.response.lock().unwrap();
        *guard = Response::Papers(papers);
    }

    /// Fail subsequent searches with an API error carrying this message.
    pub fn set_error(&self, message: impl Into<String>) {
        let mut guard = self.response.lock().unwrap();
        *guard = Response::Error(message.into());
    }
}

#[async_trait]
impl SearchProvider for MockProvider {
    fn name(&self) -> &str {
        "Mock Provider"
    }

    async fn search(
        &self,
        _query: &str,
        max_results: usize,
    ) -> Result<Vec<Paper>, ProviderError> {
        let guard = self.response.lock().unwrap();
        match &*guard {
            Response::Empty => Ok(Vec::new()),
            Response::Papers(papers) => Ok(papers.iter().take(max_results).cloned().collect()),
            Response::Error(msg) => Err(ProviderError::Api(msg.clone())),
        }
    }
}

/// Helper to build a fully-populated paper for tests.
pub fn make_paper(title: &str, entry_id: &str) -> Paper {
    Paper::new(title, entry_id)
        .authors(vec!["A. One".to_string(), "B. Two".to_string()])
        .published(NaiveDate::from_ymd_opt(2021, 1, 2).expect("valid date"))
        .categories(vec!["quant-ph".to_string()])
}
