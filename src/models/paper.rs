//! Paper model representing a single arXiv search result.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A paper returned by the search provider.
///
/// The provider owns these records; this crate only reads them. Field
/// order mirrors the rendered listing: title, authors, published date,
/// categories, entry URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title
    pub title: String,

    /// Author names, in the order the provider returned them
    pub authors: Vec<String>,

    /// Publication date
    pub published: NaiveDate,

    /// arXiv category codes, in feed order
    pub categories: Vec<String>,

    /// Entry identifier (abstract page URL)
    pub entry_id: String,
}

impl Paper {
    /// Create a paper with the required fields; the rest are filled in
    /// via the consuming setters.
    pub fn new(title: impl Into<String>, entry_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            authors: Vec::new(),
            published: NaiveDate::default(),
            categories: Vec::new(),
            entry_id: entry_id.into(),
        }
    }

    /// Set authors
    pub fn authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    /// Set publication date
    pub fn published(mut self, published: NaiveDate) -> Self {
        self.published = published;
        self
    }

    /// Set categories
    pub fn categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }
}
