//! # arXiv Scout
//!
//! Interactive keyword search against the arXiv API.
//!
//! ## Architecture
//!
//! The pipeline is three components consumed in strict sequence:
//!
//! - [`query`]: builds the field-scoped arXiv query from a raw keyword
//! - [`client`]: delegates the query to a [`provider`] and absorbs failures
//! - [`render`]: formats the resulting papers for the terminal
//!
//! [`models`] holds the [`Paper`] record shared by all of them.

pub mod client;
pub mod models;
pub mod provider;
pub mod query;
pub mod render;

// Re-export commonly used types
pub use client::SearchClient;
pub use models::Paper;
pub use provider::{ArxivProvider, SearchProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
