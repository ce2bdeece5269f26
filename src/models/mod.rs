//! Core data models for search results.

mod paper;

pub use paper::Paper;
