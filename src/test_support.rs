//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::document::Document;

/// The two-document set used throughout the navigation scenarios.
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document::new("a/x.md", "hello world"),
        Document::new("b/y.md", "goodbye"),
    ]
}

/// Collects every cell symbol of a rendered test buffer into one string.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
