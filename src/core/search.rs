//! # Search
//!
//! Literal, case-sensitive substring filter over document paths and contents.
//! Results keep the input order. There is no ranking.

use crate::core::document::Document;

/// Whether `term` occurs in the document's path or content.
///
/// An empty term occurs in every string, so it matches every document.
pub fn matches(document: &Document, term: &str) -> bool {
    document.path_str().contains(term) || document.content.contains(term)
}

/// Returns the documents matching `term`, in their original order.
pub fn search<'a>(documents: &'a [Document], term: &str) -> Vec<&'a Document> {
    documents.iter().filter(|doc| matches(doc, term)).collect()
}
