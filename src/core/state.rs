//! # Application State
//!
//! Navigation state for docseek. Domain data only, no TUI types.
//!
//! ```text
//! App<'a>
//! ├── documents: &'a [Document]       // the loaded store, read-only
//! ├── query: Option<String>           // last executed search term
//! ├── results: Vec<&'a Document>      // last search result, borrowed
//! ├── selected: usize                 // index into results
//! └── status_message: String          // status bar text
//! ```
//!
//! Two implicit states: **Empty** (`results` is empty) and **HasResults**.
//! `selected < results.len()` holds whenever results are non-empty.
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::document::Document;

pub struct App<'a> {
    pub documents: &'a [Document],
    pub query: Option<String>,
    pub results: Vec<&'a Document>,
    pub selected: usize,
    pub status_message: String,
}

/// One row of the result list as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub path: String,
    pub is_selected: bool,
}

impl<'a> App<'a> {
    pub fn new(documents: &'a [Document]) -> Self {
        Self {
            documents,
            query: None,
            results: Vec::new(),
            selected: 0,
            status_message: format!("{} documents loaded", documents.len()),
        }
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// The document shown in the reader pane, if any.
    pub fn selected_document(&self) -> Option<&'a Document> {
        self.results.get(self.selected).copied()
    }

    /// Content of the selected document, or `""` when there are no results.
    pub fn selected_content(&self) -> &'a str {
        self.selected_document()
            .map(|doc| doc.content.as_str())
            .unwrap_or("")
    }

    pub fn result_rows(&self) -> Vec<ResultRow> {
        self.results
            .iter()
            .enumerate()
            .map(|(i, doc)| ResultRow {
                path: doc.path_str().into_owned(),
                is_selected: i == self.selected,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_documents;

    #[test]
    fn test_app_new_defaults() {
        let docs = sample_documents();
        let app = App::new(&docs);
        assert!(app.query.is_none());
        assert!(!app.has_results());
        assert_eq!(app.selected, 0);
        assert_eq!(app.status_message, "2 documents loaded");
    }

    #[test]
    fn test_empty_state_output_surface() {
        let docs = sample_documents();
        let app = App::new(&docs);
        assert!(app.selected_document().is_none());
        assert_eq!(app.selected_content(), "");
        assert!(app.result_rows().is_empty());
    }

    #[test]
    fn test_result_rows_flag_selection() {
        let docs = sample_documents();
        let mut app = App::new(&docs);
        app.results = docs.iter().collect();
        app.selected = 1;

        let rows = app.result_rows();
        assert_eq!(
            rows,
            vec![
                ResultRow { path: "a/x.md".into(), is_selected: false },
                ResultRow { path: "b/y.md".into(), is_selected: true },
            ]
        );
        assert_eq!(app.selected_content(), "goodbye");
    }
}
