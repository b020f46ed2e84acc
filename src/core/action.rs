//! # Actions
//!
//! Everything the user can do becomes an `Action`.
//! Presses Enter? That's `Action::Search(text)`. Presses Tab? `Action::Advance`.
//!
//! The `update()` function takes the current state and an action, applies the
//! transition and returns an `Effect` for the adapter. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! | Action   | Empty        | HasResults                    |
//! |----------|--------------|-------------------------------|
//! | Search   | run search   | run search, selection → 0     |
//! | Advance  | no-op        | selection + 1 (wraps)         |
//! | Retreat  | no-op        | selection - 1 (wraps)         |
//! | Quit     | quit         | quit                          |
//!
//! A search whose term is blank after trimming is ignored in both states.

use log::{debug, info};

use crate::core::search::search;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Run a search with the given input text.
    Search(String),
    /// Select the next result, wrapping to the first.
    Advance,
    /// Select the previous result, wrapping to the last.
    Retreat,
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing visible changed.
    None,
    /// The selected document (or the whole result list) changed.
    SelectionChanged,
    Quit,
}

pub fn update(app: &mut App<'_>, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Search(text) => {
            let term = text.trim();
            if term.is_empty() {
                return Effect::None;
            }

            app.results = search(app.documents, term);
            app.selected = 0;
            app.query = Some(term.to_string());
            app.status_message = match app.results.len() {
                0 => "No results found.".to_string(),
                1 => format!("1 match for \"{term}\""),
                n => format!("{n} matches for \"{term}\""),
            };
            info!(
                "Search {:?}: {} of {} documents matched",
                term,
                app.results.len(),
                app.documents.len()
            );
            Effect::SelectionChanged
        }
        Action::Advance => {
            let len = app.results.len();
            if len == 0 {
                return Effect::None;
            }
            app.selected = (app.selected + 1) % len;
            Effect::SelectionChanged
        }
        Action::Retreat => {
            let len = app.results.len();
            if len == 0 {
                return Effect::None;
            }
            app.selected = (app.selected + len - 1) % len;
            Effect::SelectionChanged
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::Document;
    use crate::test_support::sample_documents;

    fn numbered_documents(n: usize) -> Vec<Document> {
        (0..n)
            .map(|i| Document::new(format!("doc{i}.md"), "common text"))
            .collect()
    }

    #[test]
    fn test_search_scenario_hello() {
        let docs = sample_documents();
        let mut app = App::new(&docs);

        let effect = update(&mut app, Action::Search("hello".into()));

        assert_eq!(effect, Effect::SelectionChanged);
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].path_str(), "a/x.md");
        assert_eq!(app.selected, 0);
        assert_eq!(app.selected_content(), "hello world");
        assert_eq!(app.query.as_deref(), Some("hello"));
    }

    #[test]
    fn test_search_scenario_no_match() {
        let docs = sample_documents();
        let mut app = App::new(&docs);
        update(&mut app, Action::Search("hello".into()));

        update(&mut app, Action::Search("zzz-not-present".into()));
        assert!(app.results.is_empty());
        assert_eq!(app.status_message, "No results found.");
        assert_eq!(app.selected_content(), "");

        assert_eq!(update(&mut app, Action::Advance), Effect::None);
        assert_eq!(update(&mut app, Action::Retreat), Effect::None);
        assert_eq!(app.selected, 0);
        assert!(app.results.is_empty());
    }

    #[test]
    fn test_blank_search_is_noop() {
        let docs = numbered_documents(3);
        let mut app = App::new(&docs);
        update(&mut app, Action::Search("common".into()));
        update(&mut app, Action::Advance);
        let status_before = app.status_message.clone();

        for blank in ["", "   ", "\t\n "] {
            let effect = update(&mut app, Action::Search(blank.into()));
            assert_eq!(effect, Effect::None);
            assert_eq!(app.results.len(), 3);
            assert_eq!(app.selected, 1);
            assert_eq!(app.query.as_deref(), Some("common"));
            assert_eq!(app.status_message, status_before);
        }
    }

    #[test]
    fn test_blank_search_after_empty_result_is_noop() {
        let docs = sample_documents();
        let mut app = App::new(&docs);
        update(&mut app, Action::Search("zzz-not-present".into()));

        update(&mut app, Action::Search("  ".into()));
        assert!(app.results.is_empty());
        assert_eq!(app.query.as_deref(), Some("zzz-not-present"));
    }

    #[test]
    fn test_search_uses_trimmed_term() {
        let docs = sample_documents();
        let mut app = App::new(&docs);
        update(&mut app, Action::Search("  hello \n".into()));
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.query.as_deref(), Some("hello"));
    }

    #[test]
    fn test_new_search_resets_selection() {
        let docs = numbered_documents(4);
        let mut app = App::new(&docs);
        update(&mut app, Action::Search("common".into()));
        update(&mut app, Action::Advance);
        update(&mut app, Action::Advance);
        assert_eq!(app.selected, 2);

        update(&mut app, Action::Search("doc".into()));
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_advance_and_retreat_wrap() {
        let docs = numbered_documents(3);
        let mut app = App::new(&docs);
        update(&mut app, Action::Search("common".into()));

        update(&mut app, Action::Retreat);
        assert_eq!(app.selected, 2);
        update(&mut app, Action::Advance);
        assert_eq!(app.selected, 0);
        update(&mut app, Action::Advance);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_advance_retreat_are_inverse() {
        for len in 1..=5 {
            let docs = numbered_documents(len);
            let mut app = App::new(&docs);
            update(&mut app, Action::Search("common".into()));
            for start in 0..len {
                app.selected = start;
                update(&mut app, Action::Advance);
                update(&mut app, Action::Retreat);
                assert_eq!(app.selected, start);

                update(&mut app, Action::Retreat);
                update(&mut app, Action::Advance);
                assert_eq!(app.selected, start);
            }
        }
    }

    #[test]
    fn test_advance_len_times_returns_to_start() {
        for len in 1..=5 {
            let docs = numbered_documents(len);
            let mut app = App::new(&docs);
            update(&mut app, Action::Search("common".into()));
            for start in 0..len {
                app.selected = start;
                for _ in 0..len {
                    update(&mut app, Action::Advance);
                    assert!(app.selected < len);
                }
                assert_eq!(app.selected, start);
            }
        }
    }

    #[test]
    fn test_single_result_navigation_stays_put() {
        let docs = sample_documents();
        let mut app = App::new(&docs);
        update(&mut app, Action::Search("goodbye".into()));

        assert_eq!(update(&mut app, Action::Advance), Effect::SelectionChanged);
        assert_eq!(app.selected, 0);
        update(&mut app, Action::Retreat);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_navigation_before_any_search_is_noop() {
        let docs = sample_documents();
        let mut app = App::new(&docs);
        assert_eq!(update(&mut app, Action::Advance), Effect::None);
        assert_eq!(update(&mut app, Action::Retreat), Effect::None);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_quit_from_any_state() {
        let docs = sample_documents();
        let mut app = App::new(&docs);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);

        update(&mut app, Action::Search("hello".into()));
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert_eq!(app.results.len(), 1);
    }

    #[test]
    fn test_status_message_counts_matches() {
        let docs = numbered_documents(3);
        let mut app = App::new(&docs);
        update(&mut app, Action::Search("doc1".into()));
        assert_eq!(app.status_message, "1 match for \"doc1\"");
        update(&mut app, Action::Search("common".into()));
        assert_eq!(app.status_message, "3 matches for \"common\"");
    }
}
