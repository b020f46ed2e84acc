//! # Result List Component
//!
//! Bordered list of matched paths with the selected row highlighted.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ResultListState` lives in `TuiState` (ratatui's `ListState` keeps the
//!   scroll offset between frames)
//! - `ResultList` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem, ListState, Padding, Paragraph};

use crate::core::state::ResultRow;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const NO_RESULTS: &str = "No results found.";

#[derive(Default)]
pub struct ResultListState {
    pub list_state: ListState,
}

pub struct ResultList<'a> {
    state: &'a mut ResultListState,
    rows: &'a [ResultRow],
    /// False until the first search has run
    searched: bool,
    theme: &'a Theme,
}

impl<'a> ResultList<'a> {
    pub fn new(
        state: &'a mut ResultListState,
        rows: &'a [ResultRow],
        searched: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            rows,
            searched,
            theme,
        }
    }
}

impl Component for ResultList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.searched {
            format!(" Results ({}) ", self.rows.len())
        } else {
            " Results ".to_string()
        };
        let block = Block::bordered()
            .border_style(self.theme.border())
            .title(title)
            .padding(Padding::horizontal(1));

        if self.rows.is_empty() {
            let message = if self.searched {
                NO_RESULTS
            } else {
                "Matches will appear here."
            };
            let empty = Paragraph::new(message)
                .style(self.theme.placeholder())
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            self.state.list_state.select(None);
            return;
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| {
                let style = if row.is_selected {
                    self.theme.selected_item()
                } else {
                    self.theme.item()
                };
                ListItem::new(Line::styled(row.path.clone(), style))
            })
            .collect();

        let selected = self.rows.iter().position(|row| row.is_selected);
        self.state.list_state.select(selected);

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rows(paths: &[&str], selected: usize) -> Vec<ResultRow> {
        paths
            .iter()
            .enumerate()
            .map(|(i, p)| ResultRow {
                path: p.to_string(),
                is_selected: i == selected,
            })
            .collect()
    }

    fn draw(rows: &[ResultRow], searched: bool, height: u16) -> (Terminal<TestBackend>, ResultListState) {
        let mut terminal = Terminal::new(TestBackend::new(40, height)).unwrap();
        let mut state = ResultListState::default();
        let theme = Theme::default();
        terminal
            .draw(|f| ResultList::new(&mut state, rows, searched, &theme).render(f, f.area()))
            .unwrap();
        (terminal, state)
    }

    #[test]
    fn test_render_before_search() {
        let (terminal, _) = draw(&[], false, 6);
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Matches will appear here."));
        assert!(!text.contains(NO_RESULTS));
    }

    #[test]
    fn test_render_no_results() {
        let (terminal, state) = draw(&[], true, 6);
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains(NO_RESULTS));
        assert!(text.contains("Results (0)"));
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_render_highlights_selected_row() {
        let rows = rows(&["a/x.md", "b/y.md"], 1);
        let (terminal, state) = draw(&rows, true, 6);
        let buffer = terminal.backend().buffer();
        let text = buffer_text(buffer);
        assert!(text.contains("a/x.md"));
        assert!(text.contains("b/y.md"));
        assert_eq!(state.list_state.selected(), Some(1));

        let theme = Theme::default();
        // Row 0 of the list sits below the top border; padding shifts x by 2
        assert_eq!(buffer[(2, 1)].fg, theme.item_fg);
        assert_eq!(buffer[(2, 2)].bg, theme.selected_bg);
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let paths: Vec<String> = (0..20).map(|i| format!("doc{i:02}.md")).collect();
        let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
        let rows = rows(&refs, 15);
        let (terminal, _) = draw(&rows, true, 6);
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("doc15.md"));
        assert!(!text.contains("doc00.md"));
    }
}
