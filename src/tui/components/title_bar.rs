//! # TitleBar Component
//!
//! Top line showing the document root and the current status message.
//!
//! Stateless: everything comes in as props, so it is trivial to test.
//!
//! 1. **Status message**: `"docseek (~/notes, 42 docs) | 3 matches for \"rust\""`
//! 2. **Default**: `"docseek (~/notes, 42 docs)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Root directory the documents were loaded from
    pub root: String,
    /// Number of loaded documents
    pub document_count: usize,
    /// Status message (e.g., "3 matches for \"rust\"")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(root: String, document_count: usize, status_message: String) -> Self {
        Self {
            root,
            document_count,
            status_message,
        }
    }

    fn text(&self) -> String {
        let docs = if self.document_count == 1 { "doc" } else { "docs" };
        let head = format!("docseek ({}, {} {})", self.root, self.document_count, docs);
        if self.status_message.is_empty() {
            head
        } else {
            format!("{} | {}", head, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
