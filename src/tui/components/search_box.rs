//! # SearchBox Component
//!
//! Single-line text input for the search term.
//!
//! ## Responsibilities
//!
//! - Capture text input and paste (newlines are flattened to spaces)
//! - Handle editing (backspace, delete, cursor movement)
//! - Emit `Submit` on Enter. The text stays in the box so it can be refined.
//! - Show a placeholder while empty
//!
//! The buffer and cursor are internal state. The theme is a prop.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

pub const PLACEHOLDER: &str = "Type your search term and press Enter...";

/// Borders above and below the single text row.
pub const HEIGHT: u16 = 3;

/// High-level events emitted by the SearchBox
#[derive(Debug, Clone, PartialEq)]
pub enum SearchBoxEvent {
    /// User pressed Enter with the current text
    Submit(String),
    /// Text or cursor changed
    ContentChanged,
}

pub struct SearchBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Cursor as a byte offset into `buffer`, always on a char boundary
    cursor: usize,
    /// Styles (Prop)
    pub theme: Theme,
}

impl SearchBox {
    pub fn new(theme: Theme) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            theme,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn insert_str(&mut self, text: &str) {
        self.buffer.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Byte offset where the visible window starts and the cursor's column
    /// inside that window, so the cursor stays in view for long terms.
    fn visible_window(&self, width: u16) -> (usize, u16) {
        let width = width as usize;
        if width == 0 {
            return (self.cursor, 0);
        }
        let mut start = 0;
        while self.buffer[start..self.cursor].width() >= width {
            start = next_char_boundary(&self.buffer, start);
        }
        (start, self.buffer[start..self.cursor].width() as u16)
    }
}

impl Component for SearchBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border())
            .title("Search");
        let inner = block.inner(area);

        let line = if self.buffer.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, self.theme.placeholder()))
        } else {
            let (start, _) = self.visible_window(inner.width);
            Line::from(self.buffer[start..].to_string())
        };
        frame.render_widget(Paragraph::new(line).block(block), area);

        let (_, cursor_col) = self.visible_window(inner.width);
        if inner.width > 0 && inner.height > 0 {
            frame.set_cursor_position((inner.x + cursor_col, inner.y));
            if let Some(cell) = frame.buffer_mut().cell_mut((inner.x + cursor_col, inner.y)) {
                cell.set_style(self.theme.cursor());
            }
        }
    }
}

impl EventHandler for SearchBox {
    type Event = SearchBoxEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut tmp));
                Some(SearchBoxEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.insert_str(&flat);
                Some(SearchBoxEvent::ContentChanged)
            }
            TuiEvent::Backspace => (self.cursor > 0).then(|| {
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                SearchBoxEvent::ContentChanged
            }),
            TuiEvent::Delete => (self.cursor < self.buffer.len()).then(|| {
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                SearchBoxEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => (self.cursor > 0).then(|| {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                SearchBoxEvent::ContentChanged
            }),
            TuiEvent::CursorRight => (self.cursor < self.buffer.len()).then(|| {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                SearchBoxEvent::ContentChanged
            }),
            TuiEvent::CursorHome => (self.cursor != 0).then(|| {
                self.cursor = 0;
                SearchBoxEvent::ContentChanged
            }),
            TuiEvent::CursorEnd => (self.cursor != self.buffer.len()).then(|| {
                self.cursor = self.buffer.len();
                SearchBoxEvent::ContentChanged
            }),
            TuiEvent::Submit => Some(SearchBoxEvent::Submit(self.buffer.clone())),
            _ => None,
        }
    }
}

fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map(|c| pos + c.len_utf8())
        .unwrap_or(text.len())
}
