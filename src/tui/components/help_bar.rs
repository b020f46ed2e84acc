//! # HelpBar Component
//!
//! One-line summary of the key bindings, shown at the bottom of the screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

/// (key, description) pairs in display order.
pub const BINDINGS: &[(&str, &str)] = &[
    ("tab", "next"),
    ("shift+tab", "prev"),
    ("enter", "run search"),
    ("↑/↓ pgup/pgdn", "scroll"),
    ("esc", "quit"),
];

pub struct HelpBar;

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Gray);
        let desc_style = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::with_capacity(BINDINGS.len() * 3);
        for (i, (key, desc)) in BINDINGS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" • ", desc_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {desc}"), desc_style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
