//! # Reader Component
//!
//! Shows the full content of the selected document in a scrollable pane.
//! Markdown files are rendered with styling, everything else as plain text.
//!
//! `ReaderState` persists the scroll offset in `TuiState`. The parent calls
//! `reset()` whenever the selection changes so each document opens at the top.
//! It also keeps the styled text of the shown document, so markdown parsing
//! and highlighting run once per selection rather than on every redraw.

use std::path::PathBuf;

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::text::Text;
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::document::Document;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::markdown;
use crate::tui::theme::Theme;

#[derive(Default)]
pub struct ReaderState {
    pub scroll_state: ScrollViewState,
    /// Wrapped height of the current document, from the last render
    content_height: u16,
    /// Visible rows, from the last render
    viewport_height: u16,
    /// Styled text of the document last shown, keyed by its path
    rendered: Option<(PathBuf, Text<'static>)>,
}

impl ReaderState {
    pub fn reset(&mut self) {
        self.scroll_state.scroll_to_top();
        self.rendered = None;
    }

    /// Path of the document whose styled text is cached, if any.
    pub fn rendered_path(&self) -> Option<&PathBuf> {
        self.rendered.as_ref().map(|(path, _)| path)
    }

    fn rendered_text(&mut self, document: &Document) -> &Text<'static> {
        if self
            .rendered
            .as_ref()
            .is_some_and(|(path, _)| *path != document.path)
        {
            self.rendered = None;
        }
        let (_, text) = self.rendered.get_or_insert_with(|| {
            debug!("Rendering {} for the reader", document.path.display());
            let text = if document.is_markdown() {
                markdown::render(&document.content)
            } else {
                markdown::plain(&document.content)
            };
            (document.path.clone(), text)
        });
        text
    }

    pub fn offset(&self) -> u16 {
        self.scroll_state.offset().y
    }

    /// Keep the offset inside the document so scrolling down never runs
    /// past the last line.
    fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position { x: current.x, y: max_y });
        }
    }
}

impl EventHandler for ReaderState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

pub struct Reader<'a> {
    state: &'a mut ReaderState,
    document: Option<&'a Document>,
    theme: &'a Theme,
}

impl<'a> Reader<'a> {
    pub fn new(state: &'a mut ReaderState, document: Option<&'a Document>, theme: &'a Theme) -> Self {
        Self {
            state,
            document,
            theme,
        }
    }
}

impl Component for Reader<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = match self.document {
            Some(doc) => format!(" {} ", doc.path.display()),
            None => " Reader ".to_string(),
        };
        let block = Block::bordered().border_style(self.theme.border()).title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(document) = self.document else {
            self.state.content_height = 0;
            let empty = Paragraph::new("Select a result to read it here.")
                .style(self.theme.placeholder())
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        };

        let text = self.state.rendered_text(document).clone();
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });

        // One column is kept free for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let content_height = paragraph.line_count(content_width).min(u16::MAX as usize) as u16;

        self.state.content_height = content_height;
        self.state.viewport_height = inner.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, content_height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}
