//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Single-threaded and synchronous. Each pass draws (only if something
//! changed), blocks up to 500ms for one event, then drains every pending
//! event before the next draw. Each event is fully applied to the state
//! before the next one is read.

mod component;
pub mod components;
mod event;
pub mod markdown;
pub mod theme;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::document::Document;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{ReaderState, ResultListState, SearchBox, SearchBoxEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::theme::Theme;

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_box: SearchBox,
    pub result_list: ResultListState,
    pub reader: ReaderState,
    pub theme: Theme,
    /// Root directory as shown in the title bar
    pub root_label: String,
}

impl TuiState {
    pub fn new(root_label: String, theme: Theme) -> Self {
        Self {
            search_box: SearchBox::new(theme),
            result_list: ResultListState::default(),
            reader: ReaderState::default(),
            theme,
            root_label,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Disambiguation makes Esc arrive immediately and Shift+Tab distinct
        // on terminals that support it; others ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste
        );
    }
}

/// Run the interactive session until the user quits.
pub fn run(documents: &[Document], config: &ResolvedConfig) -> io::Result<()> {
    let mut app = App::new(documents);
    let mut tui = TuiState::new(
        config.root.display().to_string(),
        Theme::from_config(&config.theme),
    );

    let mut terminal = ratatui::init();
    let result = {
        let _terminal_mode_guard = TerminalModeGuard::new();
        event_loop(&mut terminal, &mut app, &mut tui)
    };
    ratatui::restore();

    info!("Session ended");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;

        let mut next = Some(first_event);
        while let Some(event) = next {
            if handle_event(app, tui, &event) == Effect::Quit {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}

/// Route one terminal event: core actions go through `update`, everything
/// else to the component that owns it.
fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    let action = match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Next => Some(Action::Advance),
        TuiEvent::Prev => Some(Action::Retreat),
        TuiEvent::Resize => None,
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.reader.handle_event(event);
            None
        }
        _ => match tui.search_box.handle_event(event) {
            Some(SearchBoxEvent::Submit(text)) => Some(Action::Search(text)),
            Some(SearchBoxEvent::ContentChanged) | None => None,
        },
    };

    let Some(action) = action else {
        return Effect::None;
    };
    let effect = update(app, action);
    if effect == Effect::SelectionChanged {
        debug!("Selection changed to {} of {}", app.selected, app.results.len());
        tui.reader.reset();
    }
    effect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_documents;

    fn type_text(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_event(app, tui, &TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_then_enter_runs_search() {
        let docs = sample_documents();
        let mut app = App::new(&docs);
        let mut tui = TuiState::new("notes".into(), Theme::default());

        type_text(&mut app, &mut tui, "hello");
        assert!(app.query.is_none());

        let effect = handle_event(&mut app, &mut tui, &TuiEvent::Submit);
        assert_eq!(effect, Effect::SelectionChanged);
        assert_eq!(app.query.as_deref(), Some("hello"));
        assert_eq!(app.selected_content(), "hello world");
    }

    #[test]
    fn test_tab_cycles_results() {
        let docs = sample_documents();
        let mut app = App::new(&docs);
        let mut tui = TuiState::new("notes".into(), Theme::default());
        type_text(&mut app, &mut tui, ".md");
        handle_event(&mut app, &mut tui, &TuiEvent::Submit);

        handle_event(&mut app, &mut tui, &TuiEvent::Next);
        assert_eq!(app.selected, 1);
        handle_event(&mut app, &mut tui, &TuiEvent::Next);
        assert_eq!(app.selected, 0);
        handle_event(&mut app, &mut tui, &TuiEvent::Prev);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_navigation_resets_reader_scroll() {
        let docs = sample_documents();
        let mut app = App::new(&docs);
        let mut tui = TuiState::new("notes".into(), Theme::default());
        type_text(&mut app, &mut tui, ".md");
        handle_event(&mut app, &mut tui, &TuiEvent::Submit);

        tui.reader.scroll_state.scroll_down();
        assert_eq!(tui.reader.offset(), 1);
        handle_event(&mut app, &mut tui, &TuiEvent::Next);
        assert_eq!(tui.reader.offset(), 0);
    }

    #[test]
    fn test_quit_and_blank_submit() {
        let docs = sample_documents();
        let mut app = App::new(&docs);
        let mut tui = TuiState::new("notes".into(), Theme::default());

        assert_eq!(handle_event(&mut app, &mut tui, &TuiEvent::Submit), Effect::None);
        assert!(app.query.is_none());
        assert_eq!(handle_event(&mut app, &mut tui, &TuiEvent::Quit), Effect::Quit);
    }
}
