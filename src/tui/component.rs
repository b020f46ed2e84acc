use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// A piece of the screen that draws itself into an area.
///
/// Props live in struct fields; persistent state is borrowed as `&mut State`
/// so a component can update scroll offsets or list selection while drawing,
/// the same way ratatui's `StatefulWidget` does.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// The higher-level event this component reports to its parent.
    type Event;

    /// Handle a `TuiEvent`, optionally emitting an `Event` for the parent.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
