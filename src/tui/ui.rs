use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::search_box;
use crate::tui::components::{HelpBar, Reader, ResultList, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Draws the whole screen:
///
/// ```text
/// ┌ title ──────────────────────────────────┐
/// │ search box                              │
/// │ results (1/3)   │ reader (2/3)          │
/// │ help                                    │
/// └─────────────────────────────────────────┘
/// ```
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Fill, Length};
    let layout = Layout::vertical([Length(1), Length(search_box::HEIGHT), Fill(1), Length(1)]);
    let [title_area, search_area, main_area, help_area] = layout.areas(frame.area());
    let [results_area, reader_area] =
        Layout::horizontal([Fill(1), Fill(2)]).areas(main_area);

    TitleBar::new(
        tui.root_label.clone(),
        app.documents.len(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    tui.search_box.render(frame, search_area);

    let rows = app.result_rows();
    ResultList::new(&mut tui.result_list, &rows, app.query.is_some(), &tui.theme)
        .render(frame, results_area);

    Reader::new(&mut tui.reader, app.selected_document(), &tui.theme).render(frame, reader_area);

    HelpBar.render(frame, help_area);
}
