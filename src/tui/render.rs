//! Main rendering logic for TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::store::ProductStore;

use super::state::{AppState, PopupState};
use super::widgets::{
    render_footer, render_header, render_help, render_products, render_quit_confirm,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState, store: &ProductStore) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(3),    // Table
        Constraint::Length(1), // Footer
    ])
    .split(area);

    render_header(frame, chunks[0], state, store);
    let page = render_products(frame, chunks[1], state, store);
    render_footer(frame, chunks[2], state, page);

    // Popups last to overlay everything
    match &mut state.popup {
        PopupState::Help { scroll } => render_help(frame, area, scroll),
        PopupState::QuitConfirm => render_quit_confirm(frame, area),
        PopupState::None => {}
    }
}
