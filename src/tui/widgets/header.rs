//! Header widget showing app name, tabs, data source and clock.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Category;
use crate::store::{LoadStatus, ProductStore};
use crate::tui::state::AppState;
use crate::tui::style::Styles;

/// Renders the header bar.
pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState, store: &ProductStore) {
    let chunks = Layout::horizontal([
        Constraint::Length(12), // Name
        Constraint::Min(30),    // Tabs
        Constraint::Length(36), // Source
        Constraint::Length(10), // Clock
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(" stockview ").style(Styles::header()),
        chunks[0],
    );

    let tabs: Vec<Span> = Category::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, category)| {
            let style = if *category == state.current_tab {
                Styles::tab_active()
            } else {
                Styles::tab_inactive()
            };
            let (marker, marker_style) = load_marker(store.get(*category).status());
            vec![
                Span::styled(format!(" {}:", i + 1), Styles::dim()),
                Span::styled(category.label().to_string(), style),
                Span::styled(format!("{} ", marker), marker_style),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(tabs)).style(Styles::header()),
        chunks[1],
    );

    frame.render_widget(
        Paragraph::new(truncate_left(&state.source_label, chunks[2].width as usize))
            .style(Styles::header()),
        chunks[2],
    );

    let clock = Local::now().format(" %H:%M:%S").to_string();
    frame.render_widget(Paragraph::new(clock).style(Styles::header()), chunks[3]);
}

/// Short marker appended to a tab name.
fn load_marker(status: LoadStatus<'_>) -> (String, ratatui::style::Style) {
    match status {
        LoadStatus::Pending => ("…".to_string(), Styles::header()),
        LoadStatus::Loaded(n) => (format!("({})", n), Styles::header()),
        LoadStatus::Failed(_) => ("!".to_string(), Styles::error()),
    }
}

/// Keeps the tail of `text` (the interesting part of a URL or path).
fn truncate_left(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(1);
    let tail: String = text.chars().skip(len - keep).collect();
    format!("…{}", tail)
}
