//! Footer line: page position, sort/filter indicators, key hints.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, InputMode};
use crate::tui::style::Styles;
use crate::view::common::PageInfo;
use crate::view::products::HEADERS;

const HINTS: &[(&str, &str)] = &[
    ("←→", "page"),
    ("s", "sort"),
    ("/", "filter"),
    ("^R", "reload"),
    ("?", "help"),
    ("q", "quit"),
];

/// Renders the footer bar.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, page: PageInfo) {
    let chunks = Layout::horizontal([Constraint::Min(30), Constraint::Length(52)]).split(area);

    frame.render_widget(Paragraph::new(position_text(state, page)), chunks[0]);

    let right = if let Some(msg) = &state.status_message {
        Line::styled(msg.clone(), Styles::warning())
    } else if state.input_mode == InputMode::Filter {
        Line::styled(format!("Filter: {}█", state.filter_input), Styles::filter_input())
    } else {
        let spans: Vec<Span> = HINTS
            .iter()
            .flat_map(|(key, label)| {
                vec![
                    Span::styled(format!(" {}", key), Styles::help_key()),
                    Span::styled(format!(" {}", label), Styles::help()),
                ]
            })
            .collect();
        Line::from(spans)
    };
    frame.render_widget(Paragraph::new(right), chunks[1]);
}

/// "Page 2/5  11-20 of 47  sort: Price▼  /acme"
fn position_text(state: &AppState, page: PageInfo) -> String {
    let tab = state.tab(state.current_tab);
    let mut text = format!(" Page {}/{}", page.page + 1, page.page_count);
    if page.total_rows > 0 {
        let last = (page.first_row + tab.page_size).min(page.total_rows);
        text.push_str(&format!(
            "  {}-{} of {}",
            page.first_row + 1,
            last,
            page.total_rows
        ));
    }
    if let Some(col) = tab.sort_column {
        let arrow = if tab.sort_ascending { "▲" } else { "▼" };
        let name = HEADERS.get(col).copied().unwrap_or("?");
        text.push_str(&format!("  sort: {}{}", name, arrow));
    }
    if let Some(filter) = &tab.filter {
        text.push_str(&format!("  /{}", filter));
    }
    text
}
