//! Help popup widget with keybindings and column descriptions.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;
use crate::view::common::ColorTag;

const KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / previous category"),
    ("1 2 3", "gloves, beanies, facemasks"),
    ("↑↓ / k j", "select row"),
    ("→← / n p", "next / previous page"),
    ("PgDn PgUp", "next / previous page"),
    ("Home End", "first / last page"),
    ("s", "sort by next column"),
    ("S", "clear sort (backend order)"),
    ("r", "reverse sort direction"),
    ("/", "filter rows (Enter keep, Esc clear)"),
    ("Ctrl+R / F5", "reload all categories"),
    ("?", "toggle this help"),
    ("q", "quit (asks for confirmation)"),
    ("Ctrl+C", "quit immediately"),
];

const COLUMNS: &[(&str, &str)] = &[
    ("ID", "product identifier"),
    ("Name", "product name"),
    ("Colors", "available colors, comma separated"),
    ("Price", "unit price, blank when unknown"),
    ("Manufacturer", "maker of the product"),
    ("Availability", "stock level reported by the manufacturer"),
];

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    // 60% width, 80% height, clamped
    let popup_width = (area.width * 60 / 100).clamp(40, 80);
    let popup_height = (area.height * 80 / 100).clamp(10, 34);

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let content = help_lines();
    let content_lines = content.len();

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let visible_height = chunks[0].height as usize;
    let max_scroll = content_lines.saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0))
        .style(Style::default().fg(Color::White));
    frame.render_widget(paragraph, chunks[0]);

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", *scroll + 1, max_scroll + 1)
    } else {
        String::new()
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("?", Style::default().fg(Color::Yellow)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" to close, ", Style::default().fg(Color::DarkGray)),
        Span::styled("↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(" to scroll", Style::default().fg(Color::DarkGray)),
        Span::styled(scroll_info, Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(footer, chunks[1]);
}

fn help_lines() -> Vec<Line<'static>> {
    let section = Style::default().fg(Color::Yellow);
    let mut lines = vec![Line::styled("Keys", section)];
    for (key, desc) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<16}", key), Styles::help_key()),
            Span::raw(*desc),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled("Columns", section));
    for (name, desc) in COLUMNS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<16}", name), Styles::help_key()),
            Span::raw(*desc),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled("Availability", section));
    for (tag, label) in [
        (ColorTag::Green, "INSTOCK"),
        (ColorTag::Amber, "LESSTHAN10"),
        (ColorTag::Red, "OUTOFSTOCK"),
    ] {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!(" {} ", label), Styles::from_tag(tag)),
        ]));
    }
    lines.push(Line::from(Span::styled(
        "  Please refresh: not reported yet, press Ctrl+R",
        Style::default().fg(Color::DarkGray),
    )));
    lines
}
