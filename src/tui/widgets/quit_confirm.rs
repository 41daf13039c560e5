//! Quit confirmation popup widget.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Renders a centered quit confirmation popup.
pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let popup_width = (area.width * 50 / 100).clamp(36, 56);
    let popup_height = area.height.clamp(6, 7);

    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Exit stockview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key = Style::default().fg(Color::Yellow);
    let dim = Style::default().fg(Color::DarkGray);
    let content = vec![
        Line::from(Span::styled("Quit stockview?", Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", key),
            Span::styled(" / ", dim),
            Span::styled("y", key),
            Span::styled(" quit   ", dim),
            Span::styled("Esc", key),
            Span::styled(" / ", dim),
            Span::styled("n", key),
            Span::styled(" stay", dim),
        ]),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}
