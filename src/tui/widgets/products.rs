//! Product table widget for the category tabs.
//! Thin TUI wrapper over [`crate::view::products::build_products_view`].

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};

use crate::store::ProductStore;
use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::common::{PageInfo, TableViewModel};
use crate::view::products::build_products_view;

/// Renders the current tab's table and returns its page position for the
/// footer.
pub fn render_products(
    frame: &mut Frame,
    area: Rect,
    state: &mut AppState,
    store: &ProductStore,
) -> PageInfo {
    let category = state.current_tab;
    let vm = build_products_view(category, store.get(category), state.tab(category));

    // Persist the clamped page/selection so key handling continues from it
    let tab = state.tab_mut(category);
    tab.clamp(vm.page.total_rows);
    let selected = tab.selected;

    let mut block = Block::default()
        .title(vm.title.clone())
        .borders(Borders::ALL)
        .style(Styles::default());
    if let Some(notice) = &vm.notice {
        block = block.title_bottom(Line::styled(format!(" {} ", notice), Styles::error()));
    }

    frame.render_widget(Clear, area);

    if let Some(placeholder) = &vm.placeholder {
        let paragraph = Paragraph::new(placeholder.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Styles::dim())
            .block(block);
        frame.render_widget(paragraph, area);
        return vm.page;
    }

    let table = Table::new(body_rows(&vm), constraints(&vm))
        .header(header_row(&vm))
        .block(block)
        .column_spacing(1)
        .row_highlight_style(Styles::selected());

    let ratatui_state = &mut state.table_states[category.index()];
    ratatui_state.select(Some(selected));
    frame.render_stateful_widget(table, area, ratatui_state);
    vm.page
}

/// Header with sort indicator.
fn header_row(vm: &TableViewModel<usize>) -> Row<'static> {
    let headers: Vec<Span> = vm
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let indicator = if Some(i) == vm.sort_column {
                if vm.sort_ascending { "▲" } else { "▼" }
            } else {
                ""
            };
            Span::styled(format!("{}{}", h, indicator), Styles::table_header())
        })
        .collect();
    Row::new(headers).style(Styles::table_header()).height(1)
}

fn body_rows(vm: &TableViewModel<usize>) -> Vec<Row<'static>> {
    vm.rows
        .iter()
        .map(|vr| {
            // Badge background covers the whole cell
            let cells = vr.cells.iter().map(|c| match c.color {
                Some(tag) => Cell::from(format!(" {}", c.text)).style(Styles::from_tag(tag)),
                None => Cell::from(c.text.clone()),
            });
            Row::new(cells).style(Styles::default()).height(1)
        })
        .collect()
}

/// Fixed widths, except the last column which takes the remaining space.
fn constraints(vm: &TableViewModel<usize>) -> Vec<Constraint> {
    let last = vm.widths.len().saturating_sub(1);
    vm.widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            if i == last {
                Constraint::Fill(1)
            } else {
                Constraint::Length(w)
            }
        })
        .collect()
}
