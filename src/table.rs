//! Per-tab table state: sorting, filtering, pagination, selection.

use std::cmp::Ordering;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort key types for table columns.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Float(f64),
    String(String),
    /// Missing value; sorts before everything else.
    Empty,
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (SortKey::Float(a), SortKey::Float(b)) => a.partial_cmp(b),
            (SortKey::String(a), SortKey::String(b)) => a.partial_cmp(b),
            (SortKey::Empty, SortKey::Empty) => Some(Ordering::Equal),
            (SortKey::Empty, _) => Some(Ordering::Less),
            (_, SortKey::Empty) => Some(Ordering::Greater),
            _ => None,
        }
    }
}

/// View state of one category tab. Survives tab switches and data reloads.
#[derive(Debug, Clone)]
pub struct CategoryTabState {
    /// Zero-based page index. May point past the end until clamped.
    pub page: usize,
    pub page_size: usize,
    /// Selected row index within the current page.
    pub selected: usize,
    /// Sort column index; `None` keeps backend order.
    pub sort_column: Option<usize>,
    /// Sort direction (true = ascending).
    pub sort_ascending: bool,
    /// Filter string.
    pub filter: Option<String>,
}

impl Default for CategoryTabState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CategoryTabState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            selected: 0,
            sort_column: None,
            sort_ascending: true,
            filter: None,
        }
    }

    /// Number of pages needed for `total_rows`; an empty table has one page.
    pub fn page_count(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size).max(1)
    }

    /// Clamps page and selection into range for `total_rows`.
    pub fn clamp(&mut self, total_rows: usize) {
        let last_page = self.page_count(total_rows) - 1;
        if self.page > last_page {
            self.page = last_page;
        }
        let rows_on_page = self.page_range(total_rows).len();
        if rows_on_page == 0 {
            self.selected = 0;
        } else if self.selected >= rows_on_page {
            self.selected = rows_on_page - 1;
        }
    }

    /// Row index range of the current page (page clamped, not mutated).
    pub fn page_range(&self, total_rows: usize) -> std::ops::Range<usize> {
        let page = self.page.min(self.page_count(total_rows) - 1);
        let start = (page * self.page_size).min(total_rows);
        let end = (start + self.page_size).min(total_rows);
        start..end
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
        self.selected = 0;
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
        self.selected = 0;
    }

    pub fn first_page(&mut self) {
        self.page = 0;
        self.selected = 0;
    }

    /// Jumps past the end; the next `clamp` lands on the last page.
    pub fn last_page(&mut self) {
        self.page = usize::MAX;
        self.selected = 0;
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_down(&mut self) {
        self.selected = self.selected.saturating_add(1);
    }

    /// Cycles through columns; after the last column the table goes back
    /// to backend order.
    pub fn next_sort_column(&mut self, column_count: usize) {
        self.sort_column = match self.sort_column {
            None if column_count > 0 => Some(0),
            Some(col) if col + 1 < column_count => Some(col + 1),
            _ => None,
        };
        self.first_page();
    }

    pub fn clear_sort(&mut self) {
        self.sort_column = None;
        self.sort_ascending = true;
        self.first_page();
    }

    pub fn toggle_sort_direction(&mut self) {
        self.sort_ascending = !self.sort_ascending;
        self.first_page();
    }

    /// Sets filter string; an empty string clears it.
    pub fn set_filter(&mut self, filter: Option<String>) {
        self.filter = filter.filter(|f| !f.is_empty());
        self.first_page();
    }
}
