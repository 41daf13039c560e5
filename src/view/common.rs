//! UI-agnostic view model types.
//!
//! These types represent presentation data without any dependency on a specific
//! rendering framework. The TUI maps them to ratatui styles.

/// Background color tag of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTag {
    Green,
    Amber,
    Red,
}

/// A single table cell with an optional color tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewCell {
    pub text: String,
    /// `None` = no tag, inherit row style.
    pub color: Option<ColorTag>,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self { text, color: None }
    }

    pub fn tagged(text: String, color: Option<ColorTag>) -> Self {
        Self { text, color }
    }
}

/// One table row, parameterized by entity ID type.
#[derive(Debug, Clone)]
pub struct ViewRow<Id> {
    pub id: Id,
    pub cells: Vec<ViewCell>,
}

/// Position of the visible page within the full row set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageInfo {
    /// Zero-based page index, already clamped into range.
    pub page: usize,
    /// Total number of pages; at least 1.
    pub page_count: usize,
    /// Rows after filtering, across all pages.
    pub total_rows: usize,
    /// Zero-based index of the first visible row within `total_rows`.
    pub first_row: usize,
}

/// Complete table ready to be rendered by any frontend.
#[derive(Debug, Clone)]
pub struct TableViewModel<Id> {
    pub title: String,
    pub headers: Vec<String>,
    pub widths: Vec<u16>,
    /// Rows of the visible page only.
    pub rows: Vec<ViewRow<Id>>,
    pub sort_column: Option<usize>,
    pub sort_ascending: bool,
    pub page: PageInfo,
    /// Message shown instead of rows when there is nothing to display.
    pub placeholder: Option<String>,
    /// Extra status line (e.g. last fetch error).
    pub notice: Option<String>,
}
