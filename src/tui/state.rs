//! Application state management.

use ratatui::widgets::TableState as RatatuiTableState;

use crate::model::Category;
use crate::table::{CategoryTabState, DEFAULT_PAGE_SIZE};

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Filter,
}

/// Active popup state. Only one popup can be open at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopupState {
    /// No popup is open.
    #[default]
    None,
    /// Help popup with scroll offset.
    Help { scroll: usize },
    /// Quit confirmation dialog.
    QuitConfirm,
}

impl PopupState {
    /// Returns true if any popup is open (excluding None).
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Main application state (everything except fetched data).
#[derive(Debug)]
pub struct AppState {
    /// Current active tab.
    pub current_tab: Category,
    /// Input mode.
    pub input_mode: InputMode,
    /// Filter input buffer.
    pub filter_input: String,
    /// Active popup.
    pub popup: PopupState,
    /// Per-category page/sort/filter/selection, indexed by `Category::index`.
    pub tabs: [CategoryTabState; 3],
    /// Ratatui table state per category (row highlight).
    pub table_states: [RatatuiTableState; 3],
    /// Data source label shown in the header.
    pub source_label: String,
    /// Temporary status message shown in the footer.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Category::default(), DEFAULT_PAGE_SIZE, String::new())
    }
}

impl AppState {
    pub fn new(initial_tab: Category, page_size: usize, source_label: String) -> Self {
        Self {
            current_tab: initial_tab,
            input_mode: InputMode::Normal,
            filter_input: String::new(),
            popup: PopupState::None,
            tabs: std::array::from_fn(|_| CategoryTabState::new(page_size)),
            table_states: Default::default(),
            source_label,
            status_message: None,
        }
    }

    pub fn tab(&self, category: Category) -> &CategoryTabState {
        &self.tabs[category.index()]
    }

    pub fn tab_mut(&mut self, category: Category) -> &mut CategoryTabState {
        &mut self.tabs[category.index()]
    }

    /// State of the visible tab.
    pub fn current(&mut self) -> &mut CategoryTabState {
        let tab = self.current_tab;
        self.tab_mut(tab)
    }

    /// Switches to a new tab and syncs the filter input buffer from the
    /// new tab's filter. Tab states are never discarded.
    pub fn switch_tab(&mut self, new_tab: Category) {
        if self.current_tab != new_tab {
            self.current_tab = new_tab;
            self.filter_input = self.tab(new_tab).filter.clone().unwrap_or_default();
        }
    }
}
