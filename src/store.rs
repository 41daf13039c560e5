//! Per-category client state.

use chrono::{DateTime, Local};

use crate::model::{Category, ProductRecord};
use crate::provider::FetchError;

/// Load progress of one category, derived from [`CategoryState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoadStatus<'a> {
    /// No result applied yet.
    Pending,
    /// At least one successful fetch; carries the item count.
    Loaded(usize),
    /// The last fetch failed and nothing has been loaded.
    Failed(&'a FetchError),
}

/// Most recently fetched list of one category.
#[derive(Debug, Clone, Default)]
pub struct CategoryState {
    pub items: Vec<ProductRecord>,
    /// Distinguishes "never loaded" from "loaded empty".
    pub loaded: bool,
    /// Last fetch failure, cleared by the next success.
    pub error: Option<FetchError>,
    /// Local time of the last successful load.
    pub loaded_at: Option<DateTime<Local>>,
}

impl CategoryState {
    /// Applies a fetch result. A failure keeps the previous items.
    pub fn apply(&mut self, result: Result<Vec<ProductRecord>, FetchError>) {
        match result {
            Ok(items) => {
                self.items = items;
                self.loaded = true;
                self.error = None;
                self.loaded_at = Some(Local::now());
            }
            Err(e) => {
                self.error = Some(e);
            }
        }
    }

    pub fn status(&self) -> LoadStatus<'_> {
        if self.loaded {
            LoadStatus::Loaded(self.items.len())
        } else if let Some(e) = &self.error {
            LoadStatus::Failed(e)
        } else {
            LoadStatus::Pending
        }
    }
}

/// State of all three categories, indexed by [`Category`].
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    categories: [CategoryState; 3],
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: Category) -> &CategoryState {
        &self.categories[category.index()]
    }

    /// Applies a fetch result to exactly one category.
    pub fn apply(&mut self, category: Category, result: Result<Vec<ProductRecord>, FetchError>) {
        self.categories[category.index()].apply(result);
    }

    /// Returns every category to its initial empty, unloaded state.
    pub fn reset(&mut self) {
        self.categories = Default::default();
    }

    /// Number of categories that have loaded or failed.
    pub fn settled_count(&self) -> usize {
        self.categories
            .iter()
            .filter(|c| !matches!(c.status(), LoadStatus::Pending))
            .count()
    }
}
