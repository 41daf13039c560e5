//! Fixture provider - loads product lists from JSON files (offline mode).

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use super::{FetchError, ProductProvider, decode_products};
use crate::model::{Category, ProductRecord};

/// Reads `<dir>/<category>.json` for each category, e.g. `gloves.json`.
///
/// File contents follow the same rules as an HTTP body: `null` or an empty
/// file is an empty list, anything but an array of objects is malformed.
#[derive(Debug, Clone)]
pub struct FixtureProvider {
    dir: PathBuf,
}

impl FixtureProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the fixture file backing `category`.
    pub fn file_path(&self, category: Category) -> PathBuf {
        self.dir.join(format!("{}.json", category.slug()))
    }
}

#[async_trait]
impl ProductProvider for FixtureProvider {
    async fn fetch(&self, category: Category) -> Result<Vec<ProductRecord>, FetchError> {
        let path = category.endpoint_path();
        let file = self.file_path(category);
        let body = tokio::fs::read(&file)
            .await
            .map_err(|e| FetchError::failed(path, format!("{}: {}", file.display(), e)))?;
        let products = decode_products(path, &body)?;
        debug!(file = %file.display(), products = products.len(), "fixture loaded");
        Ok(products)
    }

    fn describe(&self) -> String {
        format!("fixtures:{}", self.dir.display())
    }
}
