//! stockview - Warehouse inventory viewer library.
//!
//! Fetches the product lists of three categories (gloves, beanies,
//! facemasks) from an inventory API and presents them as paginated,
//! color-coded tables:
//! - `provider` - HTTP and fixture data sources
//! - `loader` - one concurrent fetch per category, results delivered as they arrive
//! - `store` - most recent list and load status per category
//! - `view` - UI-agnostic table view models
//! - `tui` - interactive terminal frontend

pub mod config;
pub mod loader;
pub mod model;
pub mod provider;
pub mod store;
pub mod table;
pub mod tui;
pub mod view;
