//! UI-agnostic view models.
//!
//! [`products::build_products_view`] turns a category's state and tab state
//! into a [`common::TableViewModel`]. The TUI then maps the view model to
//! ratatui widgets for rendering.

pub mod common;
pub mod products;
