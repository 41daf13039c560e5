//! Terminal User Interface for stockview.
//!
//! One tab per product category, each showing a paginated, sortable and
//! filterable table. Category lists are fetched in the background and
//! appear as soon as each one arrives.

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use event::Event;
pub use state::{AppState, InputMode, PopupState};
