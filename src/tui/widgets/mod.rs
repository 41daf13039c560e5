//! TUI widgets for stockview.

mod footer;
mod header;
mod help;
mod products;
mod quit_confirm;

pub use footer::render_footer;
pub use header::render_header;
pub use help::render_help;
pub use products::render_products;
pub use quit_confirm::render_quit_confirm;
