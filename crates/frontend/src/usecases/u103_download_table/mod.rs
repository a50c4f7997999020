//! Export database tables to delimited files.
//!
//! - api.rs: `download_table` call
//! - model.rs: table selection helpers
//! - view_model.rs: page state and commands
//! - view.rs: the page and its table picker

mod api;
pub mod model;
mod view;
mod view_model;

pub use view::DownloadPage;
pub use view_model::DownloadViewModel;
