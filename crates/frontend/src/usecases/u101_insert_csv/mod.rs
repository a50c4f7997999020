//! Insert CSV files into a database table.
//!
//! - api.rs: `insert_csv_data` call
//! - model.rs: pure planning of the insert calls
//! - view_model.rs: page state and commands
//! - view.rs: the page

mod api;
pub mod model;
mod view;
mod view_model;

pub use view::InsertPage;
pub use view_model::InsertViewModel;
