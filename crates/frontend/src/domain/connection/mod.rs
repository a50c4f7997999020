//! Database connection shared by every page that talks to a database.
//!
//! - api.rs: backend calls (connect, disconnect, status, tables)
//! - view_model.rs: form state plus connect/disconnect commands
//! - ui/: engine select, network and SQLite forms, the combined form

pub mod api;
pub mod ui;
pub mod view_model;

pub use view_model::ConnectionViewModel;
