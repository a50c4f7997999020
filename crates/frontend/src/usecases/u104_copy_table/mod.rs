//! Copy a table between two databases.
//!
//! The backend has no copy command yet; the page validates the request and
//! reports that copying is unavailable.

pub mod model;
mod view;

pub use view::CopyPage;
