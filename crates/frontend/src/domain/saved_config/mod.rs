//! Named connection profiles stored by the backend.

pub mod api;
pub mod ui;
pub mod view_model;

pub use view_model::SavedConfigsViewModel;
