mod connection_form;
mod database_form;
mod select_engine;
mod sqlite_form;

pub use connection_form::{ConnectButton, ConnectionForm};
pub use database_form::DatabaseForm;
pub use select_engine::SelectEngine;
pub use sqlite_form::SqliteForm;
