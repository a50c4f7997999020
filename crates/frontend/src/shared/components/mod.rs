pub mod activity_log;
pub mod file_picker;
pub mod loader;
pub mod page_header;
pub mod sql_viewer;
pub mod ui;
