//! Build a bulk-load statement (`LOAD DATA INFILE` or `COPY`) for a CSV file.

mod api;
mod view;

pub use view::LoadDataSqlPage;
