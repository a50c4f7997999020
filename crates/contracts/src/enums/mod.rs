pub mod database_engine_type;
pub mod insertion_mode;
pub mod separator_type;

pub use database_engine_type::DatabaseEngineType;
pub use insertion_mode::InsertionMode;
pub use separator_type::SeparatorType;
