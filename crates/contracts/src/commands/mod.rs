//! Names and payloads of the commands exposed by the backend process.
//!
//! The backend owns these contracts. Field names and nesting here must match
//! it exactly; top-level argument keys use Tauri's camelCase convention while
//! nested structs keep their snake_case fields.

pub mod request;
pub mod response;

pub const CONNECT_TO_DATABASE: &str = "connect_to_database";
pub const DISCONNECT_FROM_DATABASE: &str = "disconnect_from_database";
pub const IS_CONNECTED: &str = "is_connected";
pub const INSERT_CSV_DATA: &str = "insert_csv_data";
pub const DOWNLOAD_TABLE: &str = "download_table";
pub const GENERATE_LOAD_DATA_SQL: &str = "generate_load_data_sql";
pub const SAVE_DATABASE_CONFIG: &str = "save_database_config";
pub const LOAD_DATABASE_CONFIG: &str = "load_database_config";
pub const LOAD_DATABASE_CONFIG_BY_NAME: &str = "load_database_config_by_name";
pub const DELETE_DATABASE_CONFIG: &str = "delete_database_config";
pub const GET_ALL_DATABASE_CONFIGS_NAME: &str = "get_all_database_configs_name";
pub const GET_TABLE_LIST: &str = "get_table_list";
pub const GET_SIZE_OF_FILE: &str = "get_size_of_file";
pub const GET_ABOUT_INFO: &str = "get_about_info";
