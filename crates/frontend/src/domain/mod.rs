pub mod connection;
pub mod saved_config;
