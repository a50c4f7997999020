pub mod database_config;
