//! Connection form state shared by the Insert, Load and Download pages.

use crate::commands::request::{DbConfigPayload, SaveConfigPayload};
use crate::enums::DatabaseEngineType;
use crate::shared::ValidationError;
use serde::{Deserialize, Serialize};

/// Database connection settings edited by the user.
///
/// Lives in page-local state only. Named profiles are stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub config_name: String,
    #[serde(default)]
    pub db_driver: DatabaseEngineType,
    #[serde(default)]
    pub db_host: String,
    #[serde(default)]
    pub db_name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub port: String,
    #[serde(default)]
    pub sqlite_file_path: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub is_connected: bool,
}

impl DatabaseConfig {
    /// Switch engine and pre-fill its default port.
    pub fn select_engine(&mut self, engine: DatabaseEngineType) {
        self.db_driver = engine;
        self.port = engine.default_port().to_string();
    }

    pub fn is_sqlite(&self) -> bool {
        self.db_driver.is_sqlite()
    }

    /// Checks done before `connect_to_database` is sent.
    pub fn validate_connection(&self) -> Result<(), ValidationError> {
        match self.db_driver {
            DatabaseEngineType::Undefined => Err(ValidationError::MissingEngine),
            DatabaseEngineType::Sqlite => {
                if self.sqlite_file_path.trim().is_empty() {
                    Err(ValidationError::MissingSqliteFile)
                } else {
                    Ok(())
                }
            }
            _ => {
                if self.db_host.trim().is_empty()
                    || self.port.trim().is_empty()
                    || self.username.trim().is_empty()
                {
                    Err(ValidationError::MissingConnectionFields)
                } else {
                    Ok(())
                }
            }
        }
    }

    pub fn to_connect_payload(&self) -> DbConfigPayload {
        DbConfigPayload {
            db_driver: self.db_driver,
            db_host: self.db_host.clone(),
            port: self.port.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            db_name: self.db_name.clone(),
            sqlite_file_path: self.sqlite_file_path.clone(),
        }
    }

    pub fn to_save_payload(&self, config_name: &str) -> Result<SaveConfigPayload, ValidationError> {
        let config_name = config_name.trim();
        if config_name.is_empty() {
            return Err(ValidationError::MissingConfigName);
        }
        Ok(SaveConfigPayload {
            config_name: config_name.to_string(),
            db_driver: self.db_driver,
            db_host: self.db_host.clone(),
            port: self.port.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            db_name: self.db_name.clone(),
            sqlite_file_path: self.sqlite_file_path.clone(),
        })
    }

    /// Copy a loaded profile into the form. The form is left disconnected.
    pub fn apply_saved(&mut self, saved: SaveConfigPayload) {
        *self = DatabaseConfig {
            config_name: saved.config_name,
            db_driver: saved.db_driver,
            db_host: saved.db_host,
            db_name: saved.db_name,
            password: saved.password,
            port: saved.port,
            sqlite_file_path: saved.sqlite_file_path,
            username: saved.username,
            is_connected: false,
        };
    }

    /// Short description for logs and toasts, never includes the password.
    pub fn target_label(&self) -> String {
        if self.is_sqlite() {
            self.sqlite_file_path.clone()
        } else if self.db_name.is_empty() {
            format!("{}:{}", self.db_host, self.port)
        } else {
            format!("{}:{}/{}", self.db_host, self.port, self.db_name)
        }
    }

    /// Mirror the connection the backend already holds. The profile name is
    /// kept since the backend does not know it.
    pub fn apply_active(&mut self, active: DbConfigPayload) {
        self.db_driver = active.db_driver;
        self.db_host = active.db_host;
        self.port = active.port;
        self.username = active.username;
        self.password = active.password;
        self.db_name = active.db_name;
        self.sqlite_file_path = active.sqlite_file_path;
        self.is_connected = true;
    }

    pub fn reset(&mut self) {
        *self = DatabaseConfig::default();
    }

    /// Form reset that leaves an open connection's settings in place, so
    /// later requests still name the engine the backend is connected to.
    pub fn reset_unless_connected(&mut self) {
        if !self.is_connected {
            self.reset();
        }
    }
}

/// A saved configuration name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
}

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network_config() -> DatabaseConfig {
        let mut config = DatabaseConfig::default();
        config.select_engine(DatabaseEngineType::Postgres);
        config.db_host = "localhost".into();
        config.username = "fileflow".into();
        config.db_name = "warehouse".into();
        config
    }

    #[test]
    fn select_engine_sets_default_port() {
        let mut config = DatabaseConfig::default();
        config.select_engine(DatabaseEngineType::MySql);
        assert_eq!(config.port, "3306");
        config.select_engine(DatabaseEngineType::Sqlite);
        assert_eq!(config.port, "");
        assert!(config.is_sqlite());
    }

    #[test]
    fn validation_depends_on_engine() {
        assert_eq!(
            DatabaseConfig::default().validate_connection(),
            Err(ValidationError::MissingEngine)
        );

        let mut config = network_config();
        assert_eq!(config.validate_connection(), Ok(()));
        config.port.clear();
        assert_eq!(
            config.validate_connection(),
            Err(ValidationError::MissingConnectionFields)
        );

        let mut sqlite = DatabaseConfig::default();
        sqlite.select_engine(DatabaseEngineType::Sqlite);
        assert_eq!(
            sqlite.validate_connection(),
            Err(ValidationError::MissingSqliteFile)
        );
        sqlite.sqlite_file_path = "/tmp/data.db".into();
        assert_eq!(sqlite.validate_connection(), Ok(()));
    }

    #[test]
    fn password_is_optional() {
        let config = network_config();
        assert!(config.password.is_empty());
        assert!(config.validate_connection().is_ok());
    }

    #[test]
    fn save_payload_requires_name() {
        let config = network_config();
        assert_eq!(
            config.to_save_payload("  "),
            Err(ValidationError::MissingConfigName)
        );
        let payload = config.to_save_payload(" prod ").unwrap();
        assert_eq!(payload.config_name, "prod");
        assert_eq!(payload.db_driver, DatabaseEngineType::Postgres);
        assert_eq!(payload.port, "5432");
    }

    #[test]
    fn apply_saved_disconnects() {
        let mut config = network_config();
        config.is_connected = true;
        let saved = network_config().to_save_payload("prod").unwrap();
        config.apply_saved(saved);
        assert!(!config.is_connected);
        assert_eq!(config.config_name, "prod");
        assert_eq!(config.db_host, "localhost");
    }

    #[test]
    fn target_label_hides_password() {
        let mut config = network_config();
        config.password = "secret".into();
        assert_eq!(config.target_label(), "localhost:5432/warehouse");
        assert!(!config.target_label().contains("secret"));
    }

    #[test]
    fn apply_active_marks_connected() {
        let mut config = DatabaseConfig {
            config_name: "local".into(),
            ..DatabaseConfig::default()
        };
        config.apply_active(network_config().to_connect_payload());
        assert!(config.is_connected);
        assert_eq!(config.config_name, "local");
        assert_eq!(config.db_driver, DatabaseEngineType::Postgres);
        assert_eq!(config.db_name, "warehouse");
    }

    #[test]
    fn reset_clears_everything() {
        let mut config = network_config();
        config.is_connected = true;
        config.reset();
        assert_eq!(config, DatabaseConfig::default());
    }

    #[test]
    fn reset_keeps_open_connection_settings() {
        let mut connected = network_config();
        connected.is_connected = true;
        connected.reset_unless_connected();
        assert!(connected.is_connected);
        assert_eq!(connected.db_driver, DatabaseEngineType::Postgres);
        assert_eq!(connected.db_host, "localhost");

        let mut idle = network_config();
        idle.reset_unless_connected();
        assert_eq!(idle, DatabaseConfig::default());
    }
}
