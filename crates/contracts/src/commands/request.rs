use crate::enums::{DatabaseEngineType, InsertionMode, SeparatorType};
use crate::shared::ValidationError;
use serde::{Deserialize, Serialize};

/// Connection settings as the backend's `DbConfig` expects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbConfigPayload {
    pub db_driver: DatabaseEngineType,
    pub db_host: String,
    pub port: String,
    pub username: String,
    pub password: String,
    pub db_name: String,
    pub sqlite_file_path: String,
}

/// `connect_to_database` arguments.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectArgs {
    pub config: DbConfigPayload,
}

/// A named connection profile. Also the shape returned when loading one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveConfigPayload {
    pub config_name: String,
    #[serde(default)]
    pub db_driver: DatabaseEngineType,
    #[serde(default)]
    pub db_host: String,
    #[serde(default)]
    pub port: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub db_name: String,
    #[serde(default)]
    pub sqlite_file_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SaveConfigArgs {
    pub save: SaveConfigPayload,
}

/// Arguments of every command that addresses a saved profile by name.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigNameArgs {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertConfigPayload {
    pub table_name: String,
    pub file_path: String,
    pub db_driver: DatabaseEngineType,
    pub mode: InsertionMode,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsertCsvArgs {
    pub csv: InsertConfigPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadConfigPayload {
    pub table_name_list: Vec<String>,
    pub location: String,
    pub separator: SeparatorType,
}

impl DownloadConfigPayload {
    pub fn new(
        tables: Vec<String>,
        location: &str,
        separator: SeparatorType,
    ) -> Result<Self, ValidationError> {
        if tables.is_empty() {
            return Err(ValidationError::MissingTables);
        }
        if location.trim().is_empty() {
            return Err(ValidationError::MissingLocation);
        }
        Ok(Self {
            table_name_list: tables,
            location: location.to_string(),
            separator,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DownloadArgs {
    pub config: DownloadConfigPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateLoadDataPayload {
    pub file_path: String,
    pub table_name: String,
    pub db_driver: DatabaseEngineType,
}

impl GenerateLoadDataPayload {
    pub fn new(
        file_path: &str,
        table_name: &str,
        db_driver: DatabaseEngineType,
    ) -> Result<Self, ValidationError> {
        if file_path.trim().is_empty() || table_name.trim().is_empty() || !db_driver.is_defined() {
            return Err(ValidationError::IncompleteForm);
        }
        Ok(Self {
            file_path: file_path.to_string(),
            table_name: table_name.trim().to_string(),
            db_driver,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateLoadDataArgs {
    pub load: GenerateLoadDataPayload,
}

/// `get_size_of_file` takes a bare argument, so the key is camelCase.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSizeArgs {
    pub file_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn connect_args_shape() {
        let args = ConnectArgs {
            config: DbConfigPayload {
                db_driver: DatabaseEngineType::MySql,
                db_host: "localhost".into(),
                port: "3306".into(),
                username: "root".into(),
                password: "pw".into(),
                db_name: "shop".into(),
                sqlite_file_path: String::new(),
            },
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({
                "config": {
                    "db_driver": "mysql",
                    "db_host": "localhost",
                    "port": "3306",
                    "username": "root",
                    "password": "pw",
                    "db_name": "shop",
                    "sqlite_file_path": ""
                }
            })
        );
    }

    #[test]
    fn insert_args_shape() {
        let args = InsertCsvArgs {
            csv: InsertConfigPayload {
                table_name: "sales".into(),
                file_path: "/data/sales.csv".into(),
                db_driver: DatabaseEngineType::Sqlite,
                mode: InsertionMode::Optimized,
            },
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({
                "csv": {
                    "table_name": "sales",
                    "file_path": "/data/sales.csv",
                    "db_driver": "sqlite",
                    "mode": "optimized"
                }
            })
        );
    }

    #[test]
    fn download_payload_validation_and_shape() {
        assert_eq!(
            DownloadConfigPayload::new(vec![], "/tmp", SeparatorType::Comma),
            Err(ValidationError::MissingTables)
        );
        assert_eq!(
            DownloadConfigPayload::new(vec!["a".into()], " ", SeparatorType::Comma),
            Err(ValidationError::MissingLocation)
        );

        let payload =
            DownloadConfigPayload::new(vec!["a".into(), "b".into()], "/tmp", SeparatorType::Pipe)
                .unwrap();
        assert_eq!(
            serde_json::to_value(DownloadArgs { config: payload }).unwrap(),
            json!({
                "config": {
                    "table_name_list": ["a", "b"],
                    "location": "/tmp",
                    "separator": "pipe"
                }
            })
        );
    }

    #[test]
    fn load_data_payload_requires_every_field() {
        assert_eq!(
            GenerateLoadDataPayload::new("", "t", DatabaseEngineType::MySql),
            Err(ValidationError::IncompleteForm)
        );
        assert_eq!(
            GenerateLoadDataPayload::new("/a.csv", "t", DatabaseEngineType::Undefined),
            Err(ValidationError::IncompleteForm)
        );
        let payload =
            GenerateLoadDataPayload::new("/a.csv", " t ", DatabaseEngineType::Postgres).unwrap();
        assert_eq!(
            serde_json::to_value(GenerateLoadDataArgs { load: payload }).unwrap(),
            json!({"load": {"file_path": "/a.csv", "table_name": "t", "db_driver": "postgres"}})
        );
    }

    #[test]
    fn file_size_args_use_camel_case() {
        let args = FileSizeArgs {
            file_path: "/a.csv".into(),
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({"filePath": "/a.csv"})
        );
    }

    #[test]
    fn saved_profile_tolerates_missing_fields() {
        let saved: SaveConfigPayload =
            serde_json::from_str(r#"{"config_name":"local","db_driver":""}"#).unwrap();
        assert_eq!(saved.db_driver, DatabaseEngineType::Undefined);
        assert!(saved.db_host.is_empty());
    }
}
