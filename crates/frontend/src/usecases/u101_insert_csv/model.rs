use crate::shared::path_utils::normalized_table_name;
use contracts::commands::request::InsertConfigPayload;
use contracts::domain::database_config::DatabaseConfig;
use contracts::enums::InsertionMode;
use contracts::shared::ValidationError;

/// One `insert_csv_data` call per selected file.
///
/// A single file goes into the table name typed by the user. With several
/// files each one goes into the table named after the file.
pub fn plan_inserts(
    files: &[String],
    table_name: &str,
    config: &DatabaseConfig,
    mode: InsertionMode,
) -> Result<Vec<InsertConfigPayload>, ValidationError> {
    if files.is_empty() {
        return Err(ValidationError::MissingFile);
    }
    if !config.is_connected {
        return Err(ValidationError::NotConnected);
    }
    if !config.db_driver.is_defined() {
        return Err(ValidationError::MissingEngine);
    }

    let payload = |file_path: &str, table_name: String| InsertConfigPayload {
        table_name,
        file_path: file_path.to_string(),
        db_driver: config.db_driver,
        mode,
    };

    if let [single] = files {
        let table_name = table_name.trim();
        if table_name.is_empty() {
            return Err(ValidationError::MissingTableName);
        }
        return Ok(vec![payload(single.as_str(), table_name.to_string())]);
    }

    files
        .iter()
        .map(|path| {
            let table_name = normalized_table_name(path);
            if table_name.is_empty() {
                Err(ValidationError::MissingTableName)
            } else {
                Ok(payload(path.as_str(), table_name))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::DatabaseEngineType;

    fn connected() -> DatabaseConfig {
        let mut config = DatabaseConfig::default();
        config.select_engine(DatabaseEngineType::MySql);
        config.is_connected = true;
        config
    }

    #[test]
    fn test_requires_file_then_connection() {
        assert_eq!(
            plan_inserts(&[], "t", &connected(), InsertionMode::Fast),
            Err(ValidationError::MissingFile)
        );
        let files = vec!["/a/users.csv".to_string()];
        assert_eq!(
            plan_inserts(&files, "users", &DatabaseConfig::default(), InsertionMode::Fast),
            Err(ValidationError::NotConnected)
        );
    }

    #[test]
    fn test_requires_engine_after_reset() {
        let files = vec!["/a/users.csv".to_string()];
        let mut config = connected();
        config.reset();
        config.is_connected = true;
        assert_eq!(
            plan_inserts(&files, "users", &config, InsertionMode::Fast),
            Err(ValidationError::MissingEngine)
        );

        let mut kept = connected();
        kept.reset_unless_connected();
        let plan = plan_inserts(&files, "users", &kept, InsertionMode::Fast).unwrap();
        assert_eq!(plan[0].db_driver, DatabaseEngineType::MySql);
    }

    #[test]
    fn test_single_file_uses_edited_name() {
        let files = vec!["/a/users.csv".to_string()];
        let plan = plan_inserts(&files, " customers ", &connected(), InsertionMode::Optimized)
            .unwrap();
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].table_name, "customers");
        assert_eq!(plan[0].file_path, "/a/users.csv");
        assert_eq!(plan[0].db_driver, DatabaseEngineType::MySql);
        assert_eq!(plan[0].mode, InsertionMode::Optimized);

        assert_eq!(
            plan_inserts(&files, "  ", &connected(), InsertionMode::Fast),
            Err(ValidationError::MissingTableName)
        );
    }

    #[test]
    fn test_many_files_use_their_own_names() {
        let files = vec!["/a/Users.csv".to_string(), "/a/order-lines.csv".to_string()];
        let plan = plan_inserts(&files, "ignored", &connected(), InsertionMode::Fast).unwrap();
        let names: Vec<&str> = plan.iter().map(|p| p.table_name.as_str()).collect();
        assert_eq!(names, vec!["users", "orderlines"]);
    }

    #[test]
    fn test_many_files_reject_unnamed_file() {
        let files = vec!["/a/users.csv".to_string(), "/a/---.csv".to_string()];
        assert_eq!(
            plan_inserts(&files, "", &connected(), InsertionMode::Fast),
            Err(ValidationError::MissingTableName)
        );
    }
}
