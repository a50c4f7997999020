use super::request::{DbConfigPayload, SaveConfigPayload};
use crate::domain::database_config::Item;
use serde::{Deserialize, Serialize};

/// A table offered for export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComboItem {
    pub value: String,
    pub label: String,
}

/// Details shown on the About page, as returned by `get_about_info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub repository: String,
}

/// `get_all_database_configs_name` returns a JSON array encoded as a string.
pub fn parse_config_names(raw: &str) -> Result<Vec<Item>, serde_json::Error> {
    let names: Vec<String> = serde_json::from_str(raw)?;
    Ok(names.into_iter().map(Item::new).collect())
}

/// `load_database_config*` return the profile encoded as a string.
pub fn parse_saved_config(raw: &str) -> Result<SaveConfigPayload, serde_json::Error> {
    serde_json::from_str(raw)
}

/// `is_connected` answers with an empty string or `"false"` when no
/// connection is open, otherwise with the active settings encoded as JSON.
pub fn parse_active_connection(raw: &str) -> Result<Option<DbConfigPayload>, serde_json::Error> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "false" {
        return Ok(None);
    }
    serde_json::from_str(raw).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::DatabaseEngineType;

    #[test]
    fn config_names_become_items() {
        let items = parse_config_names(r#"["local","prod"]"#).unwrap();
        assert_eq!(items, vec![Item::new("local"), Item::new("prod")]);
        assert!(parse_config_names("[]").unwrap().is_empty());
        assert!(parse_config_names("not json").is_err());
    }

    #[test]
    fn active_connection() {
        assert_eq!(parse_active_connection("").unwrap(), None);
        assert_eq!(parse_active_connection("false").unwrap(), None);

        let raw = r#"{"db_driver":"postgres","db_host":"db","port":"5432","username":"u","password":"p","db_name":"n","sqlite_file_path":""}"#;
        let active = parse_active_connection(raw).unwrap().unwrap();
        assert_eq!(active.db_driver, DatabaseEngineType::Postgres);
        assert_eq!(active.db_name, "n");
    }

    #[test]
    fn table_list_items() {
        let items: Vec<ComboItem> =
            serde_json::from_str(r#"[{"value":"users","label":"users"}]"#).unwrap();
        assert_eq!(items[0].value, "users");
    }

    #[test]
    fn about_info_fields_are_optional() {
        let info: AboutInfo = serde_json::from_str(r#"{"version":"1.0.1"}"#).unwrap();
        assert_eq!(info.version, "1.0.1");
        assert!(info.authors.is_empty());
    }
}
