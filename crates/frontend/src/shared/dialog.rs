//! Host file and directory pickers (`@tauri-apps/plugin-dialog`).

use crate::shared::bridge::BridgeError;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "dialog"], js_name = open, catch)]
    async fn tauri_dialog_open(options: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

pub const CSV_FILTER: DialogFilter = DialogFilter {
    name: "CSV Files",
    extensions: &["csv"],
};

pub const SQLITE_FILTER: DialogFilter = DialogFilter {
    name: "SQLite",
    extensions: &["sqlite", "db", "sqlite3"],
};

#[derive(Debug, Clone, Default, Serialize)]
pub struct OpenDialogOptions {
    pub multiple: bool,
    pub directory: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<DialogFilter>,
}

impl OpenDialogOptions {
    pub fn files(filter: DialogFilter, multiple: bool) -> Self {
        Self {
            multiple,
            directory: false,
            filters: vec![filter],
        }
    }

    pub fn directory() -> Self {
        Self {
            multiple: false,
            directory: true,
            filters: Vec::new(),
        }
    }
}

/// `open` resolves to `null`, one path, or a list of paths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    One(String),
    Many(Vec<String>),
}

impl Selection {
    pub fn into_paths(self) -> Vec<String> {
        match self {
            Selection::One(path) => vec![path],
            Selection::Many(paths) => paths,
        }
    }
}

/// Show the picker. An empty vector means the user cancelled.
pub async fn open(options: &OpenDialogOptions) -> Result<Vec<String>, BridgeError> {
    let js_options =
        serde_wasm_bindgen::to_value(options).map_err(|e| BridgeError::Serde(e.to_string()))?;
    let value = tauri_dialog_open(js_options)
        .await
        .map_err(|e| BridgeError::from_js(&e))?;
    let selection: Option<Selection> =
        serde_wasm_bindgen::from_value(value).map_err(|e| BridgeError::Serde(e.to_string()))?;
    Ok(selection.map(Selection::into_paths).unwrap_or_default())
}

/// Single path picker. `None` when cancelled.
pub async fn open_single(options: &OpenDialogOptions) -> Result<Option<String>, BridgeError> {
    Ok(open(options).await?.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_shapes() {
        let one: Option<Selection> = serde_json::from_str("\"/a.csv\"").unwrap();
        assert_eq!(one.unwrap().into_paths(), vec!["/a.csv".to_string()]);

        let many: Option<Selection> = serde_json::from_str(r#"["/a.csv","/b.csv"]"#).unwrap();
        assert_eq!(many.unwrap().into_paths().len(), 2);

        let none: Option<Selection> = serde_json::from_str("null").unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_options_shape() {
        let value = serde_json::to_value(OpenDialogOptions::files(CSV_FILTER, true)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "multiple": true,
                "directory": false,
                "filters": [{"name": "CSV Files", "extensions": ["csv"]}]
            })
        );

        let value = serde_json::to_value(OpenDialogOptions::directory()).unwrap();
        assert_eq!(value, serde_json::json!({"multiple": false, "directory": true}));
    }
}
