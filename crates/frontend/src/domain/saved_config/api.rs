use crate::shared::bridge::{invoke, invoke_no_args, BridgeError};
use contracts::commands::request::{ConfigNameArgs, SaveConfigArgs, SaveConfigPayload};
use contracts::commands::response::{parse_config_names, parse_saved_config};
use contracts::commands::{
    DELETE_DATABASE_CONFIG, GET_ALL_DATABASE_CONFIGS_NAME, LOAD_DATABASE_CONFIG,
    LOAD_DATABASE_CONFIG_BY_NAME, SAVE_DATABASE_CONFIG,
};
use contracts::domain::database_config::Item;

fn serde_error(e: serde_json::Error) -> BridgeError {
    BridgeError::Serde(e.to_string())
}

pub async fn get_all_configs() -> Result<Vec<Item>, BridgeError> {
    let raw: String = invoke_no_args(GET_ALL_DATABASE_CONFIGS_NAME).await?;
    parse_config_names(&raw).map_err(serde_error)
}

pub async fn load_config(name: &str) -> Result<SaveConfigPayload, BridgeError> {
    let args = ConfigNameArgs {
        name: name.to_string(),
    };
    let raw: String = invoke(LOAD_DATABASE_CONFIG_BY_NAME, &args).await?;
    parse_saved_config(&raw).map_err(serde_error)
}

/// The profile saved most recently.
pub async fn load_last_config() -> Result<SaveConfigPayload, BridgeError> {
    let raw: String = invoke_no_args(LOAD_DATABASE_CONFIG).await?;
    parse_saved_config(&raw).map_err(serde_error)
}

/// Returns the backend's confirmation text.
pub async fn save_config(save: SaveConfigPayload) -> Result<String, BridgeError> {
    invoke(SAVE_DATABASE_CONFIG, &SaveConfigArgs { save }).await
}

pub async fn delete_config(name: &str) -> Result<String, BridgeError> {
    let args = ConfigNameArgs {
        name: name.to_string(),
    };
    invoke(DELETE_DATABASE_CONFIG, &args).await
}
