use crate::shared::bridge::{expect_true, invoke, invoke_no_args, BridgeError};
use contracts::commands::request::{ConnectArgs, DbConfigPayload};
use contracts::commands::response::{parse_active_connection, ComboItem};
use contracts::commands::{
    CONNECT_TO_DATABASE, DISCONNECT_FROM_DATABASE, GET_TABLE_LIST, IS_CONNECTED,
};
use contracts::domain::database_config::DatabaseConfig;

/// Open a connection with the form's settings. The caller validates first.
pub async fn connect_to_database(config: &DatabaseConfig) -> Result<(), BridgeError> {
    let args = ConnectArgs {
        config: config.to_connect_payload(),
    };
    let connected: bool = invoke(CONNECT_TO_DATABASE, &args).await?;
    expect_true(CONNECT_TO_DATABASE, connected)
}

pub async fn disconnect_from_database() -> Result<(), BridgeError> {
    let disconnected: bool = invoke_no_args(DISCONNECT_FROM_DATABASE).await?;
    expect_true(DISCONNECT_FROM_DATABASE, disconnected)
}

/// Settings of the connection held by the backend, if any.
pub async fn is_connected() -> Result<Option<DbConfigPayload>, BridgeError> {
    let raw: String = invoke_no_args(IS_CONNECTED).await?;
    parse_active_connection(&raw).map_err(|e| BridgeError::Serde(e.to_string()))
}

pub async fn get_table_list() -> Result<Vec<ComboItem>, BridgeError> {
    invoke_no_args(GET_TABLE_LIST).await
}
