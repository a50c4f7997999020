use crate::shared::bridge::{invoke, BridgeError};
use contracts::commands::request::{DownloadArgs, DownloadConfigPayload};
use contracts::commands::DOWNLOAD_TABLE;

pub async fn download_table(config: DownloadConfigPayload) -> Result<String, BridgeError> {
    invoke(DOWNLOAD_TABLE, &DownloadArgs { config }).await
}
