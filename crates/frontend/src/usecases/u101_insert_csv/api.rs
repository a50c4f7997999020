use crate::shared::bridge::{invoke, BridgeError};
use contracts::commands::request::{InsertConfigPayload, InsertCsvArgs};
use contracts::commands::INSERT_CSV_DATA;

/// Returns the backend's report, e.g. the number of inserted rows.
pub async fn insert_csv_data(csv: InsertConfigPayload) -> Result<String, BridgeError> {
    invoke(INSERT_CSV_DATA, &InsertCsvArgs { csv }).await
}
