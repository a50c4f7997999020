use crate::shared::bridge::{invoke, BridgeError};
use contracts::commands::request::{GenerateLoadDataArgs, GenerateLoadDataPayload};
use contracts::commands::GENERATE_LOAD_DATA_SQL;

/// An empty statement counts as a failure.
pub fn non_empty_sql(sql: String) -> Result<String, BridgeError> {
    if sql.trim().is_empty() {
        Err(BridgeError::Unexpected("SQL generation failed".to_string()))
    } else {
        Ok(sql)
    }
}

pub async fn generate_load_data_sql(load: GenerateLoadDataPayload) -> Result<String, BridgeError> {
    let sql: String = invoke(GENERATE_LOAD_DATA_SQL, &GenerateLoadDataArgs { load }).await?;
    non_empty_sql(sql)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_sql() {
        assert!(non_empty_sql("COPY t FROM '/a.csv';".into()).is_ok());
        assert_eq!(
            non_empty_sql("  ".into()),
            Err(BridgeError::Unexpected("SQL generation failed".into()))
        );
    }
}
