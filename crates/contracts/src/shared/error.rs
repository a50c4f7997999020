use thiserror::Error;

/// Failure to map user or backend text onto one of the closed enums.
///
/// The payload is always the original input, untrimmed, so the message shows
/// exactly what was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("Unsupported database engine: {0}")]
    UnsupportedEngine(String),
    #[error("Unsupported separator: {0}")]
    UnsupportedSeparator(String),
    #[error("Unsupported insertion mode: {0}")]
    UnsupportedInsertionMode(String),
}

/// Form checks done before a backend call is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a database engine")]
    MissingEngine,
    #[error("Please select a SQLite file")]
    MissingSqliteFile,
    #[error("Please fill in all the required fields")]
    MissingConnectionFields,
    #[error("Please enter a name for the configuration")]
    MissingConfigName,
    #[error("Please connect to the database")]
    NotConnected,
    #[error("Please select a file")]
    MissingFile,
    #[error("Please enter a table name")]
    MissingTableName,
    #[error("Please select at least one table")]
    MissingTables,
    #[error("Please select a destination folder")]
    MissingLocation,
    #[error("Please fill in all the fields")]
    IncompleteForm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_original_input() {
        assert_eq!(
            ContractError::UnsupportedEngine(" oracle ".into()).to_string(),
            "Unsupported database engine:  oracle "
        );
        assert_eq!(
            ContractError::UnsupportedSeparator(",;".into()).to_string(),
            "Unsupported separator: ,;"
        );
    }
}
