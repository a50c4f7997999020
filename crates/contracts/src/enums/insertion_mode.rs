use crate::shared::ContractError;
use serde::{Deserialize, Serialize};

/// How the backend creates the target table before inserting CSV rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertionMode {
    #[default]
    Fast,
    Optimized,
}

impl InsertionMode {
    pub const ALL: [InsertionMode; 2] = [InsertionMode::Fast, InsertionMode::Optimized];

    pub fn code(&self) -> &'static str {
        match self {
            InsertionMode::Fast => "fast",
            InsertionMode::Optimized => "optimized",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InsertionMode::Fast => "Fast Insertion",
            InsertionMode::Optimized => "Optimized Insertion",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            InsertionMode::Fast => {
                "Default mode. Faster, but column types are not tuned to the data."
            }
            InsertionMode::Optimized => {
                "Slower, sizes every column to its longest value. Recommended for large datasets."
            }
        }
    }

    pub fn from_code(code: &str) -> Result<Self, ContractError> {
        match code {
            "fast" => Ok(InsertionMode::Fast),
            "optimized" => Ok(InsertionMode::Optimized),
            _ => Err(ContractError::UnsupportedInsertionMode(code.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_wire_format() {
        for mode in InsertionMode::ALL {
            assert_eq!(InsertionMode::from_code(mode.code()), Ok(mode));
            assert_eq!(
                serde_json::to_string(&mode).unwrap(),
                format!("\"{}\"", mode.code())
            );
        }
        assert!(InsertionMode::from_code("Fast").is_err());
    }
}
