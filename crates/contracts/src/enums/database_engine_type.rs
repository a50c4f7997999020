use crate::shared::ContractError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Database engine the user connects to.
///
/// `Undefined` is the state of a fresh form before an engine is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DatabaseEngineType {
    MySql,
    MariaDb,
    Postgres,
    Sqlite,
    #[default]
    Undefined,
}

impl DatabaseEngineType {
    /// Engines offered in the engine picker, in display order.
    pub const ALL: [DatabaseEngineType; 4] = [
        DatabaseEngineType::MySql,
        DatabaseEngineType::MariaDb,
        DatabaseEngineType::Postgres,
        DatabaseEngineType::Sqlite,
    ];

    /// Canonical display string.
    pub fn display_name(&self) -> &'static str {
        match self {
            DatabaseEngineType::MySql => "MySQL",
            DatabaseEngineType::MariaDb => "MariaDB",
            DatabaseEngineType::Postgres => "Postgres",
            DatabaseEngineType::Sqlite => "SQLite",
            DatabaseEngineType::Undefined => "Undefined",
        }
    }

    /// Lowercase code used on the wire and as `<option>` values.
    pub fn driver_code(&self) -> &'static str {
        match self {
            DatabaseEngineType::MySql => "mysql",
            DatabaseEngineType::MariaDb => "mariadb",
            DatabaseEngineType::Postgres => "postgres",
            DatabaseEngineType::Sqlite => "sqlite",
            DatabaseEngineType::Undefined => "undefined",
        }
    }

    /// Port pre-filled when the engine is picked. Empty for file based engines.
    pub fn default_port(&self) -> &'static str {
        match self {
            DatabaseEngineType::MySql | DatabaseEngineType::MariaDb => "3306",
            DatabaseEngineType::Postgres => "5432",
            DatabaseEngineType::Sqlite | DatabaseEngineType::Undefined => "",
        }
    }

    pub fn is_sqlite(&self) -> bool {
        matches!(self, DatabaseEngineType::Sqlite)
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, DatabaseEngineType::Undefined)
    }

    /// Display string for an arbitrary value.
    ///
    /// A value that already is one of the display strings maps to itself,
    /// everything else (including no value at all) maps to `"Undefined"`.
    pub fn label_of(raw: Option<&str>) -> &'static str {
        raw.and_then(|value| {
            Self::ALL
                .iter()
                .chain(std::iter::once(&DatabaseEngineType::Undefined))
                .find(|engine| engine.display_name() == value)
                .map(|engine| engine.display_name())
        })
        .unwrap_or(DatabaseEngineType::Undefined.display_name())
    }

    /// Case-insensitive parse with surrounding whitespace ignored.
    pub fn parse(text: &str) -> Result<Self, ContractError> {
        match text.trim().to_lowercase().as_str() {
            "mysql" => Ok(DatabaseEngineType::MySql),
            "mariadb" => Ok(DatabaseEngineType::MariaDb),
            "postgres" => Ok(DatabaseEngineType::Postgres),
            "sqlite" => Ok(DatabaseEngineType::Sqlite),
            "undefined" => Ok(DatabaseEngineType::Undefined),
            _ => Err(ContractError::UnsupportedEngine(text.to_string())),
        }
    }

    /// Like [`parse`](Self::parse) but a missing value is `Undefined`.
    pub fn parse_optional(text: Option<&str>) -> Result<Self, ContractError> {
        match text {
            Some(text) => Self::parse(text),
            None => Ok(DatabaseEngineType::Undefined),
        }
    }
}

impl fmt::Display for DatabaseEngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for DatabaseEngineType {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DatabaseEngineType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.driver_code())
    }
}

// Saved profiles written before an engine was picked carry an empty driver.
impl<'de> Deserialize<'de> for DatabaseEngineType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.trim().is_empty() {
            return Ok(DatabaseEngineType::Undefined);
        }
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMBERS: [DatabaseEngineType; 5] = [
        DatabaseEngineType::MySql,
        DatabaseEngineType::MariaDb,
        DatabaseEngineType::Postgres,
        DatabaseEngineType::Sqlite,
        DatabaseEngineType::Undefined,
    ];

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(DatabaseEngineType::parse("MySQL"), Ok(DatabaseEngineType::MySql));
        assert_eq!(DatabaseEngineType::parse("  mariadb "), Ok(DatabaseEngineType::MariaDb));
        assert_eq!(DatabaseEngineType::parse("POSTGRES"), Ok(DatabaseEngineType::Postgres));
        assert_eq!(DatabaseEngineType::parse("\tSqLite\n"), Ok(DatabaseEngineType::Sqlite));
        assert_eq!(DatabaseEngineType::parse("Undefined"), Ok(DatabaseEngineType::Undefined));
    }

    #[test]
    fn parse_rejects_unknown_with_original_text() {
        let err = DatabaseEngineType::parse("oracle").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported database engine: oracle");

        let err = DatabaseEngineType::parse(" Oracle ").unwrap_err();
        assert_eq!(err, ContractError::UnsupportedEngine(" Oracle ".to_string()));

        assert!(DatabaseEngineType::parse("").is_err());
        assert!(DatabaseEngineType::parse("my sql").is_err());
        assert!(DatabaseEngineType::parse("postgresql").is_err());
    }

    #[test]
    fn parse_optional_treats_none_as_undefined() {
        assert_eq!(
            DatabaseEngineType::parse_optional(None),
            Ok(DatabaseEngineType::Undefined)
        );
        assert_eq!(
            DatabaseEngineType::parse_optional(Some("sqlite")),
            Ok(DatabaseEngineType::Sqlite)
        );
    }

    #[test]
    fn label_of_is_identity_on_members() {
        for engine in MEMBERS {
            assert_eq!(
                DatabaseEngineType::label_of(Some(engine.display_name())),
                engine.display_name()
            );
        }
        assert_eq!(DatabaseEngineType::label_of(Some("Oracle")), "Undefined");
        assert_eq!(DatabaseEngineType::label_of(Some("mysql")), "Undefined");
        assert_eq!(DatabaseEngineType::label_of(None), "Undefined");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for engine in MEMBERS {
            let lowered = engine.to_string().to_lowercase();
            assert_eq!(DatabaseEngineType::parse(&lowered), Ok(engine));
            assert_eq!(lowered.parse::<DatabaseEngineType>(), Ok(engine));
        }
    }

    #[test]
    fn default_ports() {
        assert_eq!(DatabaseEngineType::MySql.default_port(), "3306");
        assert_eq!(DatabaseEngineType::MariaDb.default_port(), "3306");
        assert_eq!(DatabaseEngineType::Postgres.default_port(), "5432");
        assert_eq!(DatabaseEngineType::Sqlite.default_port(), "");
    }

    #[test]
    fn serde_uses_driver_code() {
        let json = serde_json::to_string(&DatabaseEngineType::MariaDb).unwrap();
        assert_eq!(json, "\"mariadb\"");

        let engine: DatabaseEngineType = serde_json::from_str("\"Postgres\"").unwrap();
        assert_eq!(engine, DatabaseEngineType::Postgres);

        let engine: DatabaseEngineType = serde_json::from_str("\"\"").unwrap();
        assert_eq!(engine, DatabaseEngineType::Undefined);

        assert!(serde_json::from_str::<DatabaseEngineType>("\"oracle\"").is_err());
    }
}
