use crate::shared::ContractError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Field delimiter used when a table is exported to a text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparatorType {
    #[default]
    Comma,
    Semicolon,
    Space,
    Pipe,
}

impl SeparatorType {
    pub const ALL: [SeparatorType; 4] = [
        SeparatorType::Comma,
        SeparatorType::Semicolon,
        SeparatorType::Space,
        SeparatorType::Pipe,
    ];

    pub fn as_char(&self) -> char {
        match self {
            SeparatorType::Comma => ',',
            SeparatorType::Semicolon => ';',
            SeparatorType::Space => ' ',
            SeparatorType::Pipe => '|',
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SeparatorType::Comma => "Comma",
            SeparatorType::Semicolon => "Semicolon",
            SeparatorType::Space => "Space",
            SeparatorType::Pipe => "Pipe",
        }
    }

    /// Label for a raw separator string, `"Unknown"` when it is not one.
    pub fn label_of(raw: &str) -> &'static str {
        Self::from_char(raw)
            .map(|separator| separator.label())
            .unwrap_or("Unknown")
    }

    /// Exact match of the whole input against the separator characters.
    ///
    /// No trimming and no case folding: `" "` is a valid separator on its own.
    pub fn from_char(input: &str) -> Result<Self, ContractError> {
        let mut chars = input.chars();
        let separator = match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::ALL.into_iter().find(|s| s.as_char() == ch),
            _ => None,
        };
        separator.ok_or_else(|| ContractError::UnsupportedSeparator(input.to_string()))
    }
}

impl fmt::Display for SeparatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_char_accepts_the_four_separators() {
        assert_eq!(SeparatorType::from_char(","), Ok(SeparatorType::Comma));
        assert_eq!(SeparatorType::from_char(";"), Ok(SeparatorType::Semicolon));
        assert_eq!(SeparatorType::from_char(" "), Ok(SeparatorType::Space));
        assert_eq!(SeparatorType::from_char("|"), Ok(SeparatorType::Pipe));
    }

    #[test]
    fn from_char_rejects_everything_else() {
        let err = SeparatorType::from_char(",;").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported separator: ,;");

        for input in ["", "\t", ":", "a", "  ", " ,", "my-sql"] {
            assert_eq!(
                SeparatorType::from_char(input),
                Err(ContractError::UnsupportedSeparator(input.to_string()))
            );
        }
    }

    #[test]
    fn from_char_on_first_char_follows_single_char_rule() {
        let first: String = "my-sql".chars().take(1).collect();
        assert!(SeparatorType::from_char(&first).is_err());

        let first: String = "|a|b".chars().take(1).collect();
        assert_eq!(SeparatorType::from_char(&first), Ok(SeparatorType::Pipe));
    }

    #[test]
    fn labels() {
        assert_eq!(SeparatorType::Comma.label(), "Comma");
        assert_eq!(SeparatorType::Pipe.to_string(), "Pipe");
        assert_eq!(SeparatorType::label_of(";"), "Semicolon");
        assert_eq!(SeparatorType::label_of(" "), "Space");
        assert_eq!(SeparatorType::label_of("#"), "Unknown");
        assert_eq!(SeparatorType::label_of(""), "Unknown");
    }

    #[test]
    fn char_round_trip() {
        for separator in SeparatorType::ALL {
            let raw = separator.as_char().to_string();
            assert_eq!(SeparatorType::from_char(&raw), Ok(separator));
        }
    }

    #[test]
    fn serializes_lowercase_member_name() {
        assert_eq!(
            serde_json::to_string(&SeparatorType::Semicolon).unwrap(),
            "\"semicolon\""
        );
    }
}
