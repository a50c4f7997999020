use contracts::shared::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyRequest {
    pub source_db: String,
    pub source_table: String,
    pub target_db: String,
    pub target_table: String,
}

impl CopyRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            &self.source_db,
            &self.source_table,
            &self.target_db,
            &self.target_table,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            Err(ValidationError::IncompleteForm)
        } else {
            Ok(())
        }
    }

    /// `db.table -> db.table`, as written to the log.
    pub fn describe(&self) -> String {
        format!(
            "{}.{} -> {}.{}",
            self.source_db.trim(),
            self.source_table.trim(),
            self.target_db.trim(),
            self.target_table.trim()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CopyRequest {
        CopyRequest {
            source_db: "shop".into(),
            source_table: "users".into(),
            target_db: "archive".into(),
            target_table: "users_2024".into(),
        }
    }

    #[test]
    fn test_every_field_is_required() {
        assert_eq!(request().validate(), Ok(()));

        let mut missing = request();
        missing.target_table = "  ".into();
        assert_eq!(missing.validate(), Err(ValidationError::IncompleteForm));
        assert_eq!(
            CopyRequest::default().validate(),
            Err(ValidationError::IncompleteForm)
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(request().describe(), "shop.users -> archive.users_2024");
    }
}
