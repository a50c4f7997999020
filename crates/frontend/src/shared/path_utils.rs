//! Helpers to turn picked file paths into labels and table names.

/// Last component of a path, with either `/` or `\` as separator.
pub fn file_name_from_path(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or_default()
}

/// Table name derived from a CSV path.
///
/// Takes the file name up to its first dot, keeps `[A-Za-z0-9_]`, drops one
/// leading underscore and lowercases the rest.
pub fn normalized_table_name(path: &str) -> String {
    let stem = file_name_from_path(path)
        .split('.')
        .next()
        .unwrap_or_default();
    let kept: String = stem
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    kept.strip_prefix('_').unwrap_or(&kept).to_lowercase()
}

/// Comma separated table names for a list of files, in selection order.
pub fn table_names_for_files(paths: &[String]) -> String {
    paths
        .iter()
        .map(|p| normalized_table_name(p))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `"name (size)"` entries as shown next to the file picker.
pub fn describe_files(files: &[(String, String)]) -> String {
    files
        .iter()
        .map(|(path, size)| format!("{} ({})", file_name_from_path(path), size))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_path() {
        assert_eq!(file_name_from_path("/home/me/data/sales.csv"), "sales.csv");
        assert_eq!(file_name_from_path("C:\\Users\\me\\sales.csv"), "sales.csv");
        assert_eq!(file_name_from_path("sales.csv"), "sales.csv");
        assert_eq!(file_name_from_path("/tmp/dir/"), "");
    }

    #[test]
    fn test_normalized_table_name() {
        assert_eq!(normalized_table_name("/data/Sales 2024.csv"), "sales2024");
        assert_eq!(normalized_table_name("/data/_raw_export.tar.csv"), "raw_export");
        assert_eq!(normalized_table_name("C:\\x\\Clients-EU.csv"), "clientseu");
        assert_eq!(normalized_table_name("/data/__x.csv"), "_x");
        assert_eq!(normalized_table_name("/data/été.csv"), "t");
    }

    #[test]
    fn test_table_names_for_files() {
        let paths = vec!["/a/Users.csv".to_string(), "/a/orders.csv".to_string()];
        assert_eq!(table_names_for_files(&paths), "users, orders");
        assert_eq!(table_names_for_files(&[]), "");
    }

    #[test]
    fn test_describe_files() {
        let files = vec![
            ("/a/users.csv".to_string(), "0.12 MB".to_string()),
            ("/a/orders.csv".to_string(), "3.40 MB".to_string()),
        ];
        assert_eq!(describe_files(&files), "users.csv (0.12 MB), orders.csv (3.40 MB)");
    }
}
