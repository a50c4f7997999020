use contracts::commands::response::ComboItem;

/// Text of the table picker button.
pub fn selection_text(items: &[ComboItem], selected: &[String]) -> String {
    match selected {
        [] => "Select items".to_string(),
        [only] => items
            .iter()
            .find(|item| &item.value == only)
            .map(|item| item.label.clone())
            .unwrap_or_else(|| "Select items".to_string()),
        many => format!("{} items selected", many.len()),
    }
}

/// Add or remove `value`, keeping the order in which tables were picked.
pub fn set_selected(selected: &mut Vec<String>, value: &str, checked: bool) {
    let present = selected.iter().any(|v| v == value);
    if checked && !present {
        selected.push(value.to_string());
    } else if !checked {
        selected.retain(|v| v != value);
    }
}

pub fn all_values(items: &[ComboItem]) -> Vec<String> {
    items.iter().map(|item| item.value.clone()).collect()
}

/// Case-insensitive match on the label.
pub fn filter_items(items: &[ComboItem], query: &str) -> Vec<ComboItem> {
    let query = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| query.is_empty() || item.label.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

/// Keep only selected values that still exist after a reload.
pub fn retain_known(selected: &mut Vec<String>, items: &[ComboItem]) {
    selected.retain(|value| items.iter().any(|item| &item.value == value));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<ComboItem> {
        ["users", "orders", "order_lines"]
            .iter()
            .map(|name| ComboItem {
                value: name.to_string(),
                label: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_selection_text() {
        let items = items();
        assert_eq!(selection_text(&items, &[]), "Select items");
        assert_eq!(selection_text(&items, &["orders".to_string()]), "orders");
        assert_eq!(selection_text(&items, &["gone".to_string()]), "Select items");
        assert_eq!(
            selection_text(&items, &["users".to_string(), "orders".to_string()]),
            "2 items selected"
        );
    }

    #[test]
    fn test_set_selected() {
        let mut selected = Vec::new();
        set_selected(&mut selected, "users", true);
        set_selected(&mut selected, "orders", true);
        set_selected(&mut selected, "users", true);
        assert_eq!(selected, vec!["users".to_string(), "orders".to_string()]);
        set_selected(&mut selected, "users", false);
        assert_eq!(selected, vec!["orders".to_string()]);
        set_selected(&mut selected, "missing", false);
        assert_eq!(selected, vec!["orders".to_string()]);
    }

    #[test]
    fn test_select_all_and_filter() {
        let items = items();
        assert_eq!(all_values(&items).len(), 3);
        let found = filter_items(&items, " ORDER ");
        assert_eq!(found.len(), 2);
        assert_eq!(filter_items(&items, "").len(), 3);
    }

    #[test]
    fn test_retain_known() {
        let mut selected = vec!["users".to_string(), "dropped".to_string()];
        retain_known(&mut selected, &items());
        assert_eq!(selected, vec!["users".to_string()]);
    }
}
