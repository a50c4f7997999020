//! User preferences persisted in `localStorage`.
//!
//! Only UI preferences live here. Database profiles are stored by the backend
//! and never written to the browser.

use crate::shared::theme::{apply_theme, Theme};
use contracts::enums::{InsertionMode, SeparatorType};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

const SETTINGS_STORAGE_KEY: &str = "fileflow-settings";

/// Upper bound of lines kept by an activity log.
pub const DEFAULT_LOG_LIMIT: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub theme: Theme,
    pub insertion_mode: InsertionMode,
    pub separator: SeparatorType,
    pub log_limit: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            insertion_mode: InsertionMode::default(),
            separator: SeparatorType::default(),
            log_limit: DEFAULT_LOG_LIMIT,
        }
    }
}

impl AppSettings {
    /// Parse stored settings. Unreadable data falls back to the defaults.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<AppSettings>(raw) {
            Ok(mut settings) => {
                if settings.log_limit == 0 {
                    settings.log_limit = DEFAULT_LOG_LIMIT;
                }
                settings
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                AppSettings::default()
            }
        }
    }
}

fn load_from_storage() -> AppSettings {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(SETTINGS_STORAGE_KEY).ok().flatten())
        .map(|raw| AppSettings::from_json(&raw))
        .unwrap_or_default()
}

fn save_to_storage(settings: &AppSettings) {
    let raw = match serde_json::to_string(settings) {
        Ok(raw) => raw,
        Err(e) => {
            log::error!("Failed to serialize settings: {}", e);
            return;
        }
    };
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(SETTINGS_STORAGE_KEY, &raw);
    }
}

/// Settings context provided at the application root.
#[derive(Clone, Copy)]
pub struct SettingsContext {
    pub settings: RwSignal<AppSettings>,
}

impl SettingsContext {
    pub fn load() -> Self {
        let settings = load_from_storage();
        apply_theme(settings.theme);
        Self {
            settings: RwSignal::new(settings),
        }
    }

    /// Change settings, persist them and re-apply the theme.
    pub fn update(&self, f: impl FnOnce(&mut AppSettings)) {
        self.settings.update(f);
        let current = self.settings.get_untracked();
        save_to_storage(&current);
        apply_theme(current.theme);
    }

    pub fn theme(&self) -> Theme {
        self.settings.with(|s| s.theme)
    }

    pub fn get_untracked(&self) -> AppSettings {
        self.settings.get_untracked()
    }
}

pub fn use_settings() -> SettingsContext {
    use_context::<SettingsContext>().expect("SettingsContext not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.insertion_mode, InsertionMode::Fast);
        assert_eq!(settings.separator, SeparatorType::Comma);
        assert_eq!(settings.log_limit, DEFAULT_LOG_LIMIT);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = AppSettings::from_json(r#"{"theme":"dark","separator":"pipe"}"#);
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.separator, SeparatorType::Pipe);
        assert_eq!(settings.insertion_mode, InsertionMode::Fast);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(AppSettings::from_json("{not json"), AppSettings::default());
        assert_eq!(
            AppSettings::from_json(r#"{"log_limit":0}"#).log_limit,
            DEFAULT_LOG_LIMIT
        );
    }

    #[test]
    fn test_round_trip() {
        let settings = AppSettings {
            theme: Theme::Dark,
            insertion_mode: InsertionMode::Optimized,
            separator: SeparatorType::Semicolon,
            log_limit: 50,
        };
        let raw = serde_json::to_string(&settings).unwrap();
        assert_eq!(AppSettings::from_json(&raw), settings);
    }
}
