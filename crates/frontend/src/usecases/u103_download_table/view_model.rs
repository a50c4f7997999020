use super::api;
use super::model::{all_values, retain_known, set_selected};
use crate::domain::connection::api as connection_api;
use crate::domain::connection::ConnectionViewModel;
use crate::shared::components::activity_log::ActivityLog;
use crate::shared::settings::SettingsContext;
use crate::shared::toast::ToastService;
use contracts::commands::request::DownloadConfigPayload;
use contracts::commands::response::ComboItem;
use contracts::enums::SeparatorType;
use contracts::shared::ValidationError;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct DownloadViewModel {
    pub connection: ConnectionViewModel,
    pub tables: RwSignal<Vec<ComboItem>>,
    pub selected: RwSignal<Vec<String>>,
    pub location: RwSignal<String>,
    pub separator: RwSignal<SeparatorType>,
    pub is_loading_tables: RwSignal<bool>,
    pub is_downloading: RwSignal<bool>,
    pub log: ActivityLog,
    toast: ToastService,
    settings: SettingsContext,
}

impl DownloadViewModel {
    pub fn new(toast: ToastService, settings: SettingsContext) -> Self {
        let prefs = settings.get_untracked();
        let log = ActivityLog::new(prefs.log_limit);
        Self {
            connection: ConnectionViewModel::new(toast, Some(log)),
            tables: RwSignal::new(Vec::new()),
            selected: RwSignal::new(Vec::new()),
            location: RwSignal::new(String::new()),
            separator: RwSignal::new(prefs.separator),
            is_loading_tables: RwSignal::new(false),
            is_downloading: RwSignal::new(false),
            log,
            toast,
            settings,
        }
    }

    pub fn set_table_selected(&self, value: &str, checked: bool) {
        self.selected.update(|s| set_selected(s, value, checked));
    }

    pub fn select_all(&self) {
        let values = self.tables.with_untracked(|items| all_values(items));
        self.selected.set(values);
    }

    pub fn deselect_all(&self) {
        self.selected.set(Vec::new());
    }

    pub fn set_separator(&self, separator: SeparatorType) {
        self.separator.set(separator);
        self.settings.update(|s| s.separator = separator);
    }

    /// Drop the table list, e.g. after a disconnect.
    pub fn clear_tables(&self) {
        self.tables.set(Vec::new());
        self.selected.set(Vec::new());
    }

    pub fn load_tables_command(&self) {
        self.is_loading_tables.set(true);
        let vm = *self;
        spawn_local(async move {
            match connection_api::get_table_list().await {
                Ok(items) => {
                    vm.log.add(format!("Found {} table(s)", items.len()));
                    if items.is_empty() {
                        vm.toast.info("No tables found in the database");
                    }
                    vm.selected.update(|s| retain_known(s, &items));
                    vm.tables.set(items);
                }
                Err(e) => {
                    vm.toast.error(format!("Error getting the table list: {}", e));
                    vm.log.add(format!("Table list error: {}", e));
                }
            }
            vm.is_loading_tables.set(false);
        });
    }

    pub fn download_command(&self) {
        if !self.connection.is_connected() {
            self.toast.warning(ValidationError::NotConnected.to_string());
            return;
        }
        let config = match DownloadConfigPayload::new(
            self.selected.get_untracked(),
            &self.location.get_untracked(),
            self.separator.get_untracked(),
        ) {
            Ok(config) => config,
            Err(e) => {
                self.toast.warning(e.to_string());
                return;
            }
        };

        self.is_downloading.set(true);
        self.log.add(format!(
            "Exporting {} table(s) to {}",
            config.table_name_list.len(),
            config.location
        ));
        let vm = *self;
        spawn_local(async move {
            match api::download_table(config).await {
                Ok(report) => {
                    vm.log.add(report);
                    vm.toast.success("Tables exported successfully");
                }
                Err(e) => {
                    vm.log.add(format!("Export error: {}", e));
                    vm.toast.error(format!("Error exporting tables: {}", e));
                }
            }
            vm.is_downloading.set(false);
        });
    }
}
