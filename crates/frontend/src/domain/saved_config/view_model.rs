use super::api;
use crate::shared::toast::ToastService;
use contracts::domain::database_config::{DatabaseConfig, Item};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Confirmation shown after a delete. The backend's own text wins when it
/// sends one.
pub fn deleted_message(response: &str) -> String {
    if response.trim().is_empty() {
        "Config deleted successfully".to_string()
    } else {
        response.to_string()
    }
}

/// Saved profile names plus the commands that save, load and delete them.
///
/// Loaded profiles are written into the connection form passed at creation.
#[derive(Clone, Copy)]
pub struct SavedConfigsViewModel {
    pub names: RwSignal<Vec<Item>>,
    pub selected: RwSignal<String>,
    config: RwSignal<DatabaseConfig>,
    toast: ToastService,
}

impl SavedConfigsViewModel {
    pub fn new(config: RwSignal<DatabaseConfig>, toast: ToastService) -> Self {
        Self {
            names: RwSignal::new(Vec::new()),
            selected: RwSignal::new(String::new()),
            config,
            toast,
        }
    }

    pub fn refresh(&self) {
        let vm = *self;
        spawn_local(async move {
            match api::get_all_configs().await {
                Ok(items) => vm.names.set(items),
                Err(e) => vm.toast.error(format!("Error getting all configs: {}", e)),
            }
        });
    }

    /// Validate and store the current form under `name`. `on_saved` runs
    /// only when the backend accepted it.
    pub fn save_command(&self, name: String, on_saved: Callback<()>) {
        let payload = match self.config.get_untracked().to_save_payload(&name) {
            Ok(payload) => payload,
            Err(e) => {
                self.toast.warning(e.to_string());
                return;
            }
        };

        let vm = *self;
        spawn_local(async move {
            let config_name = payload.config_name.clone();
            match api::save_config(payload).await {
                Ok(_) => {
                    vm.config.update(|c| c.config_name = config_name.clone());
                    vm.toast
                        .success(format!("Config \"{}\" saved successfully", config_name));
                    vm.refresh();
                    on_saved.run(());
                }
                Err(e) => vm.toast.error(format!("Error saving config: {}", e)),
            }
        });
    }

    pub fn load_command(&self, name: String) {
        let vm = *self;
        spawn_local(async move {
            match api::load_config(&name).await {
                Ok(saved) => {
                    vm.config.update(|c| c.apply_saved(saved));
                    vm.selected.set(name.clone());
                    vm.toast.success(format!("Config \"{}\" loaded", name));
                }
                Err(e) => vm.toast.error(format!("Error loading config: {}", e)),
            }
        });
    }

    pub fn load_last_command(&self) {
        let vm = *self;
        spawn_local(async move {
            match api::load_last_config().await {
                Ok(saved) => {
                    let name = saved.config_name.clone();
                    vm.config.update(|c| c.apply_saved(saved));
                    vm.selected.set(name.clone());
                    vm.toast.success(format!("Config \"{}\" loaded", name));
                }
                Err(e) => vm.toast.error(format!("Error loading config: {}", e)),
            }
        });
    }

    pub fn delete_command(&self, name: String) {
        // Drop it from the list right away, the refresh below settles it.
        self.names.update(|items| items.retain(|i| i.id != name));
        if self.selected.get_untracked() == name {
            self.selected.set(String::new());
        }

        let vm = *self;
        spawn_local(async move {
            match api::delete_config(&name).await {
                Ok(response) => vm.toast.success(deleted_message(&response)),
                Err(e) => vm.toast.error(format!("Error deleting config: {}", e)),
            }
            vm.refresh();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleted_message() {
        assert_eq!(deleted_message(""), "Config deleted successfully");
        assert_eq!(
            deleted_message("Database configuration prod deleted"),
            "Database configuration prod deleted"
        );
    }
}
