use super::api;
use crate::shared::components::activity_log::ActivityLog;
use crate::shared::toast::ToastService;
use contracts::commands::request::DbConfigPayload;
use contracts::domain::database_config::DatabaseConfig;
use contracts::enums::DatabaseEngineType;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Toast text after a successful connect.
pub fn connected_message(config: &DatabaseConfig) -> String {
    let target = if config.db_name.trim().is_empty() {
        config.target_label()
    } else {
        config.db_name.clone()
    };
    format!("Connected successfully to {}", target)
}

/// The backend holds one connection at a time, so an open one is closed
/// before connecting. The local flag can be stale after a profile is loaded.
pub fn must_disconnect_first(locally_connected: bool, active: Option<&DbConfigPayload>) -> bool {
    locally_connected || active.is_some()
}

/// Connection form state and the commands acting on it.
///
/// Form data lives in one `RwSignal<DatabaseConfig>`; views edit it with
/// `config.update()` directly.
#[derive(Clone, Copy)]
pub struct ConnectionViewModel {
    pub config: RwSignal<DatabaseConfig>,
    pub is_connecting: RwSignal<bool>,
    toast: ToastService,
    log: Option<ActivityLog>,
}

impl ConnectionViewModel {
    pub fn new(toast: ToastService, log: Option<ActivityLog>) -> Self {
        Self {
            config: RwSignal::new(DatabaseConfig::default()),
            is_connecting: RwSignal::new(false),
            toast,
            log,
        }
    }

    fn log(&self, message: impl Into<String>) {
        if let Some(log) = self.log {
            log.add(message);
        }
    }

    pub fn is_connected(&self) -> bool {
        self.config.with(|c| c.is_connected)
    }

    pub fn select_engine(&self, engine: DatabaseEngineType) {
        self.config.update(|c| c.select_engine(engine));
    }

    pub fn reset(&self) {
        self.config.update(|c| c.reset());
    }

    /// Pick up a connection opened earlier, e.g. on another page.
    pub fn check_connection(&self) {
        let vm = *self;
        spawn_local(async move {
            match api::is_connected().await {
                Ok(Some(active)) => {
                    vm.config.update(|c| c.apply_active(active));
                    vm.log("Already connected to the database");
                }
                Ok(None) => vm.config.update(|c| c.is_connected = false),
                Err(e) => {
                    log::warn!("is_connected: {}", e);
                    vm.log("Failed to check connection");
                }
            }
        });
    }

    /// Connect when disconnected, disconnect otherwise.
    pub fn toggle_command(&self) {
        if self.is_connected() {
            self.disconnect_command();
        } else {
            self.connect_command();
        }
    }

    pub fn connect_command(&self) {
        let current = self.config.get_untracked();
        if let Err(e) = current.validate_connection() {
            self.toast.warning(e.to_string());
            return;
        }

        self.is_connecting.set(true);
        let vm = *self;
        spawn_local(async move {
            let active = match api::is_connected().await {
                Ok(active) => active,
                Err(e) => {
                    log::warn!("is_connected before connect: {}", e);
                    None
                }
            };
            if must_disconnect_first(current.is_connected, active.as_ref()) {
                if let Err(e) = api::disconnect_from_database().await {
                    log::warn!("disconnect before connect: {}", e);
                }
            }
            match api::connect_to_database(&current).await {
                Ok(()) => {
                    vm.config.update(|c| c.is_connected = true);
                    vm.toast.success(connected_message(&current));
                    vm.log(format!(
                        "Connected to database {} with user {}",
                        current.target_label(),
                        current.username
                    ));
                }
                Err(e) => {
                    vm.config.update(|c| c.is_connected = false);
                    vm.toast.error(format!("Connection failed: {}", e));
                    vm.log(format!("Connection error: {}", e));
                }
            }
            vm.is_connecting.set(false);
        });
    }

    pub fn disconnect_command(&self) {
        if !self.is_connected() {
            self.toast.warning("You are not connected to any database");
            return;
        }

        let vm = *self;
        spawn_local(async move {
            match api::disconnect_from_database().await {
                Ok(()) => {
                    vm.config.update(|c| c.is_connected = false);
                    vm.toast.success("Disconnected successfully");
                    vm.log("Disconnected from database");
                }
                Err(e) => {
                    vm.toast.error(format!("Error disconnecting: {}", e));
                    vm.log(format!("Disconnect error: {}", e));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_backend_connection_is_closed_first() {
        let mut saved = DatabaseConfig::default();
        saved.select_engine(DatabaseEngineType::Postgres);
        saved.db_host = "db".into();
        saved.username = "u".into();
        let active = saved.to_connect_payload();

        // A loaded profile clears the local flag while the backend stays connected.
        saved.is_connected = true;
        let profile = saved.to_save_payload("prod").unwrap();
        saved.apply_saved(profile);
        assert!(!saved.is_connected);
        assert!(must_disconnect_first(saved.is_connected, Some(&active)));

        assert!(must_disconnect_first(true, None));
        assert!(!must_disconnect_first(false, None));
    }

    #[test]
    fn test_connected_message() {
        let mut config = DatabaseConfig::default();
        config.select_engine(DatabaseEngineType::MySql);
        config.db_host = "localhost".into();
        config.db_name = "shop".into();
        assert_eq!(connected_message(&config), "Connected successfully to shop");

        let mut sqlite = DatabaseConfig::default();
        sqlite.select_engine(DatabaseEngineType::Sqlite);
        sqlite.sqlite_file_path = "/data/app.db".into();
        assert_eq!(
            connected_message(&sqlite),
            "Connected successfully to /data/app.db"
        );
    }
}
