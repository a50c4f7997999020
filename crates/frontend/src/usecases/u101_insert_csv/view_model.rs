use super::api;
use super::model::plan_inserts;
use crate::domain::connection::ConnectionViewModel;
use crate::shared::components::activity_log::ActivityLog;
use crate::shared::components::file_picker::PickedFile;
use crate::shared::path_utils::table_names_for_files;
use crate::shared::settings::SettingsContext;
use crate::shared::toast::ToastService;
use contracts::enums::InsertionMode;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct InsertViewModel {
    pub connection: ConnectionViewModel,
    pub files: RwSignal<Vec<PickedFile>>,
    pub table_name: RwSignal<String>,
    pub mode: RwSignal<InsertionMode>,
    pub is_loading: RwSignal<bool>,
    pub log: ActivityLog,
    toast: ToastService,
    settings: SettingsContext,
}

impl InsertViewModel {
    pub fn new(toast: ToastService, settings: SettingsContext) -> Self {
        let prefs = settings.get_untracked();
        let log = ActivityLog::new(prefs.log_limit);
        Self {
            connection: ConnectionViewModel::new(toast, Some(log)),
            files: RwSignal::new(Vec::new()),
            table_name: RwSignal::new(String::new()),
            mode: RwSignal::new(prefs.insertion_mode),
            is_loading: RwSignal::new(false),
            log,
            toast,
            settings,
        }
    }

    /// The table name field can only be edited with exactly one file.
    pub fn is_table_name_editable(&self) -> bool {
        self.files.with(|files| files.len() <= 1)
    }

    pub fn set_files(&self, files: Vec<PickedFile>) {
        let paths: Vec<String> = files.iter().map(|f| f.path.clone()).collect();
        self.table_name.set(table_names_for_files(&paths));
        self.log.add(format!("Selected {} file(s)", files.len()));
        self.files.set(files);
    }

    pub fn set_mode(&self, mode: InsertionMode) {
        self.mode.set(mode);
        self.settings.update(|s| s.insertion_mode = mode);
    }

    pub fn insert_command(&self) {
        let paths: Vec<String> = self
            .files
            .with_untracked(|files| files.iter().map(|f| f.path.clone()).collect());
        let plan = self.connection.config.with_untracked(|config| {
            plan_inserts(
                &paths,
                &self.table_name.get_untracked(),
                config,
                self.mode.get_untracked(),
            )
        });
        let plan = match plan {
            Ok(plan) => plan,
            Err(e) => {
                self.toast.warning(e.to_string());
                return;
            }
        };

        self.is_loading.set(true);
        self.log.add("Inserting data...");
        let vm = *self;
        spawn_local(async move {
            for csv in plan {
                let table_name = csv.table_name.clone();
                match api::insert_csv_data(csv).await {
                    Ok(report) => {
                        vm.log.add(report);
                        vm.toast
                            .success(format!("Data inserted successfully into {}", table_name));
                    }
                    Err(e) => {
                        vm.log.add(format!("Insert error: {}", e));
                        vm.toast.error(format!("Error inserting data: {}", e));
                    }
                }
            }
            vm.is_loading.set(false);
        });
    }

    /// Clear the form. The backend connection and its settings are left
    /// untouched.
    pub fn reset_command(&self) {
        self.connection.config.update(|c| c.reset_unless_connected());
        self.files.set(Vec::new());
        self.table_name.set(String::new());
        self.log.clear();
        self.is_loading.set(false);
    }
}
