use crate::shared::bridge::{invoke, BridgeError};
use crate::shared::components::ui::Button;
use crate::shared::dialog::{self, OpenDialogOptions, CSV_FILTER, SQLITE_FILTER};
use crate::shared::icons::icon;
use crate::shared::path_utils::{describe_files, file_name_from_path};
use crate::shared::toast::use_toast;
use contracts::commands::request::FileSizeArgs;
use contracts::commands::GET_SIZE_OF_FILE;
use leptos::prelude::*;
use leptos::task::spawn_local;

const UNKNOWN_SIZE: &str = "unknown size";

/// A CSV file chosen by the user with its human readable size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickedFile {
    pub path: String,
    pub size: String,
}

pub async fn get_size_of_file(path: &str) -> Result<String, BridgeError> {
    invoke(
        GET_SIZE_OF_FILE,
        &FileSizeArgs {
            file_path: path.to_string(),
        },
    )
    .await
}

async fn with_sizes(paths: Vec<String>) -> Vec<PickedFile> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let size = match get_size_of_file(&path).await {
            Ok(size) => size,
            Err(e) => {
                log::warn!("No size for {}: {}", path, e);
                UNKNOWN_SIZE.to_string()
            }
        };
        files.push(PickedFile { path, size });
    }
    files
}

fn summary(files: &[PickedFile]) -> String {
    let pairs: Vec<(String, String)> = files
        .iter()
        .map(|f| (f.path.clone(), f.size.clone()))
        .collect();
    describe_files(&pairs)
}

/// CSV picker. Cancelling the dialog keeps the current selection.
#[component]
pub fn CsvFilePicker(
    #[prop(into)]
    files: Signal<Vec<PickedFile>>,
    on_pick: Callback<Vec<PickedFile>>,
    #[prop(optional)]
    multiple: bool,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let toast = use_toast();

    let pick = move |_| {
        spawn_local(async move {
            match dialog::open(&OpenDialogOptions::files(CSV_FILTER, multiple)).await {
                Ok(paths) if paths.is_empty() => {}
                Ok(paths) => on_pick.run(with_sizes(paths).await),
                Err(e) => toast.error(format!("Could not open the file dialog: {}", e)),
            }
        });
    };

    view! {
        <div class="file-picker">
            <Button variant="secondary" disabled=disabled on_click=Callback::new(pick)>
                {icon("file")}
                {if multiple { "Choose CSV files" } else { "Choose a CSV file" }}
            </Button>
            <span class="file-picker__summary" title=move || summary(&files.get())>
                {move || {
                    let current = files.get();
                    if current.is_empty() {
                        "No file selected".to_string()
                    } else {
                        summary(&current)
                    }
                }}
            </span>
        </div>
    }
}

/// Picks an existing SQLite database file.
#[component]
pub fn SqliteFilePicker(
    #[prop(into)]
    path: Signal<String>,
    on_pick: Callback<String>,
) -> impl IntoView {
    let toast = use_toast();

    let pick = move |_| {
        spawn_local(async move {
            match dialog::open_single(&OpenDialogOptions::files(SQLITE_FILTER, false)).await {
                Ok(Some(selected)) => on_pick.run(selected),
                Ok(None) => {}
                Err(e) => toast.error(format!("Could not open the file dialog: {}", e)),
            }
        });
    };

    view! {
        <div class="file-picker">
            <Button variant="secondary" on_click=Callback::new(pick)>
                {icon("database")}
                "Choose a SQLite file"
            </Button>
            <span class="file-picker__summary" title=move || path.get()>
                {move || {
                    let current = path.get();
                    if current.is_empty() {
                        "No file selected".to_string()
                    } else {
                        file_name_from_path(&current).to_string()
                    }
                }}
            </span>
        </div>
    }
}

/// Picks an output directory.
#[component]
pub fn DirectoryPicker(
    #[prop(into)]
    path: Signal<String>,
    on_pick: Callback<String>,
) -> impl IntoView {
    let toast = use_toast();

    let pick = move |_| {
        spawn_local(async move {
            match dialog::open_single(&OpenDialogOptions::directory()).await {
                Ok(Some(selected)) => on_pick.run(selected),
                Ok(None) => {}
                Err(e) => toast.error(format!("Could not open the folder dialog: {}", e)),
            }
        });
    };

    view! {
        <div class="file-picker">
            <Button variant="secondary" on_click=Callback::new(pick)>
                {icon("folder")}
                "Choose a folder"
            </Button>
            <span class="file-picker__summary">
                {move || {
                    let current = path.get();
                    if current.is_empty() { "No folder selected".to_string() } else { current }
                }}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let files = vec![PickedFile {
            path: "/data/users.csv".into(),
            size: "0.50 MB".into(),
        }];
        assert_eq!(summary(&files), "users.csv (0.50 MB)");
        assert_eq!(summary(&[]), "");
    }
}
