use crate::shared::components::file_picker::SqliteFilePicker;
use contracts::domain::database_config::DatabaseConfig;
use leptos::prelude::*;

#[component]
pub fn SqliteForm(config: RwSignal<DatabaseConfig>) -> impl IntoView {
    view! {
        <div class="detail-form">
            <label class="form__label">"SQLite database file"</label>
            <SqliteFilePicker
                path=Signal::derive(move || config.with(|c| c.sqlite_file_path.clone()))
                on_pick=Callback::new(move |path: String| {
                    config.update(|c| c.sqlite_file_path = path)
                })
            />
        </div>
    }
}
