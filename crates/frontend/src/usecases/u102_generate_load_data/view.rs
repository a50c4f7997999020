use super::api;
use crate::domain::connection::ui::SelectEngine;
use crate::shared::components::file_picker::{CsvFilePicker, PickedFile};
use crate::shared::components::loader::Loader;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::sql_viewer::SqlViewer;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::shared::path_utils::normalized_table_name;
use crate::shared::toast::use_toast;
use contracts::commands::request::GenerateLoadDataPayload;
use contracts::enums::DatabaseEngineType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Card;

#[component]
pub fn LoadDataSqlPage() -> impl IntoView {
    let toast = use_toast();
    let file = RwSignal::new(Vec::<PickedFile>::new());
    let table_name = RwSignal::new(String::new());
    let engine = RwSignal::new(DatabaseEngineType::Undefined);
    let sql = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);

    let on_pick = move |picked: Vec<PickedFile>| {
        if let Some(first) = picked.first() {
            table_name.set(normalized_table_name(&first.path));
        }
        file.set(picked);
    };

    let generate = move |_| {
        let file_path = file.with_untracked(|f| f.first().map(|f| f.path.clone()).unwrap_or_default());
        let load = match GenerateLoadDataPayload::new(
            &file_path,
            &table_name.get_untracked(),
            engine.get_untracked(),
        ) {
            Ok(load) => load,
            Err(e) => {
                toast.warning(e.to_string());
                return;
            }
        };

        is_loading.set(true);
        spawn_local(async move {
            match api::generate_load_data_sql(load).await {
                Ok(generated) => {
                    sql.set(generated);
                    toast.success("SQL generated successfully");
                }
                Err(e) => toast.error(e.to_string()),
            }
            is_loading.set(false);
        });
    };

    let reset = move |_| {
        file.set(Vec::new());
        table_name.set(String::new());
        engine.set(DatabaseEngineType::Undefined);
        sql.set(String::new());
    };

    view! {
        <div class="page">
            <PageHeader
                title="Load data SQL"
                subtitle="Generate a bulk load statement for a CSV file"
                icon_name="file-code"
            />

            <Card>
                <div class="detail-form">
                    <Input
                        label="Table Name"
                        id="load-table-name"
                        placeholder="Enter table name"
                        required=true
                        value=table_name
                        on_input=Callback::new(move |v: String| table_name.set(v))
                    />
                    <SelectEngine
                        value=engine
                        on_change=Callback::new(move |e: DatabaseEngineType| engine.set(e))
                    />
                    <div class="form__group">
                        <label class="form__label">"CSV file"</label>
                        <CsvFilePicker files=file on_pick=Callback::new(on_pick) />
                    </div>
                </div>

                <div class="button-row button-row--center">
                    <button
                        class="button button--success button--round"
                        title="Generate the SQL statement"
                        disabled=move || is_loading.get()
                        on:click=generate
                    >
                        {icon("play")}
                    </button>
                    <button
                        class="button button--warning button--round"
                        title="Reset the form"
                        on:click=reset
                    >
                        {icon("eraser")}
                    </button>
                </div>

                <Loader visible=is_loading label="Generating SQL..." />

                <SqlViewer sql=sql />
            </Card>
        </div>
    }
}
