use super::view_model::InsertViewModel;
use crate::domain::connection::ui::ConnectionForm;
use crate::shared::components::activity_log::ActivityLogView;
use crate::shared::components::file_picker::{CsvFilePicker, PickedFile};
use crate::shared::components::loader::Loader;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Input, RadioGroup, RadioOption};
use crate::shared::icons::icon;
use crate::shared::settings::use_settings;
use crate::shared::toast::use_toast;
use contracts::enums::InsertionMode;
use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn InsertPage() -> impl IntoView {
    let vm = InsertViewModel::new(use_toast(), use_settings());
    let connected = move || vm.connection.config.with(|c| c.is_connected);

    let mode_options: Vec<RadioOption> = InsertionMode::ALL
        .iter()
        .map(|mode| RadioOption::new(mode.code(), mode.label()).with_hint(mode.description()))
        .collect();

    view! {
        <div class="page">
            <PageHeader
                title="Insert"
                subtitle="Insert CSV files into a database table"
                icon_name="upload"
            />

            <Card>
                <ConnectionForm vm=vm.connection manual_first=true />

                <div class="detail-form detail-form--two-columns">
                    <div class="form__group">
                        <label class="form__label">"CSV files"</label>
                        <CsvFilePicker
                            files=vm.files
                            multiple=true
                            on_pick=Callback::new(move |files: Vec<PickedFile>| vm.set_files(files))
                        />
                    </div>
                    <Input
                        label="Name of the table"
                        id="table-name"
                        placeholder="Table Name"
                        required=true
                        value=vm.table_name
                        disabled=Signal::derive(move || !vm.is_table_name_editable())
                        on_input=Callback::new(move |v: String| vm.table_name.set(v))
                    />
                </div>

                <RadioGroup
                    label="Mode of insertion"
                    name="insertion-mode"
                    value=Signal::derive(move || vm.mode.get().code().to_string())
                    options=mode_options
                    on_change=Callback::new(move |code: String| {
                        match InsertionMode::from_code(&code) {
                            Ok(mode) => vm.set_mode(mode),
                            Err(e) => log::error!("{}", e),
                        }
                    })
                />

                <Loader visible=vm.is_loading label="Inserting data..." />

                <div class="button-row button-row--center">
                    <button
                        class="button button--round"
                        class:button--primary=connected
                        class:button--ghost=move || !connected()
                        title=move || {
                            if connected() {
                                "Insert data to the specified database"
                            } else {
                                "Connect to a database first"
                            }
                        }
                        disabled=move || vm.is_loading.get()
                        on:click=move |_| vm.insert_command()
                    >
                        {icon("upload")}
                    </button>
                    <button
                        class="button button--warning button--round"
                        title="Reset the form"
                        on:click=move |_| vm.reset_command()
                    >
                        {icon("eraser")}
                    </button>
                </div>
            </Card>

            <ActivityLogView log=vm.log />
        </div>
    }
}
