use super::model::{filter_items, selection_text};
use super::view_model::DownloadViewModel;
use crate::domain::connection::ui::ConnectionForm;
use crate::shared::components::activity_log::ActivityLogView;
use crate::shared::components::file_picker::DirectoryPicker;
use crate::shared::components::loader::Loader;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Checkbox, Input, Select};
use crate::shared::icons::icon;
use crate::shared::settings::use_settings;
use crate::shared::toast::use_toast;
use contracts::commands::response::ComboItem;
use contracts::enums::SeparatorType;
use leptos::prelude::*;
use thaw::Card;

/// Searchable checkbox list of the tables of the connected database.
#[component]
fn TableMultiSelect(vm: DownloadViewModel) -> impl IntoView {
    let open = RwSignal::new(false);
    let query = RwSignal::new(String::new());
    let visible = Memo::new(move |_| {
        let q = query.get();
        vm.tables.with(|items| filter_items(items, &q))
    });

    view! {
        <div class="multi-select">
            <button
                class="multi-select__trigger"
                disabled=move || vm.tables.with(|t| t.is_empty())
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {move || vm.tables.with(|items| vm.selected.with(|s| selection_text(items, s)))}
            </button>
            <Show when=move || open.get()>
                <div class="multi-select__panel">
                    <Input
                        placeholder="Search item..."
                        value=query
                        on_input=Callback::new(move |v: String| query.set(v))
                    />
                    <div class="multi-select__list">
                        <Show
                            when=move || visible.with(|v| !v.is_empty())
                            fallback=|| view! { <p class="text-muted">"No item found."</p> }
                        >
                            <For
                                each=move || visible.get()
                                key=|item: &ComboItem| item.value.clone()
                                children=move |item: ComboItem| {
                                    let value = item.value.clone();
                                    let value_for_check = item.value.clone();
                                    view! {
                                        <Checkbox
                                            class="multi-select__item"
                                            label=item.label
                                            checked=Signal::derive(move || {
                                                vm.selected.with(|s| s.contains(&value_for_check))
                                            })
                                            on_change=Callback::new(move |checked: bool| {
                                                vm.set_table_selected(&value, checked)
                                            })
                                        />
                                    }
                                }
                            />
                        </Show>
                    </div>
                    <div class="multi-select__footer">
                        <Button variant="ghost" size="sm" on_click=Callback::new(move |_| vm.deselect_all())>
                            "Deselect All"
                        </Button>
                        <Button variant="ghost" size="sm" on_click=Callback::new(move |_| vm.select_all())>
                            "Select All"
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn DownloadPage() -> impl IntoView {
    let vm = DownloadViewModel::new(use_toast(), use_settings());

    // Table list follows the connection state.
    let connected = Memo::new(move |_| vm.connection.config.with(|c| c.is_connected));
    Effect::new(move |_| {
        if connected.get() {
            vm.load_tables_command();
        } else {
            vm.clear_tables();
        }
    });

    let separator_options: Vec<(String, String)> = SeparatorType::ALL
        .iter()
        .map(|sep| (sep.as_char().to_string(), sep.label().to_string()))
        .collect();

    view! {
        <div class="page">
            <PageHeader
                title="Download"
                subtitle="Export tables to delimited files"
                icon_name="download"
            >
                <Button
                    variant="secondary"
                    size="sm"
                    title="Reload the table list"
                    disabled=Signal::derive(move || !connected.get())
                    on_click=Callback::new(move |_| vm.load_tables_command())
                >
                    {icon("list")}
                    "Refresh tables"
                </Button>
            </PageHeader>

            <Card>
                <ConnectionForm vm=vm.connection />

                <div class="detail-form detail-form--two-columns">
                    <div class="form__group">
                        <label class="form__label">"Tables"</label>
                        <TableMultiSelect vm=vm />
                    </div>
                    <Select
                        label="Separator"
                        id="separator"
                        value=Signal::derive(move || vm.separator.get().as_char().to_string())
                        options=Signal::stored(separator_options)
                        on_change=Callback::new(move |raw: String| {
                            match SeparatorType::from_char(&raw) {
                                Ok(sep) => vm.set_separator(sep),
                                Err(e) => log::error!("{}", e),
                            }
                        })
                    />
                    <div class="form__group">
                        <label class="form__label">"Destination folder"</label>
                        <DirectoryPicker
                            path=vm.location
                            on_pick=Callback::new(move |path: String| vm.location.set(path))
                        />
                    </div>
                </div>

                <Loader visible=vm.is_loading_tables label="Loading tables..." />
                <Loader visible=vm.is_downloading label="Exporting tables..." />

                <div class="button-row button-row--center">
                    <Button
                        variant="success"
                        disabled=Signal::derive(move || vm.is_downloading.get())
                        on_click=Callback::new(move |_| vm.download_command())
                    >
                        {icon("download")}
                        "Download"
                    </Button>
                </div>
            </Card>

            <ActivityLogView log=vm.log />
        </div>
    }
}
