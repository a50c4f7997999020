use super::{DatabaseForm, SelectEngine, SqliteForm};
use crate::domain::connection::ConnectionViewModel;
use crate::domain::saved_config::ui::{ConfigButtons, SelectDatabaseConfig};
use crate::domain::saved_config::SavedConfigsViewModel;
use crate::shared::icons::icon;
use crate::shared::toast::use_toast;
use contracts::enums::DatabaseEngineType;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormTab {
    Saved,
    Manual,
}

/// Round button that connects or disconnects; green while connected.
#[component]
pub fn ConnectButton(vm: ConnectionViewModel) -> impl IntoView {
    let connected = move || vm.config.with(|c| c.is_connected);

    view! {
        <button
            class="button button--round"
            class:button--success=connected
            class:button--warning=move || !connected()
            disabled=move || vm.is_connecting.get()
            title=move || if connected() { "Disconnect from database" } else { "Connect to database" }
            on:click=move |_| vm.toggle_command()
        >
            {move || if connected() { icon("unplug") } else { icon("plug") }}
        </button>
    }
}

/// Connection settings with saved profiles: a "Saved" tab to pick a profile
/// and a "Manual" tab with the engine specific fields.
#[component]
pub fn ConnectionForm(
    vm: ConnectionViewModel,
    /// Start on the "Manual" tab
    #[prop(optional)]
    manual_first: bool,
) -> impl IntoView {
    let saved = SavedConfigsViewModel::new(vm.config, use_toast());
    let tab = RwSignal::new(if manual_first { FormTab::Manual } else { FormTab::Saved });
    let is_connected = Signal::derive(move || vm.config.with(|c| c.is_connected));
    // Memo so typing in a field does not rebuild the form.
    let engine = Memo::new(move |_| vm.config.with(|c| c.db_driver));

    saved.refresh();
    vm.check_connection();

    let tab_button = move |target: FormTab, label: &'static str| {
        view! {
            <button
                class="tabs__item"
                class:tabs__item--active=move || tab.get() == target
                on:click=move |_| tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="connection-form">
            <div class="connection-form__header">
                <h2 class="connection-form__title">"Database Configuration"</h2>
                <ConfigButtons vm=saved />
            </div>

            <div class="tabs">
                {tab_button(FormTab::Saved, "Saved")}
                {tab_button(FormTab::Manual, "Manual")}
            </div>

            {move || match tab.get() {
                FormTab::Saved => view! { <SelectDatabaseConfig vm=saved /> }.into_any(),
                FormTab::Manual => view! {
                    <SelectEngine
                        value=engine
                        disabled=is_connected
                        on_change=Callback::new(move |engine: DatabaseEngineType| vm.select_engine(engine))
                    />
                    {move || {
                        match engine.get() {
                            DatabaseEngineType::Sqlite => view! { <SqliteForm config=vm.config /> }.into_any(),
                            DatabaseEngineType::Undefined => view! {
                                <p class="text-muted">"Select a database engine to fill in its settings."</p>
                            }.into_any(),
                            _ => view! { <DatabaseForm config=vm.config disabled=is_connected /> }.into_any(),
                        }
                    }}
                }.into_any(),
            }}

            <div class="connection-form__status">
                <ConnectButton vm=vm />
                <span class="connection-form__status-text">
                    {move || {
                        vm.config.with(|c| {
                            if c.is_connected {
                                format!("Connected to {}", c.target_label())
                            } else {
                                "Not connected".to_string()
                            }
                        })
                    }}
                </span>
            </div>
        </div>
    }
}
