use super::{ConfigItemList, SaveConfigDialog};
use crate::domain::saved_config::SavedConfigsViewModel;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Save / list / load-last buttons shown above a connection form.
#[component]
pub fn ConfigButtons(vm: SavedConfigsViewModel) -> impl IntoView {
    let show_list = RwSignal::new(false);
    let show_save = RwSignal::new(false);

    view! {
        <div class="config-buttons">
            <button
                class="button button--primary button--round"
                title="Open the saved configurations"
                on:click=move |_| {
                    vm.refresh();
                    show_list.set(true);
                }
            >
                {icon("list")}
            </button>
            <button
                class="button button--secondary button--round"
                title="Load the last saved configuration"
                on:click=move |_| vm.load_last_command()
            >
                {icon("download")}
            </button>
            <button
                class="button button--success button--round"
                title="Save the current configuration"
                on:click=move |_| show_save.set(true)
            >
                {icon("save")}
            </button>

            <Show when=move || show_list.get()>
                <ConfigItemList vm=vm on_close=Callback::new(move |_| show_list.set(false)) />
            </Show>
            <Show when=move || show_save.get()>
                <SaveConfigDialog vm=vm on_close=Callback::new(move |_| show_save.set(false)) />
            </Show>
        </div>
    }
}
