use super::super::SavedConfigsViewModel;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use contracts::domain::database_config::Item;
use leptos::prelude::*;

/// Dialog listing saved profiles. Clicking a name loads it and closes the
/// dialog; the trash button deletes without closing.
#[component]
pub fn ConfigItemList(vm: SavedConfigsViewModel, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal
            title="Saved configurations"
            on_close=on_close
            footer=move || view! {
                <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
                    "Close"
                </Button>
            }
        >
            <p class="text-muted">"Select a configuration to load it into the form."</p>
            <div class="config-list">
                <Show
                    when=move || vm.names.with(|items| !items.is_empty())
                    fallback=|| view! { <p class="config-list__empty">"No configurations found."</p> }
                >
                    <For
                        each=move || vm.names.get()
                        key=|item: &Item| item.id.clone()
                        children=move |item: Item| {
                            let name_for_load = item.id.clone();
                            let name_for_delete = item.id.clone();
                            let delete_title = format!("Delete item \"{}\"", item.id);
                            view! {
                                <div
                                    class="config-list__item"
                                    on:click=move |_| {
                                        vm.load_command(name_for_load.clone());
                                        on_close.run(());
                                    }
                                >
                                    <span class="config-list__name">{item.id}</span>
                                    <button
                                        class="button button--danger button--round"
                                        title=delete_title
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            vm.delete_command(name_for_delete.clone());
                                        }
                                    >
                                        {icon("trash")}
                                    </button>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>
        </Modal>
    }
}
