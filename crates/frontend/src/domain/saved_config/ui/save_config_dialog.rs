use super::super::SavedConfigsViewModel;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use leptos::prelude::*;

/// Asks for a profile name and saves the current connection form under it.
#[component]
pub fn SaveConfigDialog(vm: SavedConfigsViewModel, on_close: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let save = move |_| vm.save_command(name.get_untracked(), on_close);

    view! {
        <Modal
            title="Save configuration"
            on_close=on_close
            footer=move || view! {
                <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
                    "Cancel"
                </Button>
                <Button on_click=Callback::new(save)>
                    {icon("save")}
                    "Save"
                </Button>
            }
        >
            <Input
                label="Name of the configuration"
                id="config-name"
                placeholder="My database"
                required=true
                value=name
                on_input=Callback::new(move |v: String| name.set(v))
            />
        </Modal>
    }
}
