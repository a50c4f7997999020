use super::super::SavedConfigsViewModel;
use crate::shared::components::ui::Select;
use leptos::prelude::*;

/// Dropdown of saved profiles; choosing one loads it.
#[component]
pub fn SelectDatabaseConfig(vm: SavedConfigsViewModel) -> impl IntoView {
    let options = Signal::derive(move || {
        vm.names.with(|items| {
            items
                .iter()
                .map(|item| (item.id.clone(), item.id.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <Select
            label="Choose a database"
            id="saved-config"
            value=vm.selected
            options=options
            placeholder="Select a configuration"
            on_change=Callback::new(move |name: String| {
                if !name.is_empty() {
                    vm.load_command(name);
                }
            })
        />
    }
}
