use crate::shared::components::ui::Select;
use contracts::enums::DatabaseEngineType;
use leptos::prelude::*;

/// Engine dropdown. Choosing an engine also resets the port to its default.
#[component]
pub fn SelectEngine(
    #[prop(into)]
    value: Signal<DatabaseEngineType>,
    on_change: Callback<DatabaseEngineType>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let options: Vec<(String, String)> = DatabaseEngineType::ALL
        .iter()
        .map(|engine| {
            (
                engine.driver_code().to_string(),
                engine.display_name().to_string(),
            )
        })
        .collect();

    view! {
        <Select
            label="Database engine"
            id="db-engine"
            value=Signal::derive(move || value.get().driver_code().to_string())
            options=Signal::stored(options)
            placeholder="Select a database"
            disabled=disabled
            on_change=Callback::new(move |code: String| {
                match DatabaseEngineType::parse(&code) {
                    Ok(engine) => on_change.run(engine),
                    Err(e) => log::error!("{}", e),
                }
            })
        />
    }
}
