use crate::shared::components::ui::Input;
use contracts::domain::database_config::DatabaseConfig;
use leptos::prelude::*;

/// Host, port, credentials and database name for network engines.
#[component]
pub fn DatabaseForm(
    config: RwSignal<DatabaseConfig>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="detail-form detail-form--two-columns">
            <Input
                label="URL of the database"
                id="db-host"
                placeholder="localhost"
                required=true
                disabled=disabled
                value=Signal::derive(move || config.with(|c| c.db_host.clone()))
                on_input=Callback::new(move |v: String| config.update(|c| c.db_host = v))
            />
            <Input
                label="Port"
                id="db-port"
                input_type="number"
                placeholder="Port"
                required=true
                disabled=disabled
                value=Signal::derive(move || config.with(|c| c.port.clone()))
                on_input=Callback::new(move |v: String| config.update(|c| c.port = v))
            />
            <Input
                label="Username"
                id="db-username"
                placeholder="Username"
                required=true
                disabled=disabled
                value=Signal::derive(move || config.with(|c| c.username.clone()))
                on_input=Callback::new(move |v: String| config.update(|c| c.username = v))
            />
            <Input
                label="Password"
                id="db-password"
                input_type="password"
                placeholder="Password"
                disabled=disabled
                value=Signal::derive(move || config.with(|c| c.password.clone()))
                on_input=Callback::new(move |v: String| config.update(|c| c.password = v))
            />
            <Input
                label="Name of the database"
                id="db-name"
                placeholder="Database Name"
                disabled=disabled
                value=Signal::derive(move || config.with(|c| c.db_name.clone()))
                on_input=Callback::new(move |v: String| config.update(|c| c.db_name = v))
            />
        </div>
    }
}
