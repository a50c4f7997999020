use super::model::CopyRequest;
use crate::shared::components::activity_log::{ActivityLog, ActivityLogView};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use crate::shared::settings::use_settings;
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use thaw::Card;

#[component]
fn DatabaseTableFields(
    #[prop(into)]
    title: String,
    #[prop(into)]
    id_prefix: String,
    db: Signal<String>,
    on_db: Callback<String>,
    table: Signal<String>,
    on_table: Callback<String>,
) -> impl IntoView {
    view! {
        <Card>
            <h2 class="card__title">{title}</h2>
            <Input
                label="Database"
                id=format!("{}-db", id_prefix)
                placeholder="Name of the database"
                value=db
                on_input=on_db
            />
            <Input
                label="Table"
                id=format!("{}-table", id_prefix)
                placeholder="Name of the table"
                value=table
                on_input=on_table
            />
        </Card>
    }
}

#[component]
pub fn CopyPage() -> impl IntoView {
    let toast = use_toast();
    let log = ActivityLog::new(use_settings().get_untracked().log_limit);
    let request = RwSignal::new(CopyRequest::default());

    let copy = move |_| {
        let current = request.get_untracked();
        if let Err(e) = current.validate() {
            toast.warning(e.to_string());
            log.add(e.to_string());
            return;
        }
        log.add(format!("Copy requested: {}", current.describe()));
        toast.warning("Copying tables is not available yet");
    };

    view! {
        <div class="page">
            <PageHeader
                title="Copy"
                subtitle="Copy a table from one database to another"
                icon_name="copy"
            />

            <div class="detail-form detail-form--two-columns">
                <DatabaseTableFields
                    title="Source database"
                    id_prefix="source"
                    db=Signal::derive(move || request.with(|r| r.source_db.clone()))
                    on_db=Callback::new(move |v: String| request.update(|r| r.source_db = v))
                    table=Signal::derive(move || request.with(|r| r.source_table.clone()))
                    on_table=Callback::new(move |v: String| request.update(|r| r.source_table = v))
                />
                <DatabaseTableFields
                    title="Target database"
                    id_prefix="target"
                    db=Signal::derive(move || request.with(|r| r.target_db.clone()))
                    on_db=Callback::new(move |v: String| request.update(|r| r.target_db = v))
                    table=Signal::derive(move || request.with(|r| r.target_table.clone()))
                    on_table=Callback::new(move |v: String| request.update(|r| r.target_table = v))
                />
            </div>

            <div class="button-row button-row--center">
                <Button on_click=Callback::new(copy)>
                    {icon("copy")}
                    "Copy data"
                </Button>
            </div>

            <ActivityLogView log=log />
        </div>
    }
}
