use crate::shared::icons::icon;
use leptos::prelude::*;

/// Title block at the top of every page, with room for page-level actions.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
    /// Icon name from [`icon`]
    #[prop(optional, into)]
    icon_name: Option<&'static str>,
    /// Page level actions, right aligned
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {icon_name.map(|name| view! { <span class="page-header__icon">{icon(name)}</span> })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|children| children())}
            </div>
        </div>
    }
}
