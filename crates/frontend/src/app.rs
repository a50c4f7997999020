use crate::routes::routes::AppRoutes;
use crate::shared::settings::SettingsContext;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Preferences persisted in localStorage (theme, default mode, separator).
    provide_context(SettingsContext::load());

    // Toasts are the only feedback channel for backend failures.
    provide_context(ToastService::new());

    view! { <AppRoutes /> }
}
