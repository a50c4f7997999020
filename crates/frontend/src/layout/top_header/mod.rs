//! TopHeader component - application menu bar.
//!
//! Contains:
//! - Application title
//! - One link per routed page
//! - Theme toggle

use crate::routes::routes::NAV_ITEMS;
use crate::shared::icons::icon;
use crate::shared::settings::use_settings;
use crate::shared::theme::Theme;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn TopHeader() -> impl IntoView {
    let settings = use_settings();
    let location = use_location();

    let toggle_theme = move |_| {
        let next = match settings.theme() {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        settings.update(|s| s.theme = next);
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("database")}
                <span class="top-header__title">"FileFlow"</span>
            </div>

            <nav class="top-header__menu">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(href, title, icon_name)| {
                        let is_active = move || location.pathname.get() == href;
                        view! {
                            <A href=href>
                                <span
                                    class="top-header__menu-item"
                                    class:top-header__menu-item--active=is_active
                                >
                                    {icon(icon_name)}
                                    <span>{title}</span>
                                </span>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_theme
                    title=move || match settings.theme() {
                        Theme::Light => "Switch to dark theme",
                        Theme::Dark => "Switch to light theme",
                    }
                >
                    {move || match settings.theme() {
                        Theme::Light => icon("moon"),
                        Theme::Dark => icon("sun"),
                    }}
                </button>
            </div>
        </div>
    }
}
