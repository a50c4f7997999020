pub mod top_header;

use crate::shared::toast::Toaster;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |           routed page (Outlet)           |
/// +------------------------------------------+
/// ```
///
/// The toast stack floats above everything in the bottom right corner.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <main class="app-main">
                <Outlet />
            </main>
            <Toaster />
        </div>
    }
}
