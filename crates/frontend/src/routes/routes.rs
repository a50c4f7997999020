use crate::layout::Shell;
use crate::system::pages::about::AboutPage;
use crate::system::pages::help::HelpPage;
use crate::usecases::u101_insert_csv::InsertPage;
use crate::usecases::u102_generate_load_data::LoadDataSqlPage;
use crate::usecases::u103_download_table::DownloadPage;
use crate::usecases::u104_copy_table::CopyPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

/// Path, menu label and icon of every page reachable from the menu bar.
pub const NAV_ITEMS: [(&str, &str, &str); 6] = [
    ("/", "Insert", "upload"),
    ("/upload", "Load", "file-code"),
    ("/download", "Download", "download"),
    ("/copy", "Copy", "copy"),
    ("/help", "Help", "help"),
    ("/about", "About", "info"),
];

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="page-not-found">"Page not found"</p> }>
                <ParentRoute path=path!("") view=Shell>
                    <Route path=path!("") view=InsertPage />
                    <Route path=path!("upload") view=LoadDataSqlPage />
                    <Route path=path!("download") view=DownloadPage />
                    <Route path=path!("copy") view=CopyPage />
                    <Route path=path!("help") view=HelpPage />
                    <Route path=path!("about") view=AboutPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
