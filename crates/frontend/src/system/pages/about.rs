use crate::shared::app_info::{host_app_info, HostAppInfo};
use crate::shared::bridge::{invoke_no_args, BridgeError};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use contracts::commands::response::AboutInfo;
use contracts::commands::GET_ABOUT_INFO;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Card;

const LINKS: [(&str, &str); 3] = [
    ("Tauri Documentation", "https://tauri.app/"),
    ("GitHub Repository", "https://github.com/Maxime-Cllt/FileFlow"),
    ("License Information (MIT)", "https://opensource.org/licenses/MIT"),
];

async fn get_about_info() -> Result<AboutInfo, BridgeError> {
    let raw: String = invoke_no_args(GET_ABOUT_INFO).await?;
    serde_json::from_str(&raw).map_err(|e| BridgeError::Serde(e.to_string()))
}

/// Version line: the host's version wins over the backend's.
fn version_text(host: Option<&HostAppInfo>, about: Option<&AboutInfo>) -> String {
    let version = host
        .map(|h| h.version.clone())
        .or_else(|| about.map(|a| a.version.clone()))
        .filter(|v| !v.is_empty());
    match version {
        Some(v) => format!("Version: {}", v),
        None => "Version: unknown".to_string(),
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let host = RwSignal::new(None::<HostAppInfo>);
    let about = RwSignal::new(None::<AboutInfo>);

    spawn_local(async move {
        host.set(host_app_info().await);
        match get_about_info().await {
            Ok(info) => about.set(Some(info)),
            // Older backends do not have the command.
            Err(e) => log::info!("get_about_info unavailable: {}", e),
        }
    });

    view! {
        <div class="page">
            <PageHeader title="About FileFlow" icon_name="info" />

            <Card>
                <h2 class="about__name">
                    {move || host.with(|h| h.as_ref().map(|h| h.name.clone()).unwrap_or_else(|| "FileFlow".to_string()))}
                </h2>
                <p class="about__version">
                    {move || host.with(|h| about.with(|a| version_text(h.as_ref(), a.as_ref())))}
                </p>
                {move || about.get().and_then(|a| {
                    (!a.description.is_empty()).then(|| view! { <p>{a.description}</p> })
                })}
                {move || about.get().and_then(|a| {
                    (!a.authors.is_empty()).then(|| view! {
                        <p class="text-muted">"Authors: "{a.authors.join(", ")}</p>
                    })
                })}
            </Card>

            <div class="detail-form detail-form--two-columns">
                <Card>
                    <h2 class="card__title">"Features"</h2>
                    <ul>
                        <li>"Insert CSV files into MySQL, MariaDB, Postgres or SQLite."</li>
                        <li>"Generate bulk load statements for large files."</li>
                        <li>"Export tables to delimited files."</li>
                        <li>"Saved connection configurations."</li>
                        <li>"Low resource usage, powered by Tauri."</li>
                    </ul>
                </Card>
                <Card>
                    <h2 class="card__title">"Roadmap"</h2>
                    <ul>
                        <li>"Copy tables between databases."</li>
                        <li>"More customization options."</li>
                        <li>"Improved performance and stability."</li>
                    </ul>
                </Card>
            </div>

            <Card>
                <h2 class="card__title">"Learn More"</h2>
                <div class="about__links">
                    {LINKS
                        .into_iter()
                        .map(|(label, href)| view! {
                            <a href=href target="_blank" rel="noopener noreferrer">
                                {icon("external")}
                                {label}
                            </a>
                        })
                        .collect_view()}
                </div>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_text() {
        let host = HostAppInfo {
            name: "FileFlow".into(),
            version: "1.0.1".into(),
        };
        let about = AboutInfo {
            version: "0.9.0".into(),
            ..AboutInfo::default()
        };
        assert_eq!(version_text(Some(&host), Some(&about)), "Version: 1.0.1");
        assert_eq!(version_text(None, Some(&about)), "Version: 0.9.0");
        assert_eq!(version_text(None, None), "Version: unknown");
    }
}
