//! Theme handling.
//!
//! The selected theme is part of [`AppSettings`](crate::shared::settings::AppSettings)
//! and persisted with it; this module only knows how to apply one to the page.

use serde::{Deserialize, Serialize};
use web_sys::window;

/// Available themes in the application.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the theme name as a string (used for CSS class and stylesheet path).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn css_path(&self) -> String {
        format!("/static/themes/{0}/{0}.css", self.as_str())
    }
}

/// Swap the theme stylesheet and set `data-theme` on `<body>`.
pub fn apply_theme(theme: Theme) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    let head = match document.head() {
        Some(h) => h,
        None => return,
    };

    if let Ok(Some(existing)) = document.query_selector("#theme-stylesheet") {
        existing.remove();
    }

    if let Ok(link) = document.create_element("link") {
        let _ = link.set_attribute("id", "theme-stylesheet");
        let _ = link.set_attribute("rel", "stylesheet");
        let _ = link.set_attribute("href", &theme.css_path());
        let _ = head.append_child(&link);
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}
