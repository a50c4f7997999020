//! Application name and version reported by the host.

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "app"], js_name = getName, catch)]
    async fn tauri_get_name() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "app"], js_name = getVersion, catch)]
    async fn tauri_get_version() -> Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostAppInfo {
    pub name: String,
    pub version: String,
}

/// `None` when not running inside the desktop host.
pub async fn host_app_info() -> Option<HostAppInfo> {
    let name = tauri_get_name().await.ok()?.as_string()?;
    let version = tauri_get_version().await.ok()?.as_string()?;
    Some(HostAppInfo { name, version })
}
