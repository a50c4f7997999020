//! Clipboard access through the Web Clipboard API.

use wasm_bindgen_futures::JsFuture;

/// Copy text to the system clipboard. Resolves to `false` when the webview
/// refuses the write.
pub async fn copy_to_clipboard(text: &str) -> bool {
    match web_sys::window() {
        Some(window) => {
            let clipboard = window.navigator().clipboard();
            JsFuture::from(clipboard.write_text(text)).await.is_ok()
        }
        None => false,
    }
}
