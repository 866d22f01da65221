//! Clipboard helper for the "copy credentials" action.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard and run `on_success` once it landed.
///
/// Failures (no clipboard permission, insecure context) are only logged.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => on_success(),
            Err(e) => log::error!("clipboard write failed: {:?}", e),
        }
    });
}
