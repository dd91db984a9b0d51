use anyhow::anyhow;
use leptos::logging::log;
use leptos::prelude::window;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

/// Shows a blocking browser alert.
pub fn alert(message: &str) {
    if let Err(err) = window().alert_with_message(message) {
        log!("[ERROR] [dom_utils] Failed to show alert: {:?}", err);
    }
}

pub async fn read_file_text(file: &File) -> anyhow::Result<String> {
    let value = JsFuture::from(file.text())
        .await
        .map_err(|err| anyhow!("Failed to read '{}': {:?}", file.name(), err))?;
    value
        .as_string()
        .ok_or_else(|| anyhow!("'{}' did not read as text", file.name()))
}

pub async fn read_file_bytes(file: &File) -> anyhow::Result<Vec<u8>> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| anyhow!("Failed to read '{}': {:?}", file.name(), err))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// First file of an `<input type="file">`, if the user picked one.
pub fn selected_file(input: &web_sys::HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}
