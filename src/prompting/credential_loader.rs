use leptos::logging::log;
use leptos::{prelude::*, task::spawn_local};

use super::credentials::Credentials;
use crate::dom_utils;

pub const INVALID_FILE_MESSAGE: &str = "Invalid JSON file format.";

#[component]
pub fn CredentialLoader(#[prop(into)] on_credentials_loaded: Callback<Credentials>) -> impl IntoView {
    let on_change = move |input: web_sys::HtmlInputElement| {
        let Some(file) = dom_utils::selected_file(&input) else {
            return;
        };
        spawn_local(async move {
            let loaded = dom_utils::read_file_text(&file)
                .await
                .and_then(|text| Credentials::parse(&text));
            match loaded {
                Ok(credentials) => {
                    log!(
                        "[INFO] [CredentialLoader] Loaded keys for {} provider(s) from '{}'.",
                        credentials.len(),
                        file.name()
                    );
                    on_credentials_loaded.run(credentials);
                }
                Err(err) => {
                    log!("[ERROR] [CredentialLoader] Rejected '{}': {:#}", file.name(), err);
                    dom_utils::alert(INVALID_FILE_MESSAGE);
                }
            }
        });
    };

    view! {
        <div class="field">
            <label class="field-label">"Upload a JSON file with provider API keys:"</label>
            <input type="file" accept=".json" on:change:target=move |ev| on_change(ev.target()) />
        </div>
    }
}
