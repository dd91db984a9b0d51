use leptos::prelude::*;

use crate::dom_utils;

pub const ACCEPTED_DOCUMENT_TYPES: &str = ".pdf,.txt,.csv,.md";

#[component]
pub fn RagUpload(
    #[prop(into)] selected_file: Signal<Option<String>>,
    #[prop(into)] on_file_upload: Callback<web_sys::File>,
) -> impl IntoView {
    view! {
        <rag-section>
            <h2>"Upload Documents"</h2>
            <input
                type="file"
                accept=ACCEPTED_DOCUMENT_TYPES
                on:change:target=move |ev| {
                    if let Some(file) = dom_utils::selected_file(&ev.target()) {
                        on_file_upload.run(file);
                    }
                }
            />
            {move || {
                selected_file
                    .get()
                    .map(|name| {
                        view! {
                            <p class="selected-file">
                                <span style="font-weight: 500">"Selected File:"</span>
                                " "
                                {name}
                            </p>
                        }
                    })
            }}
        </rag-section>
    }
}
