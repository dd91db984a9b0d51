//! Browser playground for an LLM backend: prompt a provider's model, or upload
//! documents and run retrieval queries against the backend's RAG endpoints.

pub mod api;
pub mod config;
mod dom_utils;
pub mod header;
pub mod prompting;
pub mod rag;
mod select;
pub mod settings;
pub mod state;

use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use leptos_use::storage::use_local_storage;

use crate::config::BACKEND_URL_STORAGE_KEY;
use crate::header::Header;
use crate::prompting::BasicPromptingPage;
use crate::rag::RagPage;
use crate::settings::Settings;
use crate::state::PlaygroundState;

#[component]
pub fn App() -> impl IntoView {
    let (backend_url, set_backend_url, _) =
        use_local_storage::<String, FromToStringCodec>(BACKEND_URL_STORAGE_KEY);
    let state = PlaygroundState::new(backend_url, set_backend_url);
    provide_context(state);
    prompting::track_model_list(state);

    view! {
        <Router>
            <Header />
            <main>
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=BasicPromptingPage />
                    <Route path=path!("/rag") view=RagPage />
                    <Route path=path!("/settings") view=Settings />
                </Routes>
            </main>
        </Router>
    }
}
