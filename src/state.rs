use leptos::prelude::*;

use crate::api::{BackendClient, UsageMetadata};
use crate::prompting::credentials::Credentials;
use crate::prompting::model_list::ModelList;

#[derive(Clone, Copy)]
pub struct PlaygroundState {
    // Persisted in local storage
    pub backend_url: Signal<String>,
    pub set_backend_url: WriteSignal<String>,
    // Basic prompting, kept across tab switches
    pub credentials: RwSignal<Credentials>,
    pub selected_provider: RwSignal<String>,
    pub model_list: RwSignal<ModelList>,
    pub prompt: RwSignal<String>,
    pub result: RwSignal<String>,
    pub usage: RwSignal<Option<UsageMetadata>>,
    // Generate requests still in flight
    pub generating: RwSignal<usize>,
}

impl PlaygroundState {
    pub fn new(backend_url: Signal<String>, set_backend_url: WriteSignal<String>) -> Self {
        Self {
            backend_url,
            set_backend_url,
            credentials: RwSignal::new(Credentials::default()),
            selected_provider: RwSignal::new(String::new()),
            model_list: RwSignal::new(ModelList::default()),
            prompt: RwSignal::new(String::new()),
            result: RwSignal::new(String::new()),
            usage: RwSignal::new(None),
            generating: RwSignal::new(0),
        }
    }

    /// A client for the backend URL as it is right now. Does not subscribe to URL changes.
    pub fn client(&self) -> BackendClient {
        BackendClient::new(self.backend_url.get_untracked())
    }

    pub fn begin_generation(&self) {
        self.generating.update(|count| *count += 1);
    }

    pub fn end_generation(&self) {
        self.generating.update(|count| *count = count.saturating_sub(1));
    }

    /// Tracked read; re-runs the caller when a request starts or finishes.
    pub fn is_generating(&self) -> bool {
        self.generating.get() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn new_state() -> PlaygroundState {
        let backend_url = RwSignal::new(String::new());
        PlaygroundState::new(backend_url.into(), backend_url.write_only())
    }

    #[test]
    fn generation_count_outlives_the_page() {
        let owner = Owner::new();
        owner.set();

        let state = new_state();
        let page_copy = state;
        page_copy.begin_generation();
        page_copy.begin_generation();
        // A page mounted later reads the same context
        assert_eq!(state.generating.get_untracked(), 2);

        state.end_generation();
        assert_eq!(state.generating.get_untracked(), 1);
        state.end_generation();
        state.end_generation();
        assert_eq!(state.generating.get_untracked(), 0);
    }

    #[test]
    fn client_uses_stored_backend_url() {
        let owner = Owner::new();
        owner.set();

        let state = new_state();
        state.set_backend_url.set("http://backend:9000/".to_string());
        assert_eq!(state.client().base_url(), "http://backend:9000");
    }
}
