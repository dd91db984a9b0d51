mod controls;
mod credential_loader;
pub mod credentials;
pub mod model_list;

use leptos::logging::log;
use leptos::{prelude::*, task::spawn_local};

use crate::api::{BackendClient, GenerateRequest};
use crate::dom_utils;
use crate::state::PlaygroundState;
use controls::{ModelSelector, PromptInput, ProviderSelector, ResponseOutput};
use credential_loader::CredentialLoader;
use credentials::Credentials;
use model_list::{ModelListUpdate, ModelQuery};

pub const MISSING_KEY_MESSAGE: &str = "Please load an API key for the selected provider.";

/// Re-fetches the model list whenever the selected provider or the credentials change.
pub fn track_model_list(state: PlaygroundState) {
    Effect::new(move |_| {
        let provider = state.selected_provider.get();
        let credentials = state.credentials.get();
        let client = state.client();
        spawn_local(async move {
            let update = refresh_model_list(&client, &provider, &credentials).await;
            state.model_list.update(|list| list.apply(update));
        });
    });
}

/// Fetches the models for `provider` with its key from `credentials`.
///
/// Providers without a key get [`ModelListUpdate::Clear`] and no request. Failed or
/// malformed responses are logged and yield [`ModelListUpdate::Keep`].
pub async fn refresh_model_list(
    client: &BackendClient,
    provider: &str,
    credentials: &Credentials,
) -> ModelListUpdate {
    let Some(query) = ModelQuery::for_provider(provider, credentials) else {
        return ModelListUpdate::Clear;
    };
    match client.list_models(&query.provider, &query.api_key).await {
        Ok(models) => {
            log!(
                "[INFO] [ModelList] {} model(s) for '{}'.",
                models.len(),
                query.provider
            );
            ModelListUpdate::Replace(models)
        }
        Err(err) => {
            log!(
                "[ERROR] [ModelList] Error getting models for '{}': {:#}",
                query.provider,
                err
            );
            ModelListUpdate::Keep
        }
    }
}

/// The generation request for the current selection and the key to send it with.
/// `None` when the provider has no key.
pub fn build_generate_request(
    credentials: &Credentials,
    provider: &str,
    model: &str,
    prompt: &str,
) -> Option<(GenerateRequest, String)> {
    let api_key = credentials.key(provider)?.to_string();
    let request = GenerateRequest {
        prompt: prompt.to_string(),
        provider: provider.to_string(),
        model: model.to_string(),
    };
    Some((request, api_key))
}

fn submit_prompt(state: PlaygroundState) {
    let provider = state.selected_provider.get_untracked();
    let model = state.model_list.with_untracked(|list| list.selected.clone());
    let prompt = state.prompt.get_untracked();
    let prepared = state.credentials.with_untracked(|credentials| {
        build_generate_request(credentials, &provider, &model, &prompt)
    });
    let Some((request, api_key)) = prepared else {
        dom_utils::alert(MISSING_KEY_MESSAGE);
        return;
    };

    let client = state.client();
    state.begin_generation();
    spawn_local(async move {
        match client.generate(&request, &api_key).await {
            Ok(response) => {
                state.result.set(response.content);
                state.usage.set(response.usage_metadata);
            }
            Err(err) => log!("[ERROR] [BasicPromptingPage] Error calling backend: {:#}", err),
        }
        state.end_generation();
    });
}

#[component]
pub fn BasicPromptingPage() -> impl IntoView {
    let state = use_context::<PlaygroundState>().expect("PlaygroundState context not found");

    let providers = Memo::new(move |_| {
        state.credentials.with(|credentials| {
            credentials
                .providers()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
    });
    let models = Memo::new(move |_| state.model_list.with(|list| list.models.clone()));
    let selected_model = Memo::new(move |_| state.model_list.with(|list| list.selected.clone()));

    view! {
        <form
            class="prompting-page"
            on:submit=move |ev| {
                ev.prevent_default();
                submit_prompt(state);
            }
        >
            <CredentialLoader on_credentials_loaded=Callback::new(move |credentials: Credentials| {
                state.credentials.set(credentials)
            }) />
            <ProviderSelector
                providers=providers
                selected_provider=state.selected_provider
                on_select_provider=Callback::new(move |provider: String| {
                    state.selected_provider.set(provider)
                })
            />
            <ModelSelector
                models=models
                selected_model=selected_model
                on_select_model=Callback::new(move |model: String| {
                    state.model_list.update(|list| list.select(model))
                })
            />
            <PromptInput
                prompt=state.prompt
                on_prompt_change=Callback::new(move |prompt: String| state.prompt.set(prompt))
            />
            <div style="display: flex; align-items: center; gap: 8px;">
                <button type="submit" data-role="primary">
                    "Generate"
                </button>
                {move || {
                    state.is_generating()
                        .then(|| {
                            view! {
                                <span class="spinner"></span>
                                "Generating..."
                            }
                        })
                }}
            </div>
            <ResponseOutput result=state.result usage=state.usage />
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_selection_and_key() {
        let credentials = Credentials::parse(r#"{"p":"key-p"}"#).unwrap();
        let (request, api_key) = build_generate_request(&credentials, "p", "m", "hello").unwrap();
        assert_eq!(
            request,
            GenerateRequest {
                prompt: "hello".to_string(),
                provider: "p".to_string(),
                model: "m".to_string(),
            }
        );
        assert_eq!(api_key, "key-p");
    }

    #[test]
    fn no_request_without_key() {
        let credentials = Credentials::parse(r#"{"p":"key-p","q":""}"#).unwrap();
        assert!(build_generate_request(&credentials, "q", "m", "hello").is_none());
        assert!(build_generate_request(&credentials, "", "m", "hello").is_none());
        assert!(build_generate_request(&Credentials::default(), "p", "m", "hello").is_none());
    }

    #[test]
    fn empty_prompt_and_model_still_submit() {
        let credentials = Credentials::parse(r#"{"p":"key-p"}"#).unwrap();
        let (request, _) = build_generate_request(&credentials, "p", "", "").unwrap();
        assert_eq!(request.model, "");
        assert_eq!(request.prompt, "");
    }
}
