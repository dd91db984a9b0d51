use leptos::logging::log;
use leptos::{prelude::*, task::spawn_local};

use crate::config::{normalize_base_url, DEFAULT_BACKEND_URL};
use crate::state::PlaygroundState;

#[component]
pub fn Settings() -> impl IntoView {
    let state = use_context::<PlaygroundState>().expect("PlaygroundState context not found");

    let (checking, set_checking) = signal(false);
    let (providers, set_providers) = signal::<Option<Result<Vec<String>, String>>>(None);

    let check_connection = move |_| {
        set_checking.set(true);
        let client = state.client();
        spawn_local(async move {
            let outcome = client.list_providers().await.map_err(|err| {
                log!("[ERROR] [Settings] Error getting providers: {:#}", err);
                format!("{err:#}")
            });
            set_providers.set(Some(outcome));
            set_checking.set(false);
        });
    };

    view! {
        <settings-section>
            <settings-label>"Backend URL"</settings-label>
            <input
                type="text"
                prop:value=move || state.backend_url.get()
                on:input:target=move |ev| state.set_backend_url.set(ev.target().value())
                placeholder=DEFAULT_BACKEND_URL
            />
            <settings-hint>
                {move || format!("Requests go to {}", normalize_base_url(&state.backend_url.get()))}
            </settings-hint>
        </settings-section>
        <settings-section>
            <settings-label>"Backend providers"</settings-label>
            <button data-size="compact" on:click=check_connection disabled=checking>
                "Check connection"
            </button>
            {move || match providers.get() {
                None => ().into_any(),
                Some(Ok(providers)) if providers.is_empty() => {
                    view! { <p>"The backend reports no providers."</p> }.into_any()
                }
                Some(Ok(providers)) => {
                    view! {
                        <ul class="provider-list">
                            {providers
                                .into_iter()
                                .map(|provider| view! { <li>{provider}</li> })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
                Some(Err(err)) => {
                    view! {
                        <error-box>
                            <div style="font-weight: bold">"error"</div>
                            {err}
                        </error-box>
                    }
                        .into_any()
                }
            }}
        </settings-section>
    }
}
