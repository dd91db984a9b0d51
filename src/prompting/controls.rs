use leptos::prelude::*;

use crate::api::UsageMetadata;
use crate::select::{LabeledSelect, SelectOption};

#[component]
pub fn ProviderSelector(
    #[prop(into)] providers: Signal<Vec<String>>,
    #[prop(into)] selected_provider: Signal<String>,
    #[prop(into)] on_select_provider: Callback<String>,
) -> impl IntoView {
    let options = Signal::derive(move || {
        providers
            .get()
            .into_iter()
            .map(SelectOption::plain)
            .collect::<Vec<_>>()
    });
    view! {
        <LabeledSelect
            label="Select Provider:"
            options=options
            selected=selected_provider
            on_select=on_select_provider
            placeholder="Select a Provider"
        />
    }
}

#[component]
pub fn ModelSelector(
    #[prop(into)] models: Signal<Vec<String>>,
    #[prop(into)] selected_model: Signal<String>,
    #[prop(into)] on_select_model: Callback<String>,
) -> impl IntoView {
    let options = Signal::derive(move || {
        models
            .get()
            .into_iter()
            .map(SelectOption::plain)
            .collect::<Vec<_>>()
    });
    view! {
        <LabeledSelect
            label="Select Model:"
            options=options
            selected=selected_model
            on_select=on_select_model
            empty_text="Select a Model"
        />
    }
}

#[component]
pub fn PromptInput(
    #[prop(into)] prompt: Signal<String>,
    #[prop(into)] on_prompt_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">"Enter your prompt:"</label>
            <textarea
                class="prompt-input"
                placeholder="Type your prompt here..."
                prop:value=move || prompt.get()
                on:input:target=move |ev| on_prompt_change.run(ev.target().value())
            />
        </div>
    }
}

#[component]
pub fn ResponseOutput(
    #[prop(into)] result: Signal<String>,
    #[prop(into)] usage: Signal<Option<UsageMetadata>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">"Model Response:"</label>
            <textarea class="response-output" readonly prop:value=move || result.get() />
            {move || {
                usage
                    .get()
                    .map(|usage| {
                        view! {
                            <response-usage style="text-align: right; font-size: 0.8em; opacity: 0.6; margin-top: 4px;">
                                {format_usage(&usage)}
                            </response-usage>
                        }
                    })
            }}
        </div>
    }
}

pub fn format_usage(usage: &UsageMetadata) -> String {
    format!(
        "tokens in: {}, out: {}, total: {}",
        usage.input_tokens, usage.output_tokens, usage.total_tokens
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_line() {
        let usage = UsageMetadata {
            input_tokens: 12,
            output_tokens: 30,
            total_tokens: 42,
        };
        assert_eq!(format_usage(&usage), "tokens in: 12, out: 30, total: 42");
    }
}
