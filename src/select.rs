use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    /// An option whose label is its value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Labeled `<select>` that reports the chosen value upward and keeps no state of its own.
#[component]
pub fn LabeledSelect(
    #[prop(into)] label: String,
    #[prop(into)] options: Signal<Vec<SelectOption>>,
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
    // Leading option with an empty value, always present
    #[prop(optional, into)] placeholder: Option<String>,
    // Shown instead of the options while there are none
    #[prop(optional, into)] empty_text: Option<String>,
) -> impl IntoView {
    view! {
        <div class="select-wrapper">
            <label class="select-label">{label}</label>
            <select on:change:target=move |ev| on_select.run(ev.target().value())>
                {placeholder
                    .map(|text| {
                        view! {
                            <option value="" prop:selected=move || selected.get().is_empty()>
                                {text}
                            </option>
                        }
                    })}
                {move || {
                    let options = options.get();
                    if options.is_empty() {
                        empty_text
                            .clone()
                            .map(|text| view! { <option value="">{text}</option> })
                            .into_any()
                    } else {
                        options
                            .into_iter()
                            .map(|option| {
                                let value = option.value.clone();
                                view! {
                                    <option
                                        value=option.value
                                        prop:selected=move || selected.get() == value
                                    >
                                        {option.label}
                                    </option>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </select>
        </div>
    }
}
