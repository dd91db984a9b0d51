use leptos::prelude::*;

#[component]
pub fn RagQuery(#[prop(into)] on_query: Callback<String>) -> impl IntoView {
    let (query, set_query) = signal(String::new());

    view! {
        <rag-section>
            <h2>"Ask a Question"</h2>
            <input
                type="text"
                placeholder="Type your query..."
                prop:value=move || query.get()
                on:input:target=move |ev| set_query.set(ev.target().value())
            />
            <button
                type="button"
                data-role="primary"
                on:click=move |_| on_query.run(query.get_untracked())
                disabled=move || query.with(|q| q.trim().is_empty())
            >
                "Retrieve Context"
            </button>
        </rag-section>
    }
}
