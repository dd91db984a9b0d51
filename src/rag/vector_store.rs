use std::fmt;

use leptos::logging::log;
use leptos::prelude::*;

use crate::select::{LabeledSelect, SelectOption};

/// Backend index used for similarity retrieval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VectorStore {
    #[default]
    Faiss,
    Pinecone,
    ChromaDb,
}

impl VectorStore {
    pub const ALL: [Self; 3] = [Self::Faiss, Self::Pinecone, Self::ChromaDb];

    pub fn label(self) -> &'static str {
        match self {
            Self::Faiss => "FAISS",
            Self::Pinecone => "Pinecone",
            Self::ChromaDb => "ChromaDB",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|store| store.label() == label)
    }
}

impl fmt::Display for VectorStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[component]
pub fn VectorStoreSelection(
    #[prop(into)] vector_store: Signal<VectorStore>,
    #[prop(into)] on_select_vector_store: Callback<VectorStore>,
) -> impl IntoView {
    let options = VectorStore::ALL
        .into_iter()
        .map(|store| SelectOption::plain(store.label()))
        .collect::<Vec<_>>();

    view! {
        <rag-section>
            <h2>"Select Vector Database"</h2>
            <LabeledSelect
                label="Vector store"
                options=Signal::stored(options)
                selected=Signal::derive(move || vector_store.get().label().to_string())
                on_select=Callback::new(move |label: String| {
                    match VectorStore::from_label(&label) {
                        Some(store) => on_select_vector_store.run(store),
                        None => log!("[WARN] [VectorStoreSelection] Unknown store '{}'.", label),
                    }
                })
            />
        </rag-section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_faiss() {
        assert_eq!(VectorStore::default(), VectorStore::Faiss);
    }

    #[test]
    fn labels_resolve_back() {
        for store in VectorStore::ALL {
            assert_eq!(VectorStore::from_label(store.label()), Some(store));
        }
        assert_eq!(VectorStore::from_label("faiss"), None);
    }
}
