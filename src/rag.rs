mod query;
pub mod segmentation;
mod upload;
pub mod vector_store;

use leptos::logging::log;
use leptos::{prelude::*, task::spawn_local};

use crate::dom_utils;
use crate::state::PlaygroundState;
use query::RagQuery;
use segmentation::{SegmentationMethod, SegmentationOptions};
use upload::RagUpload;
use vector_store::{VectorStore, VectorStoreSelection};

/// Document upload, chunking/index choice and retrieval queries.
///
/// All state lives here and is dropped when the user leaves the tab.
#[component]
pub fn RagPage() -> impl IntoView {
    let state = use_context::<PlaygroundState>().expect("PlaygroundState context not found");

    let uploaded_file = RwSignal::new(None::<String>);
    let segmentation_method = RwSignal::new(SegmentationMethod::default());
    let vector_store = RwSignal::new(VectorStore::default());
    let retrieved_context = RwSignal::new(String::new());

    let on_file_upload = Callback::new(move |file: web_sys::File| {
        let file_name = file.name();
        uploaded_file.set(Some(file_name.clone()));
        let client = state.client();
        spawn_local(async move {
            let uploaded = match dom_utils::read_file_bytes(&file).await {
                Ok(bytes) => client.upload_document(file_name.clone(), bytes).await,
                Err(err) => Err(err),
            };
            match uploaded {
                Ok(data) => log!("[INFO] [RagPage] File processed: {}", data),
                Err(err) => log!("[ERROR] [RagPage] Error uploading '{}': {:#}", file_name, err),
            }
        });
    });

    let on_query = Callback::new(move |query: String| {
        let client = state.client();
        spawn_local(async move {
            match client.query(&query).await {
                Ok(context) => retrieved_context.set(context),
                Err(err) => log!("[ERROR] [RagPage] Error querying RAG: {:#}", err),
            }
        });
    });

    view! {
        <div class="rag-page">
            <h1>"RAG Playground"</h1>
            <RagUpload selected_file=uploaded_file on_file_upload=on_file_upload />
            <SegmentationOptions
                segmentation_method=segmentation_method
                on_segmentation_change=Callback::new(move |method: SegmentationMethod| {
                    segmentation_method.set(method)
                })
            />
            <VectorStoreSelection
                vector_store=vector_store
                on_select_vector_store=Callback::new(move |store: VectorStore| {
                    vector_store.set(store)
                })
            />
            <RagQuery on_query=on_query />
            <Show when=move || retrieved_context.with(|context| !context.is_empty())>
                <div class="retrieved-context">
                    <h2>"Retrieved Context:"</h2>
                    <p>{move || retrieved_context.get()}</p>
                </div>
            </Show>
        </div>
    }
}
