use std::fmt;

use leptos::logging::log;
use leptos::prelude::*;

use crate::select::{LabeledSelect, SelectOption};

/// How the backend splits an uploaded document into chunks before embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SegmentationMethod {
    #[default]
    FixedSize,
    SentenceBased,
    OverlappingChunks,
}

impl SegmentationMethod {
    pub const ALL: [Self; 3] = [Self::FixedSize, Self::SentenceBased, Self::OverlappingChunks];

    pub fn label(self) -> &'static str {
        match self {
            Self::FixedSize => "Fixed Size",
            Self::SentenceBased => "Sentence-based",
            Self::OverlappingChunks => "Overlapping Chunks",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.label() == label)
    }
}

impl fmt::Display for SegmentationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[component]
pub fn SegmentationOptions(
    #[prop(into)] segmentation_method: Signal<SegmentationMethod>,
    #[prop(into)] on_segmentation_change: Callback<SegmentationMethod>,
) -> impl IntoView {
    let options = SegmentationMethod::ALL
        .into_iter()
        .map(|method| SelectOption::plain(method.label()))
        .collect::<Vec<_>>();

    view! {
        <rag-section>
            <h2>"Choose Segmentation"</h2>
            <LabeledSelect
                label="Segmentation method"
                options=Signal::stored(options)
                selected=Signal::derive(move || segmentation_method.get().label().to_string())
                on_select=Callback::new(move |label: String| {
                    match SegmentationMethod::from_label(&label) {
                        Some(method) => on_segmentation_change.run(method),
                        None => log!("[WARN] [SegmentationOptions] Unknown method '{}'.", label),
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
    fn default_is_fixed_size() {
        assert_eq!(SegmentationMethod::default(), SegmentationMethod::FixedSize);
    }

    #[test]
    fn labels_resolve_back() {
        for method in SegmentationMethod::ALL {
            assert_eq!(SegmentationMethod::from_label(method.label()), Some(method));
        }
        assert_eq!(SegmentationMethod::from_label("Paragraphs"), None);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(SegmentationMethod::SentenceBased.to_string(), "Sentence-based");
    }
}
