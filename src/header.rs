use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Top-level views, each behind its own route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    BasicPrompting,
    Rag,
    Settings,
}

impl Tab {
    pub const ALL: [Self; 3] = [Self::BasicPrompting, Self::Rag, Self::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Self::BasicPrompting => "Basic Prompting",
            Self::Rag => "RAG",
            Self::Settings => "Settings",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::BasicPrompting => "/",
            Self::Rag => "/rag",
            Self::Settings => "/settings",
        }
    }

    pub fn from_path(path: &str) -> Self {
        if path.starts_with("/rag") {
            Self::Rag
        } else if path.starts_with("/settings") {
            Self::Settings
        } else {
            Self::BasicPrompting
        }
    }
}

#[component]
pub fn TabBar(
    #[prop(into)] active_tab: Signal<Tab>,
    on_select: impl Fn(Tab) + Clone + 'static,
) -> impl IntoView {
    view! {
        <div class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    let on_select = on_select.clone();
                    view! {
                        <button
                            on:click=move |_| on_select(tab)
                            data-active=move || (active_tab.get() == tab).to_string()
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();
    let active_tab = Memo::new(move |_| location.pathname.with(|path| Tab::from_path(path)));

    view! {
        <header>
            <TabBar
                active_tab=active_tab
                on_select=move |tab: Tab| navigate(tab.path(), Default::default())
            />
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_map_back_to_tabs() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_path(tab.path()), tab);
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_prompting() {
        assert_eq!(Tab::from_path("/nowhere"), Tab::BasicPrompting);
        assert_eq!(Tab::from_path(""), Tab::BasicPrompting);
        assert_eq!(Tab::from_path("/rag/extra"), Tab::Rag);
    }
}
