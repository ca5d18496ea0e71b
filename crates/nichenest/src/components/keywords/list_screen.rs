use dioxus::prelude::*;

use nichenest_core::model::KeywordSummary;
use nichenest_core::view::ViewMode;

use crate::components::{
    use_fetch_sender, use_view_state, EmptyState, ErrorPanel, FetchMessage, KeywordCard,
    Pagination, Spinner,
};

/// List screen: renders exactly one of the spinner, the error panel, the
/// empty panel, or the keyword grid with its pagination controls.
#[component]
pub fn ListScreen() -> Element {
    let state = use_view_state();
    let mode = state.read().mode().clone();

    match mode {
        ViewMode::Loading => rsx! { Spinner {} },
        ViewMode::Error(message) => rsx! { ErrorPanel { message } },
        ViewMode::List(keywords) if keywords.is_empty() => rsx! { EmptyState {} },
        ViewMode::List(keywords) => rsx! {
            KeywordGrid { keywords }
            Pagination {}
        },
        // Detail data with no selection cannot be represented; the app
        // routes to DetailScreen whenever a keyword is selected.
        ViewMode::Details(_) => rsx! { Spinner {} },
    }
}

/// Card grid. Selecting a card switches to the detail screen and kicks off
/// the insight fetch.
#[component]
pub fn KeywordGrid(keywords: Vec<KeywordSummary>) -> Element {
    let mut state = use_view_state();
    let fetches = use_fetch_sender();

    rsx! {
        div { class: "nn-grid",
            for summary in keywords.iter() {
                KeywordCard {
                    key: "{summary.keyword}",
                    summary: summary.clone(),
                    on_select: move |keyword: String| {
                        if state.write().select_keyword(keyword.clone()) {
                            fetches.send(FetchMessage::LoadDetails(keyword));
                        }
                    },
                }
            }
        }
    }
}
