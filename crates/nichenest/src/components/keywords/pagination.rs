use dioxus::prelude::*;

use crate::components::{use_fetch_sender, use_view_state, FetchMessage};

/// Previous/Next controls with the current page indicator.
///
/// Disabled at the bounds and while a fetch is in flight; the state-machine
/// transitions are additionally inert in those cases, so a stray click
/// never triggers a fetch.
#[component]
pub fn Pagination() -> Element {
    let mut state = use_view_state();
    let fetches = use_fetch_sender();

    let page = state.read().page();
    let can_prev = state.read().can_go_prev();
    let can_next = state.read().can_go_next();

    rsx! {
        nav { class: "nn-pagination",
            button {
                class: "nn-btn nn-btn--page",
                disabled: !can_prev,
                onclick: move |_| {
                    if state.write().prev_page() {
                        fetches.send(FetchMessage::LoadKeywords);
                    }
                },
                "← Previous"
            }
            span { class: "nn-page-indicator", "Page {page}" }
            button {
                class: "nn-btn nn-btn--page",
                disabled: !can_next,
                onclick: move |_| {
                    if state.write().next_page() {
                        fetches.send(FetchMessage::LoadKeywords);
                    }
                },
                "Next →"
            }
        }
    }
}
