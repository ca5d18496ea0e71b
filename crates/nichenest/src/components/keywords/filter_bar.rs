use dioxus::prelude::*;

use nichenest_core::model::TimeRange;

use crate::components::{use_fetch_sender, use_view_state, FetchMessage};

/// Time-range selector and low-competition toggle.
///
/// Both controls reset the page to 1 and re-fetch; the state machine makes
/// a click on the already-active range inert.
#[component]
pub fn FilterBar() -> Element {
    let mut state = use_view_state();
    let fetches = use_fetch_sender();

    let current = state.read().time_range();
    let low_competition = state.read().low_competition_only();

    rsx! {
        section { class: "nn-filter-bar",
            div {
                class: "nn-range-group",
                role: "group",
                "aria-label": "Time range filter",
                for range in TimeRange::ALL {
                    button {
                        key: "{range.label()}",
                        class: if range == current {
                            "nn-range-btn nn-range-btn--active"
                        } else {
                            "nn-range-btn"
                        },
                        "aria-pressed": if range == current { "true" } else { "false" },
                        onclick: move |_| {
                            if state.write().set_time_range(range) {
                                fetches.send(FetchMessage::LoadKeywords);
                            }
                        },
                        "{range.label()}"
                    }
                }
            }

            div { class: "nn-toggle-row",
                span {
                    id: "nn-low-competition-label",
                    class: "nn-toggle-label",
                    "Low-Competition Mode"
                }
                button {
                    class: if low_competition {
                        "nn-toggle nn-toggle--on"
                    } else {
                        "nn-toggle"
                    },
                    role: "switch",
                    "aria-checked": if low_competition { "true" } else { "false" },
                    "aria-labelledby": "nn-low-competition-label",
                    onclick: move |_| {
                        if state.write().toggle_low_competition() {
                            fetches.send(FetchMessage::LoadKeywords);
                        }
                    },
                    span { class: "nn-toggle-knob", "aria-hidden": "true" }
                }
            }
        }
    }
}
