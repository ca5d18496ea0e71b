use dioxus::prelude::*;

use nichenest_core::model::{KeywordDetails, RelatedKeyword};
use nichenest_core::view::ViewMode;

use crate::components::{use_fetch_sender, use_view_state, ErrorPanel, FetchMessage, Spinner};
use crate::utils::format_volume;

/// Detail screen for the selected keyword: back control, headline, and the
/// insight sections (or the spinner / error panel while they load).
#[component]
pub fn DetailScreen(keyword: String) -> Element {
    let mut state = use_view_state();
    let fetches = use_fetch_sender();
    let mode = state.read().mode().clone();

    rsx! {
        section { class: "nn-detail",
            button {
                class: "nn-back-link",
                onclick: move |_| {
                    if state.write().clear_selection() {
                        fetches.send(FetchMessage::LoadKeywords);
                    }
                },
                "← Back to Keywords"
            }
            h2 { class: "nn-detail-title", "Insights for \"{keyword}\"" }

            {match mode {
                ViewMode::Loading => rsx! { Spinner {} },
                ViewMode::Error(message) => rsx! { ErrorPanel { message } },
                ViewMode::Details(details) => rsx! { DetailSections { details } },
                // List data cannot appear while a selection is active; the
                // state machine discards list completions in that case.
                ViewMode::List(_) => rsx! {},
            }}
        }
    }
}

/// The three insight sections: related keywords, topics, and author tips.
#[component]
fn DetailSections(details: KeywordDetails) -> Element {
    rsx! {
        div { class: "nn-detail-sections",
            section { class: "nn-detail-card",
                h3 { class: "nn-detail-heading", "Related Keywords" }
                div { class: "nn-table-scroll",
                    table { class: "nn-related-table",
                        thead {
                            tr {
                                th { "Keyword" }
                                th { "Volume" }
                                th { "Competitors" }
                                th { "Type" }
                            }
                        }
                        tbody {
                            for related in details.related_keywords.iter() {
                                RelatedKeywordRow {
                                    key: "{related.keyword}",
                                    related: related.clone(),
                                }
                            }
                        }
                    }
                }
            }

            section { class: "nn-detail-card",
                h3 { class: "nn-detail-heading", "Profitable Topic Ideas" }
                ul { class: "nn-detail-list",
                    for topic in details.profitable_topics.iter() {
                        li { key: "{topic}", "{topic}" }
                    }
                }
            }

            section { class: "nn-detail-card",
                h3 { class: "nn-detail-heading", "Tips for Authors" }
                ul { class: "nn-detail-list",
                    for tip in details.author_tips.iter() {
                        li { key: "{tip}", "{tip}" }
                    }
                }
            }
        }
    }
}

/// One row of the related-keywords table.
#[component]
fn RelatedKeywordRow(related: RelatedKeyword) -> Element {
    let volume = format_volume(related.volume);
    let competitors = format_volume(related.competitors);
    let class = related.class.label();

    rsx! {
        tr {
            td { "{related.keyword}" }
            td { "{volume}" }
            td { "{competitors}" }
            td { "{class}" }
        }
    }
}
