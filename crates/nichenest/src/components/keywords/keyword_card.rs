use dioxus::prelude::*;

use nichenest_core::model::KeywordSummary;

use crate::utils::format_volume;

/// One keyword opportunity card: keyword text, volume, revenue estimate,
/// activated by click or keyboard Enter.
#[component]
pub fn KeywordCard(summary: KeywordSummary, on_select: EventHandler<String>) -> Element {
    let volume = format_volume(summary.volume);
    let keyword_for_click = summary.keyword.clone();
    let keyword_for_enter = summary.keyword.clone();

    rsx! {
        article {
            class: "nn-card",
            tabindex: "0",
            onclick: move |_| on_select.call(keyword_for_click.clone()),
            onkeypress: move |evt| {
                if evt.key() == Key::Enter {
                    on_select.call(keyword_for_enter.clone());
                }
            },

            h3 { class: "nn-card-keyword", "{summary.keyword}" }
            div { class: "nn-card-meta",
                div { class: "nn-card-stat",
                    span { class: "nn-card-stat-label", "Volume" }
                    span { class: "nn-card-stat-value", "{volume}/mo" }
                }
                div { class: "nn-card-stat",
                    span { class: "nn-card-stat-label", "Revenue" }
                    span { class: "nn-card-stat-value", "{summary.revenue}" }
                }
            }
            span { class: "nn-card-cta", "View insights →" }
        }
    }
}
