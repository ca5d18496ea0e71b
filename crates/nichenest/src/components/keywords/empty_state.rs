use dioxus::prelude::*;

/// Shown when a fetch succeeds but yields no keywords.
#[component]
pub fn EmptyState() -> Element {
    rsx! {
        section { class: "nn-empty-state",
            div { class: "nn-empty-card",
                h2 { class: "nn-empty-title", "No keywords found." }
                p { class: "nn-empty-text",
                    "Please try a different filter or try again later."
                }
            }
        }
    }
}
