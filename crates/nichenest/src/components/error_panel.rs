use dioxus::prelude::*;

/// Error render mode: the fetch error message, shown verbatim.
///
/// There is no retry control; changing a filter or reloading re-triggers
/// the fetch.
#[component]
pub fn ErrorPanel(message: String) -> Element {
    rsx! {
        div { class: "nn-error-panel",
            h2 { class: "nn-error-title", "Oops! Something went wrong." }
            p { class: "nn-error-text", "{message}" }
        }
    }
}
