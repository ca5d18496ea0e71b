use dioxus::prelude::*;

/// Loading indicator shown while a fetch is in flight.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "nn-spinner-wrap",
            role: "status",
            "aria-label": "Loading",
            div { class: "nn-spinner" }
        }
    }
}
