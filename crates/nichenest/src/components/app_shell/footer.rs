use dioxus::prelude::*;

/// Footer crediting the generative backend.
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "nn-footer",
            span { class: "nn-footer-text", "Powered by Gemini" }
        }
    }
}
