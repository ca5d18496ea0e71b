use dioxus::prelude::*;

/// Hexagonal nest logo, inlined so it inherits the heading color.
#[component]
fn Logo() -> Element {
    rsx! {
        svg {
            class: "nn-logo",
            width: "48",
            height: "48",
            view_box: "0 0 24 24",
            fill: "none",
            xmlns: "http://www.w3.org/2000/svg",
            path {
                d: "M12 2L2 7V17L12 22L22 17V7L12 2Z",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
            path {
                d: "M2 7L12 12L22 7",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
            path {
                d: "M12 12V22",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
            path {
                d: "M17 4.5L7 9.5",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}

/// Title header with logo and tagline, shown on the list screen only.
#[component]
pub fn AppBar() -> Element {
    rsx! {
        header { class: "nn-appbar",
            h1 { class: "nn-title",
                Logo {}
                "NicheNest"
            }
            p { class: "nn-tagline", "Uncover Profitable Book Niches on Amazon" }
        }
    }
}
