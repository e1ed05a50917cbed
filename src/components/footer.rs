use dioxus::prelude::*;

/// Static footer.
#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "pf-footer",
            span { class: "pf-footer-text",
                "Built with Rust and Dioxus \u{2022} No trackers, no cookies."
            }
        }
    }
}
