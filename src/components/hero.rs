use dioxus::prelude::*;

/// Landing section and default scroll target.
#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "hero", class: "pf-hero",
            h1 { class: "pf-hero-title", "Full-Stack Engineer" }
            p { class: "pf-hero-subtitle",
                "I design and build responsive web applications, resilient \
                 backend services, and AI-assisted tooling."
            }
        }
    }
}
