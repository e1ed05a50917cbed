use dioxus::prelude::*;

// Static content sections. Each exists chiefly as a scroll target for the
// header; the copy lives inline.

#[component]
pub fn About() -> Element {
    rsx! {
        section { id: "about", class: "pf-section",
            h2 { class: "pf-section-title", "About" }
            p { class: "pf-section-subtitle",
                "Engineer with a bias for shipping: product teams, platform \
                 work, and the glue in between."
            }
        }
    }
}

#[component]
pub fn Portfolio() -> Element {
    rsx! {
        section { id: "portfolio", class: "pf-section",
            h2 { class: "pf-section-title", "Portfolio" }
            p { class: "pf-section-subtitle", "A few things I have built recently" }

            div { class: "pf-project-grid",
                div { class: "pf-project-card",
                    h3 { "Insight Dashboard" }
                    p { "Realtime analytics frontend with streaming charts and alerting." }
                }
                div { class: "pf-project-card",
                    h3 { "Docs Copilot" }
                    p { "Retrieval-augmented assistant that answers questions over internal docs." }
                }
                div { class: "pf-project-card",
                    h3 { "Deploy Bot" }
                    p { "Chat-driven release tooling with progressive rollouts and rollback." }
                }
            }
        }
    }
}

#[component]
pub fn Resume() -> Element {
    rsx! {
        section { id: "resume", class: "pf-section",
            h2 { class: "pf-section-title", "Resume" }
            p { class: "pf-section-subtitle",
                "Seven years across startups and platform teams. Full history \
                 available on request."
            }
        }
    }
}

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        section { id: "testimonials", class: "pf-section",
            h2 { class: "pf-section-title", "Testimonials" }
            p { class: "pf-section-subtitle",
                "\u{201C}Ships fast without cutting corners.\u{201D} \u{2014} a former teammate"
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        section { id: "contact", class: "pf-section",
            h2 { class: "pf-section-title", "Contact" }
            p { class: "pf-section-subtitle",
                "The fastest way to reach me is email: "
                a { href: "mailto:hello@example.dev", "hello@example.dev" }
            }
        }
    }
}
