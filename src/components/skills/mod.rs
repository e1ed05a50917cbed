//! Skills showcase: category filter row, capped card grid, show-more
//! control, and a static summary strip.
//!
//! All selection rules live in [`crate::skills`]; this module only renders
//! the [`Selection`](crate::skills::Selection) computed for the current
//! state.

mod skill_card;

use dioxus::prelude::*;

use crate::skills::{CategoryFilter, ShowcaseState, SKILLS};
use crate::utils::SignalExt;
use skill_card::SkillCard;

/// Filterable skills grid with per-category disclosure caps.
#[component]
pub fn SkillsShowcase() -> Element {
    let mut state = use_signal(ShowcaseState::default);

    let current = state();
    let selection = current.selection(SKILLS);

    rsx! {
        section { id: "skills", class: "pf-section",
            h2 { class: "pf-section-title", "Skills & Expertise" }
            p { class: "pf-section-subtitle",
                "Technologies and tools I work with to bring ideas to life"
            }

            div { class: "pf-filters",
                for filter in CategoryFilter::ALL {
                    button {
                        key: "{filter.label()}",
                        class: if current.filter() == filter {
                            "pf-filter-btn pf-filter-btn--active"
                        } else {
                            "pf-filter-btn"
                        },
                        onclick: move |_| state.mutate(|s| s.set_filter(filter)),
                        {filter.label()}
                    }
                }
            }

            div { class: "pf-skills-grid",
                for skill in selection.visible.iter().copied() {
                    SkillCard { key: "{skill.name}", skill: *skill }
                }
            }

            if selection.has_hidden() {
                div { class: "pf-show-more",
                    button {
                        class: "pf-btn pf-btn--primary",
                        onclick: move |_| state.mutate(|s| s.toggle_expanded()),
                        {selection.toggle_label()}
                    }
                }
            }

            div { class: "pf-summary-grid",
                div { class: "pf-summary-card",
                    div { class: "pf-summary-icon", "\u{1F4BB}" }
                    h3 { "Frontend Development" }
                    p { "Responsive, interactive, and performant user interfaces" }
                }
                div { class: "pf-summary-card",
                    div { class: "pf-summary-icon", "\u{2699}\u{FE0F}" }
                    h3 { "Backend Development" }
                    p { "Scalable server-side applications and APIs" }
                }
                div { class: "pf-summary-card",
                    div { class: "pf-summary-icon", "\u{1F916}" }
                    h3 { "AI & Machine Learning" }
                    p { "Intelligent systems with LangChain, AutoGen and ML libraries" }
                }
                div { class: "pf-summary-card",
                    div { class: "pf-summary-icon", "\u{1F6E0}\u{FE0F}" }
                    h3 { "DevOps & Tools" }
                    p { "CI/CD pipelines and cloud infrastructure" }
                }
            }
        }
    }
}
