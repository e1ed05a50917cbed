use dioxus::prelude::*;

use crate::skills::Skill;

/// One skill: name, numeric level, and a proportional bar.
#[component]
pub fn SkillCard(skill: Skill) -> Element {
    rsx! {
        div { class: "pf-skill",
            div { class: "pf-skill-header",
                span { class: "pf-skill-name", "{skill.name}" }
                span { class: "pf-skill-level", "{skill.level}%" }
            }
            div { class: "pf-skill-bar",
                div {
                    class: "pf-skill-progress",
                    style: "width: {skill.level}%",
                }
            }
        }
    }
}
