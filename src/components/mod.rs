//! UI components for the portfolio site.
//!
//! # Layout
//!
//! - [`Header`]: fixed navigation bar (scroll styling, section links, theme
//!   toggle, mobile drawer)
//! - [`Hero`] and the `sections` components: the scroll targets the header
//!   navigates to
//! - `skills`: the filterable skills showcase
//! - [`Footer`]: static footer
//!
//! The theme context is provided once at the [`App`] root; see
//! [`crate::theme`].

mod footer;
mod header;
mod hero;
mod sections;
pub mod skills;

pub use footer::Footer;
pub use header::{Header, Section};
pub use hero::Hero;
pub use sections::{About, Contact, Portfolio, Resume, Testimonials};
pub use skills::SkillsShowcase;

use crate::theme;
use dioxus::prelude::*;

/// Root component: provides the theme context, then renders the page.
#[component]
pub fn App() -> Element {
    theme::provide_theme();

    rsx! {
        div { class: "pf-app",
            Header {}
            main { class: "pf-main",
                Hero {}
                About {}
                Portfolio {}
                SkillsShowcase {}
                Resume {}
                Testimonials {}
                Contact {}
            }
            Footer {}
        }
    }
}
