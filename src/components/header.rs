use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::platform;
use crate::theme::{use_theme, Theme};

/// Scroll offset (in CSS pixels) past which the header switches to its
/// condensed, shadowed style.
const SCROLL_STYLE_THRESHOLD: f64 = 50.0;

/// True once the page has scrolled past the header restyle threshold.
fn past_scroll_threshold(offset: f64) -> bool {
    offset > SCROLL_STYLE_THRESHOLD
}

/// Page sections the header can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Portfolio,
    Skills,
    Resume,
    Testimonials,
    Contact,
}

impl Section {
    /// Every section, in page order. Drives the nav link row.
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Portfolio,
        Section::Skills,
        Section::Resume,
        Section::Testimonials,
        Section::Contact,
    ];

    /// DOM id of the section element (scroll target).
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Skills => "skills",
            Section::Resume => "resume",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    /// Link text shown in the nav row.
    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Portfolio => "Portfolio",
            Section::Skills => "Skills",
            Section::Resume => "Resume",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }
}

/// Subscribes to window scroll for the lifetime of the calling component
/// and reports whether the offset is past the restyle threshold.
///
/// The subscription is a guard dropped on unmount, which detaches the
/// listener.
fn use_scrolled_flag() -> Signal<bool> {
    let scrolled = use_signal(|| past_scroll_threshold(platform::scroll_offset()));

    #[cfg(target_arch = "wasm32")]
    {
        use std::rc::Rc;

        let mut flag = scrolled;
        use_hook(move || {
            Rc::new(platform::ScrollSubscription::subscribe(move |offset| {
                let past = past_scroll_threshold(offset);
                // Write only on transitions; scroll events fire per frame.
                if flag() != past {
                    flag.set(past);
                }
            }))
        });
    }

    scrolled
}

/// Fixed navigation header: section links, theme toggle, mobile drawer.
#[component]
pub fn Header() -> Element {
    let scrolled = use_scrolled_flag();
    let mut menu_open = use_signal(|| false);
    let mut theme = use_theme();

    // Smooth-scrolls to a section and closes the drawer. A missing target
    // leaves the drawer as-is.
    let mut navigate = move |section: Section| {
        if platform::scroll_to_element(section.id()) {
            menu_open.set(false);
        } else {
            debug!("no element with id '{}' to scroll to", section.id());
        }
    };

    let theme_glyph = match theme() {
        Theme::Light => "\u{1F319}",
        Theme::Dark => "\u{2600}\u{FE0F}",
    };

    rsx! {
        header {
            class: if scrolled() { "pf-header pf-header--scrolled" } else { "pf-header" },
            nav { class: "pf-nav",
                button {
                    class: "pf-logo",
                    onclick: move |_| navigate(Section::Hero),
                    span { class: "pf-logo-word", "port" }
                    span { class: "pf-logo-word pf-logo-word--accent", "folio" }
                }

                ul {
                    class: if menu_open() { "pf-nav-links pf-nav-links--open" } else { "pf-nav-links" },
                    for section in Section::ALL {
                        li { key: "{section.id()}",
                            button {
                                class: "pf-nav-link",
                                onclick: move |_| navigate(section),
                                {section.label()}
                            }
                        }
                    }
                }

                div { class: "pf-nav-actions",
                    button {
                        class: "pf-theme-toggle",
                        onclick: move |_| {
                            let next = theme().toggled();
                            theme.set(next);
                        },
                        "aria-label": "Toggle theme",
                        "{theme_glyph}"
                    }
                    button {
                        class: "pf-menu-toggle",
                        onclick: move |_| menu_open.set(!menu_open()),
                        "aria-label": "Toggle menu",
                        span {}
                        span {}
                        span {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_threshold_boundaries() {
        // 51 restyles the header, 49 does not.
        assert!(past_scroll_threshold(51.0));
        assert!(!past_scroll_threshold(49.0));
        // The comparison is strict: sitting exactly on the threshold is not past it.
        assert!(!past_scroll_threshold(50.0));
    }

    #[test]
    fn test_section_ids_unique_and_nonempty() {
        let mut ids: Vec<&str> = Section::ALL.iter().map(|s| s.id()).collect();
        assert!(ids.iter().all(|id| !id.is_empty()));

        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
