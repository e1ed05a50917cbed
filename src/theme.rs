//! Light/dark theme shared through Dioxus context.
//!
//! The provider owns the only theme state in the app. Components read the
//! signal with [`use_theme`] and write the flipped value back; the provider
//! mirrors each change onto the document root (`data-theme`) and into
//! `localStorage`.

use dioxus::prelude::*;

use crate::platform;

/// Key the remembered theme is stored under.
const THEME_STORAGE_KEY: &str = "folio.theme";

/// The two color schemes the stylesheet knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The other scheme.
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value used for the `data-theme` attribute and the stored preference.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Inverse of [`Theme::as_str`]. Unknown values are rejected so a
    /// corrupted stored preference falls through to detection.
    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Install the theme context at the app root.
///
/// Call once, before any component calls [`use_theme`].
pub fn provide_theme() -> Signal<Theme> {
    let theme = use_signal(initial_theme);
    use_context_provider(|| theme);

    // Mirror every change onto the document and into storage. Also runs on
    // mount, which stamps the initial attribute.
    use_effect(move || {
        let current = theme();
        platform::set_document_theme(current.as_str());
        platform::store_preference(THEME_STORAGE_KEY, current.as_str());
    });

    theme
}

/// Read the theme signal installed by [`provide_theme`].
pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

/// Stored preference first, then the OS-level hint, then light.
fn initial_theme() -> Theme {
    if let Some(stored) = platform::load_preference(THEME_STORAGE_KEY) {
        if let Some(theme) = Theme::parse(&stored) {
            return theme;
        }
    }

    if platform::prefers_dark_scheme() {
        Theme::Dark
    } else {
        Theme::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_an_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_string_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        assert_eq!(Theme::parse(""), None);
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::parse("Dark"), None); // stored values are lowercase
    }
}
