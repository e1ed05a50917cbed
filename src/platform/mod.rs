//! Browser glue: scroll position, smooth scrolling, preference storage.
//!
//! Everything here degrades to a no-op (or a default) when the browser API
//! is unavailable, so callers never handle errors. Off the web target the
//! whole surface compiles to stubs.

#[cfg(target_arch = "wasm32")]
mod web {
    use dioxus::logger::tracing::debug;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

    /// Current vertical scroll offset of the window, in CSS pixels.
    pub fn scroll_offset() -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    /// Smoothly scroll the element with `id` into view.
    ///
    /// Returns true when the element exists and was scrolled to; a missing
    /// element is a silent no-op.
    pub fn scroll_to_element(id: &str) -> bool {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return false;
        };
        let Some(element) = document.get_element_by_id(id) else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    /// Window scroll listener that detaches itself when dropped.
    pub struct ScrollSubscription {
        window: web_sys::Window,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl ScrollSubscription {
        /// Attach `on_scroll` to the window's scroll event. The callback
        /// receives the current vertical offset on every event. Returns
        /// `None` when there is no window to listen on.
        pub fn subscribe(mut on_scroll: impl FnMut(f64) + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let callback = Closure::wrap(Box::new(move |_: web_sys::Event| {
                on_scroll(scroll_offset());
            }) as Box<dyn FnMut(web_sys::Event)>);

            window
                .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                .ok()?;

            Some(Self { window, callback })
        }
    }

    impl Drop for ScrollSubscription {
        fn drop(&mut self) {
            let _ = self.window.remove_event_listener_with_callback(
                "scroll",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }

    /// Stamp the active theme onto the document root for the stylesheet.
    pub fn set_document_theme(value: &str) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());

        if let Some(root) = root {
            if root.set_attribute("data-theme", value).is_err() {
                debug!("could not set data-theme attribute");
            }
        }
    }

    /// Persist a preference string. Storage being unavailable (private
    /// browsing, quota) is not an error.
    pub fn store_preference(key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                debug!("could not persist preference '{}'", key);
            }
        }
    }

    /// Read a previously stored preference.
    pub fn load_preference(key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    /// Whether the OS currently asks for a dark color scheme.
    pub fn prefers_dark_scheme() -> bool {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::*;

// Off the web target (unit tests, the desktop shell) every browser call is
// a stub: nothing scrolls and no preference survives the session.
#[cfg(not(target_arch = "wasm32"))]
mod stub {
    pub fn scroll_offset() -> f64 {
        0.0
    }

    pub fn scroll_to_element(_id: &str) -> bool {
        false
    }

    pub fn set_document_theme(_value: &str) {}

    pub fn store_preference(_key: &str, _value: &str) {}

    pub fn load_preference(_key: &str) -> Option<String> {
        None
    }

    pub fn prefers_dark_scheme() -> bool {
        false
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use stub::*;
