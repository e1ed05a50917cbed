//! Extension trait for Dioxus signals to reduce mutation boilerplate.
//!
//! Signals hand out clones on read, so updating one field takes three
//! steps: read-clone, mutate, write back. `SignalExt::mutate` folds that
//! into one call:
//!
//! ```ignore
//! state.mutate(|s| s.set_filter(filter));
//! ```

use dioxus::prelude::*;

/// Mutation helper for `Signal<T>`.
///
/// Implemented for all `Signal<T>` where `T: Clone + 'static`.
pub trait SignalExt<T: Clone + 'static> {
    /// Clone the current value, let `f` mutate it, write it back.
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T);
}

impl<T: Clone + 'static> SignalExt<T> for Signal<T> {
    fn mutate<F>(&mut self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut value = self.read().clone();
        f(&mut value);
        self.set(value);
    }
}

// Tests for SignalExt would need a Dioxus runtime; the method is a thin
// wrapper over Signal::read()/set() and is exercised by the showcase view.
