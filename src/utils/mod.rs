//! Small shared helpers.

mod signal_ext;

pub use signal_ext::SignalExt;
