//! Stub renderers.

mod placeholder;

pub use placeholder::PlaceholderRenderer;
