//! Stub storage adapters.

mod builtin;
mod overlay;

pub use builtin::BuiltinStubs;
pub use overlay::OverlayStubStore;
