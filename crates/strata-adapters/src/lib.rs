//! Infrastructure adapters for Strata.
//!
//! This crate implements the ports defined in `strata-core::application::ports`.
//! It contains all I/O operations.

pub mod filesystem;
pub mod renderer;
pub mod stub_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::PlaceholderRenderer;
pub use stub_store::{BuiltinStubs, OverlayStubStore};
