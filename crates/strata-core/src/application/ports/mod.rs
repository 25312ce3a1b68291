//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `strata-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory and file operations
//!   - `StubStore`: stub text lookup by id
//!   - `TemplateRenderer`: placeholder substitution
//!
//! - **Driving (Input) Ports**: the services themselves, called by the CLI

pub mod output;

pub use output::{Filesystem, StubStore, TemplateRenderer};
