//! Core domain layer for Strata.
//!
//! Pure module-layout logic: name casing, path and namespace mapping,
//! placeholder rendering, folder classification and provider registration
//! text edits. All I/O goes through the ports defined in the application
//! layer.
//!
//! - **No I/O**: no filesystem or process access
//! - **Synchronous**: every function here is a plain computation
//! - **Value types**: configuration and names are immutable once built

pub mod classification;
pub mod entities;
pub mod error;
pub mod naming;
pub mod paths;
pub mod placeholders;
pub mod registration;
pub mod suffix;
pub mod value_objects;

mod validation;

pub use classification::{FolderClassification, FolderReferences, classify};
pub use entities::{
    common::RelativePath,
    config::ModulesConfig,
    module::{Module, provider_class_name},
    module_structure::{DirectoryToCreate, FileToWrite, FsEntry, ModuleStructure},
};
pub use error::{DomainError, ErrorCategory};
pub use placeholders::{ReplacementMap, placeholder_tokens, render};
pub use suffix::apply_suffix;
pub use validation::DomainValidator;
pub use value_objects::{ComponentKind, ComponentName, ModuleName, is_valid_identifier};
