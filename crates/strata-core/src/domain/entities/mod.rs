pub mod common;
pub mod config;
pub mod module;
pub mod module_structure;

pub use crate::domain::DomainError;
pub use config::ModulesConfig;
pub use module::Module;
pub use module_structure::ModuleStructure;
