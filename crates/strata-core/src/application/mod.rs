//! Application layer for Strata.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (scaffold, generate, inspect, publish)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    ComponentRequest, ComponentService, FileFailure, GeneratedComponent, InspectionService,
    ModuleDetails, ModuleOutcome, ModuleReport, ModuleSummary, PublishReport, PublishRequest,
    PublishService, Registration, RouteFiles, ScaffoldOptions, ScaffoldService, WriteStatus,
};

pub use ports::{Filesystem, StubStore, TemplateRenderer};

pub use error::ApplicationError;
