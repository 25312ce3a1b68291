//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "create a module" or "show a module".

pub mod component_service;
pub mod inspection_service;
pub mod publish_service;
pub mod scaffold_service;

mod support;

pub use component_service::{ComponentRequest, ComponentService, GeneratedComponent};
pub use inspection_service::{InspectionService, ModuleDetails, ModuleSummary, RouteFiles};
pub use publish_service::{PublishReport, PublishRequest, PublishService};
pub use scaffold_service::{
    FileFailure, ModuleOutcome, ModuleReport, Registration, ScaffoldOptions, ScaffoldService,
};
pub use support::WriteStatus;
