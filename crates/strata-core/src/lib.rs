//! Strata Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Strata
//! module scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           strata-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Scaffold, Component, Inspection,      │
//! │   Publish)                              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, StubStore, Renderer)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     strata-adapters (Infrastructure)    │
//! │  (LocalFilesystem, OverlayStubStore)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (naming, paths, placeholders,          │
//! │   classification, registration)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use strata_core::prelude::*;
//!
//! let service = ScaffoldService::new(config, stubs, renderer, filesystem);
//! let outcomes = service.create_modules(&["Blog"], ScaffoldOptions::default())?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComponentRequest, ComponentService, InspectionService, PublishRequest, PublishService,
        ScaffoldOptions, ScaffoldService,
        ports::{Filesystem, StubStore, TemplateRenderer},
    };
    pub use crate::domain::{
        ComponentKind, ComponentName, Module, ModuleName, ModulesConfig, ReplacementMap,
    };
    pub use crate::error::{StrataError, StrataResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
