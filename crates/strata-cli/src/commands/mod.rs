//! Command handlers.
//!
//! Each handler translates parsed arguments into a core service call and
//! renders the result. Adapters are wired here and nowhere else.

pub mod completions;
pub mod config;
pub mod generate;
pub mod list;
pub mod new;
pub mod publish;
pub mod show;

use strata_adapters::{LocalFilesystem, OverlayStubStore, PlaceholderRenderer};
use strata_core::{
    application::ports::{Filesystem, StubStore, TemplateRenderer},
    domain::ModulesConfig,
};

fn filesystem() -> Box<dyn Filesystem> {
    Box::new(LocalFilesystem::new())
}

/// Published stubs under `stubs_path` take precedence over built-in ones.
fn stubs(config: &ModulesConfig) -> Box<dyn StubStore> {
    Box::new(OverlayStubStore::new(&config.stubs_path, filesystem()))
}

fn renderer() -> Box<dyn TemplateRenderer> {
    Box::new(PlaceholderRenderer::new())
}
