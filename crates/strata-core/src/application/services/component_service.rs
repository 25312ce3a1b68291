//! Component Service - generates one class inside an existing module.
//!
//! Typed generation (`make controller Blog Post`) and custom generation
//! (`generate <key> Blog Post`) share this path: the component key selects
//! the configured directory, suffix and stub.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Filesystem, StubStore, TemplateRenderer},
        services::support::{self, WriteStatus},
    },
    domain::{
        ComponentKind, ComponentName, DomainError, DomainValidator as validator, Module,
        ModuleName, ModulesConfig, apply_suffix, paths,
    },
    error::StrataResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRequest {
    /// Component key (`controller`, `entity`, or any configured key).
    pub key: String,
    pub module: String,
    /// Class name, optionally nested: `Admin/Post`.
    pub name: String,
    pub force: bool,
}

impl ComponentRequest {
    pub fn typed(kind: ComponentKind, module: impl Into<String>, name: impl Into<String>) -> Self {
        Self::custom(kind.key(), module, name)
    }

    pub fn custom(
        key: impl Into<String>,
        module: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            module: module.into(),
            name: name.into(),
            force: false,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// A generated (or skipped) component file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedComponent {
    pub key: String,
    pub module: ModuleName,
    pub class: String,
    pub namespace: String,
    /// `namespace\class`.
    pub fqcn: String,
    pub path: PathBuf,
    pub status: WriteStatus,
}

/// Component generation service.
pub struct ComponentService {
    config: ModulesConfig,
    stubs: Box<dyn StubStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ComponentService {
    pub fn new(
        config: ModulesConfig,
        stubs: Box<dyn StubStore>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            config,
            stubs,
            renderer,
            filesystem,
        }
    }

    /// Keys accepted by [`Self::make`], in configuration order.
    pub fn available_keys(&self) -> Vec<String> {
        self.config.component_keys()
    }

    #[instrument(
        skip_all,
        fields(key = %request.key, module = %request.module, name = %request.name)
    )]
    pub fn make(&self, request: &ComponentRequest) -> StrataResult<GeneratedComponent> {
        let key = request.key.trim();
        if !self.config.is_component_key(key) {
            return Err(DomainError::UnknownComponentType {
                key: key.to_string(),
                available: self.config.component_keys(),
            }
            .into());
        }
        validator::validate_config(&self.config)?;

        let module = Module::resolve(ModuleName::parse(&request.module)?, &self.config);
        if !self.filesystem.is_file(&module.provider_file) {
            return Err(DomainError::ModuleNotFound {
                name: module.name.to_string(),
            }
            .into());
        }

        let name = ComponentName::parse(&request.name)?;
        let class = apply_suffix(
            name.class(),
            self.config.suffix_for(key),
            self.config.append_suffix,
        );

        let dir = self.component_dir(key, &name);
        let namespace =
            paths::namespace_for(&self.config.base_namespace, module.name.as_str(), &dir);

        let path = paths::file_path_for(
            Path::new(&self.config.base_path),
            module.name.as_str(),
            &dir,
            &class,
            "php",
        );

        let stub = self.stubs.get(self.config.stub_for(key))?;
        let mut replacements =
            support::module_replacements(&module, &self.config, &namespace, &class);
        replacements.insert_key("name", name.class());
        let content = self.renderer.render(&stub, &replacements)?;

        let status =
            support::write_if_absent(self.filesystem.as_ref(), &path, &content, request.force)?;
        info!(path = %path.display(), ?status, "Component generated");

        Ok(GeneratedComponent {
            key: key.to_string(),
            fqcn: format!("{namespace}\\{class}"),
            module: module.name,
            class,
            namespace,
            path,
            status,
        })
    }

    /// Configured directory for `key` plus the nested segments of `name`.
    ///
    /// Keys that only have a stub entry land in the module root.
    fn component_dir(&self, key: &str, name: &ComponentName) -> String {
        let base = self.config.component_path(key).unwrap_or_default();
        paths::normalize(&format!("{}/{}", base, name.parent_path()))
    }
}
