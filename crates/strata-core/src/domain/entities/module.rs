use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{
    entities::config::ModulesConfig, paths, value_objects::ModuleName,
};

/// A module resolved against a configuration.
///
/// All derived locations come from the studly-cased name; nothing here
/// touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    pub name: ModuleName,
    /// `{base_path}/{Name}`.
    pub root: PathBuf,
    /// `{base_namespace}\{Name}`.
    pub namespace: String,
    /// Fully-qualified service provider class.
    pub provider_class: String,
    /// Registration marker: `{root}/{provider path}/{Name}ServiceProvider.php`.
    pub provider_file: PathBuf,
}

impl Module {
    pub fn resolve(name: ModuleName, config: &ModulesConfig) -> Self {
        let root = config.module_root(&name);
        let namespace = config.module_namespace(&name);
        let provider = provider_class_name(&name);

        let provider_class = format!(
            "{}\\{}",
            paths::namespace_for(&config.base_namespace, name.as_str(), config.provider_path()),
            provider
        );
        let provider_file = paths::file_path_for(
            &config.base_path,
            name.as_str(),
            config.provider_path(),
            &provider,
            "php",
        );

        Self {
            name,
            root,
            namespace,
            provider_class,
            provider_file,
        }
    }

    /// Directory of a module-relative configured path.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let mut dir = self.root.clone();
        for segment in paths::normalize(relative).split('/').filter(|s| !s.is_empty()) {
            dir.push(segment);
        }
        dir
    }
}

/// `{Name}ServiceProvider`.
pub fn provider_class_name(name: &ModuleName) -> String {
    format!("{name}ServiceProvider")
}
