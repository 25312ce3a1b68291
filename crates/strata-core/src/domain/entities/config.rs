//! Module layout configuration.
//!
//! [`ModulesConfig`] is the static description of how modules are laid out:
//! where they live, which folders every module gets, where each component
//! type goes and which stub renders it. It is deserialized once by the CLI
//! and handed to every service by reference; nothing mutates it afterwards.
//!
//! All path values use forward slashes regardless of the host OS.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::common::RelativePath, error::DomainError, paths, value_objects::ModuleName,
};

/// Fallback when `paths.provider` is not configured.
pub const DEFAULT_PROVIDER_PATH: &str = "Providers";
/// Fallback when `paths.routes` is not configured.
pub const DEFAULT_ROUTES_PATH: &str = "routes";
/// Fallback when `paths.config` is not configured.
pub const DEFAULT_CONFIG_PATH: &str = "config";
/// Fallback when `paths.migration` is not configured.
pub const DEFAULT_MIGRATIONS_PATH: &str = "Infrastructure/Database/Migrations";
/// Stub used for component keys without a `stubs` entry.
pub const GENERIC_CLASS_STUB: &str = "class.stub";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesConfig {
    /// Directory holding all modules, relative to the project root.
    pub base_path: String,
    /// Namespace prefix of every module.
    pub base_namespace: String,
    /// Whether the host application discovers module providers by itself.
    pub auto_discover: bool,
    /// Extra folders created for every new module.
    pub folders_to_generate: Vec<String>,
    /// Fixed folders every module starts with.
    pub scaffold: Vec<String>,
    /// Component key → path relative to the module root.
    pub paths: IndexMap<String, String>,
    /// Test component key → path; may contain shortcut aliases.
    pub test_paths: IndexMap<String, String>,
    pub append_suffix: bool,
    pub suffixes: IndexMap<String, String>,
    /// Scaffold file key → stub id.
    pub stubs_scaffold: IndexMap<String, String>,
    /// Component key → stub id.
    pub stubs: IndexMap<String, String>,
    /// Provider registration file, relative to the project root.
    pub bootstrap_file: String,
    /// Directory holding published stub overrides.
    pub stubs_path: String,
}

impl ModulesConfig {
    /// Reject configurations that would produce unusable paths.
    ///
    /// Runs before any filesystem mutation.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.base_path.trim().is_empty() {
            return Err(DomainError::MissingConfiguration { field: "base_path" });
        }
        if self.base_namespace.trim().trim_matches('\\').is_empty() {
            return Err(DomainError::MissingConfiguration {
                field: "base_namespace",
            });
        }

        let relative = self
            .folders_to_generate
            .iter()
            .chain(&self.scaffold)
            .chain(self.paths.values())
            .chain(self.test_paths.values());
        for path in relative {
            RelativePath::try_new(path.as_str())?;
            if let Some(segment) =
                paths::duplicated_segment(path, &self.base_namespace, &self.base_path)
            {
                return Err(DomainError::DuplicatedSegment {
                    path: path.clone(),
                    segment,
                });
            }
        }

        Ok(())
    }

    pub fn provider_path(&self) -> &str {
        self.paths
            .get("provider")
            .map_or(DEFAULT_PROVIDER_PATH, String::as_str)
    }

    pub fn routes_path(&self) -> &str {
        self.paths
            .get("routes")
            .map_or(DEFAULT_ROUTES_PATH, String::as_str)
    }

    pub fn config_path(&self) -> &str {
        self.paths
            .get("config")
            .map_or(DEFAULT_CONFIG_PATH, String::as_str)
    }

    pub fn migrations_path(&self) -> &str {
        self.paths
            .get("migration")
            .map_or(DEFAULT_MIGRATIONS_PATH, String::as_str)
    }

    /// `{base_path}/{Module}`.
    pub fn module_root(&self, module: &ModuleName) -> PathBuf {
        Path::new(&self.base_path).join(module.as_str())
    }

    /// `{base_namespace}\{Module}`.
    pub fn module_namespace(&self, module: &ModuleName) -> String {
        paths::namespace_for(&self.base_namespace, module.as_str(), "")
    }

    /// Relative path configured for a component key (`paths` first, then `test_paths`).
    pub fn component_path(&self, key: &str) -> Option<&str> {
        self.paths
            .get(key)
            .or_else(|| self.test_paths.get(key))
            .map(String::as_str)
    }

    pub fn suffix_for(&self, key: &str) -> &str {
        self.suffixes.get(key).map_or("", String::as_str)
    }

    /// Stub id for a component key, falling back to the generic class stub.
    pub fn stub_for(&self, key: &str) -> &str {
        self.stubs.get(key).map_or(GENERIC_CLASS_STUB, String::as_str)
    }

    /// Every key accepted by the custom generator, in configuration order.
    pub fn component_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for key in self
            .paths
            .keys()
            .chain(self.test_paths.keys())
            .chain(self.stubs.keys())
        {
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        }
        keys
    }

    pub fn is_component_key(&self, key: &str) -> bool {
        self.paths.contains_key(key)
            || self.test_paths.contains_key(key)
            || self.stubs.contains_key(key)
    }

    /// Distinct `paths` values, in order.
    pub fn path_folders(&self) -> Vec<String> {
        distinct(self.paths.values())
    }

    /// Distinct `test_paths` values, in order (aliases collapse).
    pub fn test_path_folders(&self) -> Vec<String> {
        distinct(self.test_paths.values())
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.contains(value) {
            out.push(value.clone());
        }
    }
    out
}

fn map(entries: &[(&str, &str)]) -> IndexMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

impl Default for ModulesConfig {
    fn default() -> Self {
        Self {
            base_path: "app/Modules".into(),
            base_namespace: "App\\Modules".into(),
            auto_discover: true,
            folders_to_generate: [
                "Domain/Entities",
                "Domain/ValueObjects",
                "Domain/Repositories",
                "Domain/Events",
                "Application/Services",
                "Application/DTOs",
                "Application/Listeners",
                "Infrastructure/Models",
                "Infrastructure/Repositories",
                "Infrastructure/Database/Migrations",
                "Infrastructure/Database/Seeders",
                "Infrastructure/Database/Factories",
                "Presentation/Http/Controllers",
                "Presentation/Http/Requests",
                "Presentation/Http/Resources",
                "Presentation/Http/Middleware",
                "tests/Unit",
                "tests/Feature",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            scaffold: vec!["Providers".into(), "config".into(), "routes".into()],
            paths: map(&[
                ("controller", "Presentation/Http/Controllers"),
                ("request", "Presentation/Http/Requests"),
                ("resource", "Presentation/Http/Resources"),
                ("middleware", "Presentation/Http/Middleware"),
                ("entity", "Domain/Entities"),
                ("value_object", "Domain/ValueObjects"),
                ("repository_interface", "Domain/Repositories"),
                ("event", "Domain/Events"),
                ("service", "Application/Services"),
                ("dto", "Application/DTOs"),
                ("listener", "Application/Listeners"),
                ("model", "Infrastructure/Models"),
                ("repository", "Infrastructure/Repositories"),
                ("migration", DEFAULT_MIGRATIONS_PATH),
                ("seeder", "Infrastructure/Database/Seeders"),
                ("factory", "Infrastructure/Database/Factories"),
                ("provider", DEFAULT_PROVIDER_PATH),
                ("routes", DEFAULT_ROUTES_PATH),
                ("config", DEFAULT_CONFIG_PATH),
            ]),
            test_paths: map(&[
                ("unit", "tests/Unit"),
                ("feature", "tests/Feature"),
                ("test", "tests/Unit"),
                ("feature_test", "tests/Feature"),
            ]),
            append_suffix: true,
            suffixes: map(&[
                ("controller", "Controller"),
                ("request", "Request"),
                ("resource", "Resource"),
                ("middleware", "Middleware"),
                ("repository_interface", "RepositoryInterface"),
                ("event", "Event"),
                ("service", "Service"),
                ("dto", "DTO"),
                ("listener", "Listener"),
                ("repository", "Repository"),
                ("seeder", "Seeder"),
                ("factory", "Factory"),
                ("unit", "Test"),
                ("feature", "Test"),
                ("test", "Test"),
                ("feature_test", "Test"),
            ]),
            stubs_scaffold: map(&[
                ("provider", "scaffold/provider.stub"),
                ("config", "scaffold/config.stub"),
                ("routes_web", "scaffold/routes/web.stub"),
                ("routes_api", "scaffold/routes/api.stub"),
                ("routes_console", "scaffold/routes/console.stub"),
            ]),
            stubs: map(&[
                ("controller", "controller.stub"),
                ("request", "request.stub"),
                ("resource", "resource.stub"),
                ("middleware", "middleware.stub"),
                ("entity", GENERIC_CLASS_STUB),
                ("value_object", GENERIC_CLASS_STUB),
                ("repository_interface", "interface.stub"),
                ("event", "event.stub"),
                ("service", GENERIC_CLASS_STUB),
                ("dto", GENERIC_CLASS_STUB),
                ("listener", "listener.stub"),
                ("model", "model.stub"),
                ("repository", "repository.stub"),
                ("seeder", "seeder.stub"),
                ("factory", "factory.stub"),
                ("unit", "tests/unit.stub"),
                ("feature", "tests/feature.stub"),
                ("test", "tests/unit.stub"),
                ("feature_test", "tests/feature.stub"),
            ]),
            bootstrap_file: "bootstrap/providers.php".into(),
            stubs_path: "stubs/modules".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(ModulesConfig::default().validate().is_ok());
    }

    #[test]
    fn blank_base_path_is_missing_configuration() {
        let config = ModulesConfig {
            base_path: "  ".into(),
            ..ModulesConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(DomainError::MissingConfiguration { field: "base_path" })
        );
    }

    #[test]
    fn blank_base_namespace_is_missing_configuration() {
        let config = ModulesConfig {
            base_namespace: "\\".into(),
            ..ModulesConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(DomainError::MissingConfiguration {
                field: "base_namespace"
            })
        );
    }

    #[test]
    fn absolute_component_path_is_rejected() {
        let mut config = ModulesConfig::default();
        config
            .paths
            .insert("controller".into(), "/Http/Controllers".into());
        assert!(matches!(
            config.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn already_qualified_paths_are_rejected() {
        let mut config = ModulesConfig::default();
        config
            .paths
            .insert("entity".into(), "App/Modules/Blog/Domain/Entities".into());
        assert_eq!(
            config.validate(),
            Err(DomainError::DuplicatedSegment {
                path: "App/Modules/Blog/Domain/Entities".into(),
                segment: "App\\Modules".into(),
            })
        );
    }

    #[test]
    fn folders_outside_the_module_are_rejected() {
        let mut config = ModulesConfig::default();
        config.folders_to_generate.push("../../Shared".into());
        assert!(matches!(
            config.validate(),
            Err(DomainError::ParentTraversalNotAllowed { .. })
        ));

        let mut config = ModulesConfig::default();
        config.paths.insert("migration".into(), "Database/../../..".into());
        assert!(matches!(
            config.validate(),
            Err(DomainError::ParentTraversalNotAllowed { .. })
        ));
    }

    #[test]
    fn module_root_and_namespace() {
        let config = ModulesConfig::default();
        let blog = ModuleName::parse("blog").unwrap();
        assert_eq!(config.module_namespace(&blog), "App\\Modules\\Blog");
        assert_eq!(config.module_root(&blog), Path::new("app/Modules").join("Blog"));
    }

    #[test]
    fn component_keys_are_the_union_in_order() {
        let mut config = ModulesConfig::default();
        config.stubs.insert("action".into(), "action.stub".into());

        let keys = config.component_keys();
        assert_eq!(keys.first().map(String::as_str), Some("controller"));
        assert_eq!(keys.last().map(String::as_str), Some("action"));
        assert!(keys.contains(&"feature_test".to_string()));
        assert_eq!(keys.iter().filter(|k| *k == "unit").count(), 1);
        assert!(config.is_component_key("action"));
        assert!(!config.is_component_key("widget"));
    }

    #[test]
    fn lookups_fall_back() {
        let mut config = ModulesConfig::default();
        config.paths.shift_remove("provider");
        config.stubs.shift_remove("entity");

        assert_eq!(config.provider_path(), DEFAULT_PROVIDER_PATH);
        assert_eq!(config.stub_for("entity"), GENERIC_CLASS_STUB);
        assert_eq!(config.suffix_for("entity"), "");
        assert_eq!(config.component_path("test"), Some("tests/Unit"));
    }

    #[test]
    fn test_path_aliases_collapse() {
        let config = ModulesConfig::default();
        assert_eq!(config.test_path_folders(), vec!["tests/Unit", "tests/Feature"]);
    }
}
