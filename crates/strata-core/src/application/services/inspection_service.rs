//! Inspection Service - module discovery and description.
//!
//! A directory under `base_path` is a module when its registration marker
//! `{Sub}/{paths.provider}/{Sub}ServiceProvider.php` exists. Discovery does
//! not recurse beyond that probe.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{
        DomainError, FolderClassification, FolderReferences, ModuleName, ModulesConfig, classify,
        paths, registration,
    },
    error::StrataResult,
};

/// Route files present in a module's `routes` directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteFiles {
    pub web: bool,
    pub api: bool,
    pub console: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleSummary {
    pub name: String,
    pub path: PathBuf,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<RouteFiles>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDetails {
    pub name: String,
    pub path: PathBuf,
    pub namespace: String,
    pub provider_class: String,
    /// `None` when there is no bootstrap file to check.
    pub registered: Option<bool>,
    pub auto_discover: bool,
    pub folders: FolderClassification,
}

/// Read-only module introspection.
pub struct InspectionService {
    config: ModulesConfig,
    filesystem: Box<dyn Filesystem>,
}

impl InspectionService {
    pub fn new(config: ModulesConfig, filesystem: Box<dyn Filesystem>) -> Self {
        Self { config, filesystem }
    }

    /// Module directory names under `base_path`, in byte order.
    #[instrument(skip(self))]
    pub fn discover(&self) -> StrataResult<Vec<String>> {
        let base = Path::new(&self.config.base_path);
        if !self.filesystem.is_dir(base) {
            debug!(path = %base.display(), "Base path does not exist");
            return Ok(Vec::new());
        }

        let mut modules: Vec<String> = self
            .filesystem
            .list_dirs(base)?
            .into_iter()
            .filter(|sub| self.filesystem.is_file(&self.provider_file(sub)))
            .collect();
        modules.sort();
        Ok(modules)
    }

    pub fn list_modules(&self, with_routes: bool) -> StrataResult<Vec<ModuleSummary>> {
        let modules = self.discover()?;

        Ok(modules
            .into_iter()
            .map(|name| ModuleSummary {
                path: self.module_root(&name),
                namespace: paths::namespace_for(&self.config.base_namespace, &name, ""),
                routes: with_routes.then(|| self.route_files(&name)),
                name,
            })
            .collect())
    }

    /// Details for one module, or for every discovered module when `name`
    /// is `None`.
    #[instrument(skip(self))]
    pub fn show(&self, name: Option<&str>) -> StrataResult<Vec<ModuleDetails>> {
        let names = match name {
            Some(input) => {
                let module = ModuleName::parse(input)?;
                if !self.filesystem.is_file(&self.provider_file(module.as_str())) {
                    return Err(DomainError::ModuleNotFound {
                        name: module.to_string(),
                    }
                    .into());
                }
                vec![module.to_string()]
            }
            None => self.discover()?,
        };

        let bootstrap = self.bootstrap_contents()?;
        names
            .into_iter()
            .map(|name| self.details(name, bootstrap.as_deref()))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn module_root(&self, name: &str) -> PathBuf {
        Path::new(&self.config.base_path).join(name)
    }

    fn provider_file(&self, name: &str) -> PathBuf {
        paths::file_path_for(
            Path::new(&self.config.base_path),
            name,
            self.config.provider_path(),
            &format!("{name}ServiceProvider"),
            "php",
        )
    }

    fn route_files(&self, name: &str) -> RouteFiles {
        let routes = paths::normalize(self.config.routes_path());
        let exists = |file: &str| {
            let path = paths::file_path_for(
                Path::new(&self.config.base_path),
                name,
                &routes,
                file,
                "php",
            );
            self.filesystem.is_file(&path)
        };

        RouteFiles {
            web: exists("web"),
            api: exists("api"),
            console: exists("console"),
        }
    }

    fn bootstrap_contents(&self) -> StrataResult<Option<String>> {
        let bootstrap = Path::new(&self.config.bootstrap_file);
        if !self.filesystem.is_file(bootstrap) {
            return Ok(None);
        }
        self.filesystem.read_file(bootstrap).map(Some)
    }

    fn details(&self, name: String, bootstrap: Option<&str>) -> StrataResult<ModuleDetails> {
        let root = self.module_root(&name);
        let provider_class = format!(
            "{}\\{}ServiceProvider",
            paths::namespace_for(&self.config.base_namespace, &name, self.config.provider_path()),
            name
        );

        Ok(ModuleDetails {
            namespace: paths::namespace_for(&self.config.base_namespace, &name, ""),
            registered: bootstrap.map(|content| registration::is_registered(content, &provider_class)),
            auto_discover: self.config.auto_discover,
            folders: self.classify_folders(&root)?,
            provider_class,
            path: root,
            name,
        })
    }

    fn classify_folders(&self, root: &Path) -> StrataResult<FolderClassification> {
        let scaffold = normalized(&self.config.scaffold);
        let generated = normalized(&self.config.folders_to_generate);
        let path_folders = normalized(&self.config.path_folders());
        let test_folders = normalized(&self.config.test_path_folders());

        let configured: Vec<&String> = scaffold
            .iter()
            .chain(&generated)
            .chain(&path_folders)
            .chain(&test_folders)
            .collect();

        // Intermediate directories such as `Domain` only exist to hold a
        // configured folder.
        let existing: Vec<String> = self
            .filesystem
            .walk_dirs(root)?
            .into_iter()
            .filter(|dir| {
                configured.iter().any(|c| *c == dir)
                    || !configured.iter().any(|c| is_strict_ancestor(dir, c))
            })
            .collect();

        Ok(classify(
            &existing,
            FolderReferences {
                scaffold: &scaffold,
                generated: &generated,
                paths: &path_folders,
                test_paths: &test_folders,
            },
        ))
    }
}

fn normalized(list: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for entry in list.iter().map(|p| paths::normalize(p)) {
        if !entry.is_empty() && !out.contains(&entry) {
            out.push(entry);
        }
    }
    out
}

fn is_strict_ancestor(dir: &str, folder: &str) -> bool {
    folder.len() > dir.len() && folder.starts_with(dir) && folder[dir.len()..].starts_with('/')
}
