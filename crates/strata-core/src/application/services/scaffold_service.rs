//! Scaffold Service - creates new modules.
//!
//! For every requested name:
//! 1. Validate and normalize the name
//! 2. Build the module structure (directories + rendered scaffold stubs)
//! 3. Write it create-if-absent
//! 4. Optionally register the provider in the bootstrap file
//!
//! Invalid names and missing stubs are reported per item; the rest of the
//! batch continues. Configuration problems abort before anything is written.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, StubStore, TemplateRenderer},
        services::support::{self, WriteStatus},
    },
    domain::{
        DomainValidator as validator, FsEntry, Module, ModuleName, ModuleStructure,
        ModulesConfig, paths, provider_class_name, registration,
    },
    error::{StrataError, StrataResult},
};

/// Scaffold files in creation order: stub key, configured directory, file name.
const SCAFFOLD_FILES: [(&str, ScaffoldDir, &str); 5] = [
    ("provider", ScaffoldDir::Provider, ""),
    ("config", ScaffoldDir::Config, "config"),
    ("routes_web", ScaffoldDir::Routes, "web"),
    ("routes_api", ScaffoldDir::Routes, "api"),
    ("routes_console", ScaffoldDir::Routes, "console"),
];

#[derive(Debug, Clone, Copy)]
enum ScaffoldDir {
    Provider,
    Config,
    Routes,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldOptions {
    /// Overwrite files that already exist.
    pub force: bool,
    /// Add the provider to the bootstrap file.
    pub register: bool,
}

/// What happened to the bootstrap file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Registration {
    NotRequested,
    Registered,
    AlreadyRegistered,
    BootstrapMissing,
    /// The bootstrap file has no `return [ ... ]` array to extend.
    NoProviderArray,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Per-module result of a successful scaffold.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleReport {
    pub module: Module,
    pub created_directories: Vec<PathBuf>,
    pub written_files: Vec<PathBuf>,
    pub skipped_files: Vec<PathBuf>,
    pub failed_files: Vec<FileFailure>,
    pub registration: Registration,
}

impl ModuleReport {
    pub fn is_complete(&self) -> bool {
        self.failed_files.is_empty()
    }
}

/// Outcome for one requested name.
#[derive(Debug, Clone)]
pub struct ModuleOutcome {
    /// Name as given on the command line.
    pub input: String,
    pub result: Result<ModuleReport, StrataError>,
}

impl ModuleOutcome {
    pub fn is_success(&self) -> bool {
        self.result.as_ref().is_ok_and(ModuleReport::is_complete)
    }
}

/// Module creation service.
pub struct ScaffoldService {
    config: ModulesConfig,
    stubs: Box<dyn StubStore>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
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

    /// Create every named module.
    ///
    /// Returns `Err` only for batch-level failures (invalid configuration,
    /// uncreatable base directory); item failures live in the outcomes.
    #[instrument(skip_all, fields(count = names.len(), force = options.force))]
    pub fn create_modules<S: AsRef<str>>(
        &self,
        names: &[S],
        options: ScaffoldOptions,
    ) -> StrataResult<Vec<ModuleOutcome>> {
        validator::validate_config(&self.config)?;

        let parsed: Vec<(String, Result<ModuleName, StrataError>)> = names
            .iter()
            .map(|n| {
                let input = n.as_ref().to_string();
                let name = ModuleName::parse(&input).map_err(StrataError::from);
                (input, name)
            })
            .collect();

        if parsed.iter().any(|(_, name)| name.is_ok()) {
            self.ensure_base_directory()?;
        }

        let outcomes = parsed
            .into_iter()
            .map(|(input, name)| {
                let result = name.and_then(|name| self.create_module(name, options));
                if let Err(e) = &result {
                    warn!(module = %input, error = %e, "Module not created");
                }
                ModuleOutcome { input, result }
            })
            .collect();

        Ok(outcomes)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn ensure_base_directory(&self) -> StrataResult<()> {
        let base = Path::new(&self.config.base_path);
        self.filesystem.create_dir_all(base).map_err(|e| {
            ApplicationError::BaseDirectoryUnavailable {
                path: base.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    #[instrument(skip_all, fields(module = %name))]
    fn create_module(&self, name: ModuleName, options: ScaffoldOptions) -> StrataResult<ModuleReport> {
        let module = Module::resolve(name, &self.config);
        info!(root = %module.root.display(), "Creating module");

        let mut failed_files = Vec::new();
        let structure = self.build_structure(&module, &mut failed_files);
        validator::validate_module_structure(&structure)?;

        let mut report = ModuleReport {
            module,
            created_directories: Vec::new(),
            written_files: Vec::new(),
            skipped_files: Vec::new(),
            failed_files,
            registration: Registration::NotRequested,
        };
        self.write_structure(&structure, options.force, &mut report)?;

        if options.register {
            report.registration = self.register_provider(&report.module.provider_class)?;
        }

        info!(
            written = report.written_files.len(),
            skipped = report.skipped_files.len(),
            failed = report.failed_files.len(),
            "Module scaffolded"
        );
        Ok(report)
    }

    /// Directories followed by rendered scaffold files, relative to the module root.
    fn build_structure(&self, module: &Module, failures: &mut Vec<FileFailure>) -> ModuleStructure {
        let mut structure = ModuleStructure::new(&module.root);

        let mut seen: Vec<String> = Vec::new();
        for folder in self.config.scaffold.iter().chain(&self.config.folders_to_generate) {
            let folder = paths::normalize(folder);
            if folder.is_empty() || seen.contains(&folder) {
                continue;
            }
            structure.add_directory(support::relative_dir(&folder));
            seen.push(folder);
        }

        let provider_namespace = paths::namespace_for(
            &self.config.base_namespace,
            module.name.as_str(),
            self.config.provider_path(),
        );
        let provider = provider_class_name(&module.name);

        for (key, dir, file) in SCAFFOLD_FILES {
            let (dir, file, namespace) = match dir {
                ScaffoldDir::Provider => (self.config.provider_path(), provider.as_str(), &provider_namespace),
                ScaffoldDir::Config => (self.config.config_path(), file, &module.namespace),
                ScaffoldDir::Routes => (self.config.routes_path(), file, &module.namespace),
            };
            let relative = support::relative_file(dir, &paths::generate_php_file_path(file));

            let Some(stub_id) = self.config.stubs_scaffold.get(key) else {
                debug!(key, "No scaffold stub configured, skipping");
                continue;
            };

            let replacements = support::module_replacements(module, &self.config, namespace, &provider);
            let rendered = self
                .stubs
                .get(stub_id)
                .and_then(|stub| self.renderer.render(&stub, &replacements));

            match rendered {
                Ok(content) => structure.add_file(relative, content),
                Err(e) => {
                    warn!(stub = %stub_id, error = %e, "Scaffold file not rendered");
                    failures.push(FileFailure {
                        path: module.root.join(relative),
                        reason: e.to_string(),
                    });
                }
            }
        }

        structure
    }

    fn write_structure(
        &self,
        structure: &ModuleStructure,
        force: bool,
        report: &mut ModuleReport,
    ) -> StrataResult<()> {
        self.filesystem.create_dir_all(structure.root())?;

        for entry in structure.entries() {
            let path = structure.root().join(entry.path());
            match entry {
                FsEntry::Directory(_) => {
                    if !self.filesystem.is_dir(&path) {
                        self.filesystem.create_dir_all(&path)?;
                        report.created_directories.push(path);
                    }
                }
                FsEntry::File(file) => {
                    match support::write_if_absent(self.filesystem.as_ref(), &path, &file.content, force) {
                        Ok(WriteStatus::Written) => report.written_files.push(path),
                        Ok(WriteStatus::Skipped) => report.skipped_files.push(path),
                        Err(e) => {
                            warn!(path = %path.display(), error = %e, "Write failed");
                            report.failed_files.push(FileFailure {
                                path,
                                reason: e.to_string(),
                            });
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn register_provider(&self, provider_class: &str) -> StrataResult<Registration> {
        let bootstrap = Path::new(&self.config.bootstrap_file);
        if !self.filesystem.is_file(bootstrap) {
            debug!(path = %bootstrap.display(), "No bootstrap file, registration skipped");
            return Ok(Registration::BootstrapMissing);
        }

        let content = self.filesystem.read_file(bootstrap)?;
        if registration::is_registered(&content, provider_class) {
            return Ok(Registration::AlreadyRegistered);
        }

        match registration::register(&content, provider_class) {
            Some(updated) => {
                self.filesystem.write_file(bootstrap, &updated)?;
                info!(provider = provider_class, "Provider registered");
                Ok(Registration::Registered)
            }
            None => {
                warn!(path = %bootstrap.display(), "Bootstrap file has no provider array");
                Ok(Registration::NoProviderArray)
            }
        }
    }
}
