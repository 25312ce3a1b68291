//! Helpers shared by the services.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::{
    application::ports::Filesystem,
    domain::{Module, ModulesConfig, ReplacementMap, paths},
    error::StrataResult,
};

/// Result of an idempotent file write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteStatus {
    Written,
    /// The file already existed and `force` was not set.
    Skipped,
}

/// Write `content` unless the file exists. The parent directory is created.
pub(crate) fn write_if_absent(
    fs: &dyn Filesystem,
    path: &Path,
    content: &str,
    force: bool,
) -> StrataResult<WriteStatus> {
    if !force && fs.exists(path) {
        debug!(path = %path.display(), "File exists, skipping");
        return Ok(WriteStatus::Skipped);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs.create_dir_all(parent)?;
    }
    fs.write_file(path, content)?;
    Ok(WriteStatus::Written)
}

/// A configured `/`-separated directory as a relative path.
pub(crate) fn relative_dir(dir: &str) -> PathBuf {
    paths::normalize(dir)
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}

/// `dir/file` as a relative path, `dir` given in configuration form.
pub(crate) fn relative_file(dir: &str, file: &str) -> PathBuf {
    relative_dir(dir).join(file)
}

/// Placeholders every stub of a module can use.
///
/// `namespace` and `class` are file-specific; everything else is derived
/// from the module and the configured layout. `provider_to_root` is the
/// `/..` chain leading from the provider directory back to the module root.
pub(crate) fn module_replacements(
    module: &Module,
    config: &ModulesConfig,
    namespace: &str,
    class: &str,
) -> ReplacementMap {
    ReplacementMap::new()
        .with_key("namespace", namespace)
        .with_key("class", class)
        .with_key("module", module.name.as_str())
        .with_key("module_snake", module.name.snake())
        .with_key("module_namespace", &module.namespace)
        .with_key(
            "base_namespace",
            config.base_namespace.trim_end_matches(paths::NAMESPACE_SEPARATOR),
        )
        .with_key("provider_class", &module.provider_class)
        .with_key("provider_to_root", up_levels(config.provider_path()))
        .with_key("routes_path", paths::normalize(config.routes_path()))
        .with_key("config_path", paths::normalize(config.config_path()))
        .with_key("migrations_path", paths::normalize(config.migrations_path()))
}

fn up_levels(dir: &str) -> String {
    relative_dir(dir).components().map(|_| "/..").collect()
}
