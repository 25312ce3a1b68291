//! Driven (output) ports - implemented by infrastructure.

use std::path::Path;

use crate::domain::ReplacementMap;
use crate::error::StrataResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Paths are passed through unchanged; relative paths resolve against the
/// process working directory.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StrataResult<()>;

    /// Write content to a file, replacing it. The parent must exist.
    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()>;

    fn read_file(&self, path: &Path) -> StrataResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Names of the immediate subdirectories of `path`, in byte order.
    ///
    /// A missing `path` yields an empty list.
    fn list_dirs(&self, path: &Path) -> StrataResult<Vec<String>>;

    /// Every directory below `path`, as `/`-joined paths relative to it.
    ///
    /// A missing `path` yields an empty list.
    fn walk_dirs(&self, path: &Path) -> StrataResult<Vec<String>>;
}

/// Port for stub text retrieval.
///
/// Implemented by:
/// - `strata_adapters::stub_store::BuiltinStubs` (embedded defaults)
/// - `strata_adapters::stub_store::OverlayStubStore` (published overrides first)
pub trait StubStore: Send + Sync {
    /// Stub text for an id such as `controller.stub`.
    ///
    /// Fails with `ApplicationError::StubNotFound` for unknown ids.
    fn get(&self, id: &str) -> StrataResult<String>;

    /// Every id this store can serve, in publishing order.
    fn ids(&self) -> Vec<String>;
}

/// Port for stub rendering.
///
/// Implemented by:
/// - `strata_adapters::renderer::PlaceholderRenderer`
pub trait TemplateRenderer: Send + Sync {
    fn render(&self, template: &str, replacements: &ReplacementMap) -> StrataResult<String>;
}
