//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::Path;

use strata_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StrataError, StrataResult},
};
use tracing::trace;
use walkdir::WalkDir;

use super::relative_slash_path;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        trace!(path = %path.display(), "create_dir_all");
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StrataResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "write_file");
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> StrataResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dirs(&self, path: &Path) -> StrataResult<Vec<String>> {
        if !path.is_dir() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;
        let mut dirs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            if entry.path().is_dir() {
                dirs.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        dirs.sort();
        Ok(dirs)
    }

    fn walk_dirs(&self, path: &Path) -> StrataResult<Vec<String>> {
        if !path.is_dir() {
            return Ok(Vec::new());
        }

        let mut dirs = Vec::new();
        for entry in WalkDir::new(path).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: format!("Failed to walk directory: {}", e),
            })?;
            if !entry.file_type().is_dir() {
                continue;
            }
            if let Some(relative) = entry
                .path()
                .strip_prefix(path)
                .ok()
                .and_then(relative_slash_path)
            {
                dirs.push(relative);
            }
        }
        Ok(dirs)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StrataError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
