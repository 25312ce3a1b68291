use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Directories and rendered files ready for materialization.
///
/// This is the output of stub rendering. Paths are relative to `root`.
/// It contains no business logic, only data.
#[derive(Debug, Clone)]
pub struct ModuleStructure {
    pub(crate) root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ModuleStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            RelativePath::try_new(path.as_path())?;

            let path_str = path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatedSegment {
                    path: path_str,
                    segment: entry.kind().into(),
                });
            }
        }

        Ok(())
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Directory(_) => "directory",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog() -> ModuleStructure {
        let mut structure = ModuleStructure::new("app/Modules/Blog");
        structure.add_directory("Providers");
        structure.add_file("Providers/BlogServiceProvider.php", "<?php".into());
        structure
    }

    #[test]
    fn structure_builds_correctly() {
        let structure = blog();
        assert_eq!(structure.entries().len(), 2);
        assert!(matches!(structure.entries()[0], FsEntry::Directory(_)));
        assert!(structure.validate().is_ok());
    }

    #[test]
    fn structure_rejects_duplicates() {
        let mut structure = blog();
        structure.add_file("Providers/BlogServiceProvider.php", String::new());

        assert!(structure.validate().is_err());
    }

    #[test]
    fn structure_rejects_rooted_entries() {
        let mut structure = blog();
        structure.add_directory("/etc");
        assert!(matches!(
            structure.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn structure_rejects_entries_outside_root() {
        let mut structure = blog();
        structure.add_directory("../Shared");
        assert!(matches!(
            structure.validate(),
            Err(DomainError::ParentTraversalNotAllowed { .. })
        ));
    }
}
