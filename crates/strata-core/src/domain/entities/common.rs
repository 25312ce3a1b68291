use super::DomainError;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to stay below the directory it is joined to.
///
/// Invariant: never absolute and never contains `..`. Enforced at
/// construction. Configured module folders and generated file locations are
/// all expressed relative to a module root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        check_contained(&path)?;
        Ok(Self(path))
    }

    /// Join a segment, maintaining the invariant.
    pub fn join(&self, segment: impl AsRef<Path>) -> Result<Self, DomainError> {
        let segment = segment.as_ref();
        check_contained(segment)?;
        Ok(Self(self.0.join(segment)))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

fn check_contained(path: &Path) -> Result<(), DomainError> {
    let text = path.to_string_lossy();
    if path.is_absolute() || path.has_root() {
        return Err(DomainError::AbsolutePathNotAllowed {
            path: text.into_owned(),
        });
    }

    let escapes = path
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        // Config paths may use `\` on any host.
        || text.split(['/', '\\']).any(|segment| segment.trim() == "..");
    if escapes {
        return Err(DomainError::ParentTraversalNotAllowed {
            path: text.into_owned(),
        });
    }

    Ok(())
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
