//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business rules.
//! Business rule errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No stub with this id is published or built in.
    #[error("Stub not found: {id}")]
    StubNotFound { id: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The modules base directory cannot be created.
    #[error("Cannot create base directory {path}: {reason}")]
    BaseDirectoryUnavailable { path: PathBuf, reason: String },

    /// Shared adapter state is unusable (lock poisoned).
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StubNotFound { id } => vec![
                format!("Check the stub id '{}' in the [modules] stubs tables", id),
                "Run: strata publish --templates-only to write the default stubs".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::BaseDirectoryUnavailable { path, .. } => vec![
                format!("Make sure {} can be created", path.display()),
                "Check base_path in strata.toml".into(),
            ],
            Self::StoreLockError => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StubNotFound { .. } => ErrorCategory::NotFound,
            Self::BaseDirectoryUnavailable { .. } => ErrorCategory::Configuration,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
