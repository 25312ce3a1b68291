// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (batch commands collect them per item)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Path '{path}' leaves its root through '..'")]
    ParentTraversalNotAllowed { path: String },

    #[error("Path '{path}' repeats the segment '{segment}'")]
    DuplicatedSegment { path: String, segment: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    #[error("Required configuration missing: {field}")]
    MissingConfiguration { field: &'static str },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unknown component type '{key}'")]
    UnknownComponentType { key: String, available: Vec<String> },

    #[error("Module '{name}' does not exist")]
    ModuleNotFound { name: String },
}

impl DomainError {
    pub(crate) fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { .. } => vec![
                "Names must start with a letter and contain only letters and digits".into(),
                "Examples: Blog, UserProfile, APIController".into(),
            ],
            Self::MissingConfiguration { field } => vec![
                format!("Set '{}' in the [modules] section of strata.toml", field),
                "Run: strata publish --config-only to write a default configuration".into(),
            ],
            Self::UnknownComponentType { available, .. } => {
                let mut out = vec!["Valid component types:".to_string()];
                out.extend(available.iter().map(|k| format!("  • {k}")));
                out
            }
            Self::ModuleNotFound { name } => vec![
                format!("Create it first: strata new {}", name),
                "Try: strata list to see discovered modules".into(),
            ],
            Self::DuplicatedSegment { segment, .. } => vec![
                format!(
                    "Configured paths must be relative to the module root and must not start with '{}'",
                    segment
                ),
            ],
            Self::AbsolutePathNotAllowed { .. } | Self::ParentTraversalNotAllowed { .. } => {
                vec!["Use paths relative to the module root".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. }
            | Self::AbsolutePathNotAllowed { .. }
            | Self::ParentTraversalNotAllowed { .. }
            | Self::DuplicatedSegment { .. } => ErrorCategory::Validation,
            Self::MissingConfiguration { .. } => ErrorCategory::Configuration,
            Self::UnknownComponentType { .. } | Self::ModuleNotFound { .. } => {
                ErrorCategory::NotFound
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    NotFound,
}
