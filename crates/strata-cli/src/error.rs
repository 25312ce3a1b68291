//! Error handling for the Strata CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use strata_core::error::StrataError;

pub use strata_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// An error propagated from `strata-core`.
    #[error(transparent)]
    Core(#[from] StrataError),

    /// A batch command finished with failures. Each failure has already been
    /// reported on its own line.
    #[error("{failed} of {total} {what} failed")]
    PartialFailure {
        failed: usize,
        total: usize,
        what: &'static str,
    },

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unknown configuration key '{key}'")]
    UnknownConfigKey { key: String },

    #[error("Failed to write output: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize output")]
    Serialization(#[source] serde_json::Error),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err)
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Core(core_err) => core_err.suggestions(),

            Self::PartialFailure { .. } => vec![
                "See the messages above for each failure".into(),
                "Files that were written are kept; re-run to retry the rest".into(),
            ],

            Self::ConfigError { .. } => vec![
                "Check strata.toml in the project root (or the file given with --config)".into(),
                "Run: strata publish --config-only to write a default configuration".into(),
            ],

            Self::UnknownConfigKey { .. } => vec![
                "Keys are dotted paths, for example modules.base_path".into(),
                "Run: strata config list to see every key".into(),
            ],

            Self::IoError { .. } => vec!["Check that stdout is writable".into()],

            Self::Serialization(_) => vec!["This appears to be a bug in Strata".into()],
        }
    }

    /// Get the error category for styling and logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::PartialFailure { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } | Self::UnknownConfigKey { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError { .. } | Self::Serialization(_) => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS. Every failure exits with 1.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(),
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for anyhow::Result<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: format!("{}: {}", f().into(), e.root_cause()),
            source: Some(e.into()),
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::ser::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: f().into(),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use strata_core::domain::DomainError;

    fn not_found() -> CliError {
        CliError::Core(
            DomainError::ModuleNotFound {
                name: "Blog".into(),
            }
            .into(),
        )
    }

    #[test]
    fn core_suggestions_pass_through() {
        assert!(
            not_found()
                .suggestions()
                .iter()
                .any(|s| s.contains("strata new Blog"))
        );
    }

    #[test]
    fn core_categories_map_to_cli_categories() {
        assert_eq!(not_found().category(), ErrorCategory::NotFound);

        let invalid = CliError::Core(
            DomainError::InvalidName {
                name: "1x".into(),
                reason: "bad".into(),
            }
            .into(),
        );
        assert_eq!(invalid.category(), ErrorCategory::UserError);

        let missing = CliError::Core(
            DomainError::MissingConfiguration {
                field: "base_path",
            }
            .into(),
        );
        assert_eq!(missing.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn every_failure_exits_with_one() {
        assert_eq!(not_found().exit_code(), 1);
        assert_eq!(
            CliError::UnknownConfigKey { key: "x".into() }.exit_code(),
            1
        );
        assert_eq!(
            CliError::PartialFailure {
                failed: 1,
                total: 2,
                what: "modules"
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn partial_failure_message() {
        let err = CliError::PartialFailure {
            failed: 1,
            total: 3,
            what: "modules",
        };
        assert_eq!(err.to_string(), "1 of 3 modules failed");
    }

    #[test]
    fn format_plain_contains_error_header() {
        let s = not_found().format_plain(false);
        assert!(s.contains("Error: Module 'Blog' does not exist"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_causes() {
        let err = CliError::ConfigError {
            message: "could not load strata.toml".into(),
            source: Some(Box::new(io::Error::other("unexpected end of table"))),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: unexpected end of table"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "writing report");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }

    #[test]
    fn into_cli_config_error() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("bad toml"));
        let cli = result.with_cli_context(|| "loading configuration");
        assert!(matches!(cli, Err(CliError::ConfigError { source: Some(_), .. })));
    }
}
