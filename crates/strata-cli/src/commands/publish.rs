//! Implementation of the `strata publish` command.

use std::path::PathBuf;

use tracing::instrument;

use strata_adapters::BuiltinStubs;
use strata_core::application::{PublishRequest, PublishService};

use crate::{
    cli::PublishArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Write the default configuration and the built-in stubs.
///
/// The configuration written is always the built-in default, not the
/// configuration currently in effect.
#[instrument(skip_all, fields(force = args.force))]
pub fn execute(
    args: PublishArgs,
    config_file: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let config_path = AppConfig::project_file(config_file.as_ref());
    let config_contents = AppConfig::default()
        .to_toml()
        .with_cli_context(|| "Failed to serialize the default configuration")?;

    let service = PublishService::new(
        config.modules.clone(),
        Box::new(BuiltinStubs::new()),
        super::filesystem(),
    );
    let report = service.publish(&PublishRequest {
        config_path,
        config_contents,
        force: args.force,
        config_only: args.config_only,
        templates_only: args.templates_only,
    })?;

    if output.wants_json(false) {
        return output.json(&report);
    }

    for path in &report.written {
        output.print(&format!("  written  {}", path.display()))?;
    }
    for path in &report.skipped {
        output.print(&format!(
            "  skipped  {} {}",
            path.display(),
            output.dim("(exists, use --force to overwrite)")
        ))?;
    }
    output.success(&format!(
        "Published {} file(s), skipped {}",
        report.written.len(),
        report.skipped.len()
    ))?;
    Ok(())
}
