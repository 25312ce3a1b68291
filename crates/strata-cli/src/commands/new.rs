//! Implementation of the `strata new` command.
//!
//! Responsibility: hand the module names to the scaffold service and report
//! each outcome. No business logic lives here.

use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};

use strata_core::application::{
    ModuleOutcome, ModuleReport, Registration, ScaffoldOptions, ScaffoldService,
};

use crate::{
    cli::NewArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `strata new` command.
///
/// Invalid names and per-file failures do not stop the batch; they turn the
/// exit status into a failure once every name has been processed.
#[instrument(skip_all, fields(count = args.names.len()))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let bootstrap_file = config.modules.bootstrap_file.clone();
    let service = ScaffoldService::new(
        config.modules.clone(),
        super::stubs(&config.modules),
        super::renderer(),
        super::filesystem(),
    );

    let options = ScaffoldOptions {
        force: args.force,
        register: !args.no_register,
    };
    let outcomes = service.create_modules(args.names.as_slice(), options)?;

    if output.wants_json(false) {
        let views: Vec<OutcomeView<'_>> = outcomes.iter().map(OutcomeView::from).collect();
        output.json(&views)?;
    } else {
        for outcome in &outcomes {
            report(outcome, &bootstrap_file, &output)?;
        }
    }

    let failed = outcomes.iter().filter(|o| !o.is_success()).count();
    info!(total = outcomes.len(), failed, "Module creation finished");

    if failed > 0 {
        return Err(CliError::PartialFailure {
            failed,
            total: outcomes.len(),
            what: "modules",
        });
    }
    Ok(())
}

fn report(outcome: &ModuleOutcome, bootstrap: &str, output: &OutputManager) -> CliResult<()> {
    let report = match &outcome.result {
        Ok(report) => report,
        Err(err) => {
            output.error(&format!("{}: {err}", outcome.input))?;
            return Ok(());
        }
    };

    let name = report.module.name.as_str();
    output.header(&format!("Module {name}"))?;
    for dir in &report.created_directories {
        output.print(&format!("  created  {}", display(dir)))?;
    }
    for file in &report.written_files {
        output.print(&format!("  written  {}", display(file)))?;
    }
    for file in &report.skipped_files {
        output.print(&format!(
            "  skipped  {} {}",
            display(file),
            output.dim("(exists, use --force to overwrite)")
        ))?;
    }
    for failure in &report.failed_files {
        output.error(&format!("{}: {}", display(&failure.path), failure.reason))?;
    }

    match report.registration {
        Registration::Registered => {
            output.info(&format!(
                "Registered {} in {bootstrap}",
                report.module.provider_class
            ))?;
        }
        Registration::AlreadyRegistered => {
            output.info(&format!("Provider already registered in {bootstrap}"))?;
        }
        Registration::BootstrapMissing => {
            output.warning(&format!(
                "{bootstrap} not found; register {} manually",
                report.module.provider_class
            ))?;
        }
        Registration::NoProviderArray => {
            output.warning(&format!(
                "No provider array in {bootstrap}; register {} manually",
                report.module.provider_class
            ))?;
        }
        Registration::NotRequested => {}
    }

    if report.is_complete() {
        output.success(&format!("Module '{name}' ready"))?;
    }
    Ok(())
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// JSON shape of one outcome.
#[derive(Serialize)]
struct OutcomeView<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a ModuleReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> From<&'a ModuleOutcome> for OutcomeView<'a> {
    fn from(outcome: &'a ModuleOutcome) -> Self {
        let (report, error) = match &outcome.result {
            Ok(report) => (Some(report), None),
            Err(err) => (None, Some(err.to_string())),
        };
        Self {
            input: &outcome.input,
            report,
            error,
        }
    }
}
