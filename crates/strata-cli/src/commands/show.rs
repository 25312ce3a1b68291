//! Implementation of the `strata show` command.

use strata_core::application::{InspectionService, ModuleDetails};

use crate::{cli::ShowArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: ShowArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = InspectionService::new(config.modules.clone(), super::filesystem());
    let details = service.show(args.module.as_deref())?;

    if output.wants_json(args.json) {
        // A named module is shown as an object, the full listing as an array.
        return match (&args.module, details.as_slice()) {
            (Some(_), [single]) => output.json(single),
            _ => output.json(&details),
        };
    }

    if details.is_empty() {
        output.info(&format!("No modules found in {}", config.modules.base_path))?;
        return Ok(());
    }

    for (index, module) in details.iter().enumerate() {
        if index > 0 {
            output.data("")?;
        }
        describe(module, &output)?;
    }
    Ok(())
}

fn describe(module: &ModuleDetails, output: &OutputManager) -> CliResult<()> {
    output.header(&format!("Module {}", module.name))?;
    output.data(&format!("  Path:          {}", module.path.display()))?;
    output.data(&format!("  Namespace:     {}", module.namespace))?;
    output.data(&format!("  Provider:      {}", module.provider_class))?;
    output.data(&format!(
        "  Registered:    {}",
        registration_label(module.registered, module.auto_discover)
    ))?;

    let folders = &module.folders;
    section(output, "Scaffold", &folders.scaffold)?;
    section(output, "Layers", &folders.generated)?;
    section(output, "Component folders", &folders.paths)?;
    section(output, "Test folders", &folders.test_paths)?;
    section(output, "Additional", &folders.additional)?;

    let missing: Vec<String> = folders
        .missing_scaffold
        .iter()
        .chain(&folders.missing_generated)
        .chain(&folders.missing_paths)
        .chain(&folders.missing_test_paths)
        .cloned()
        .collect();
    if !missing.is_empty() {
        output.warning(&format!("Missing: {}", missing.join(", ")))?;
    }
    Ok(())
}

fn section(output: &OutputManager, title: &str, entries: &[String]) -> CliResult<()> {
    if entries.is_empty() {
        return Ok(());
    }
    output.data(&format!("  {title}:"))?;
    for entry in entries {
        output.data(&format!("    {entry}"))?;
    }
    Ok(())
}

fn registration_label(registered: Option<bool>, auto_discover: bool) -> &'static str {
    match (registered, auto_discover) {
        (Some(true), _) => "yes",
        (Some(false), true) => "no (auto-discovery enabled)",
        (Some(false), false) => "no",
        (None, _) => "unknown (no bootstrap file)",
    }
}
