//! Implementation of the `strata list` command.

use strata_core::application::{InspectionService, ModuleSummary, RouteFiles};

use crate::{cli::ListArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = InspectionService::new(config.modules.clone(), super::filesystem());
    let modules = service.list_modules(args.routes)?;

    // JSON must stay parseable when piped, so it bypasses the quiet check.
    if output.wants_json(args.json) {
        return output.json(&modules);
    }

    if modules.is_empty() {
        output.info(&format!("No modules found in {}", config.modules.base_path))?;
        return Ok(());
    }

    output.header(&format!("Modules in {}:", config.modules.base_path))?;
    for module in &modules {
        output.data(&row(module, &output))?;
    }
    Ok(())
}

fn row(module: &ModuleSummary, output: &OutputManager) -> String {
    let mut line = format!("  {:<20} {}", module.name, output.dim(&module.namespace));
    if let Some(routes) = module.routes {
        line.push_str(&format!("  routes: {}", route_list(routes)));
    }
    line
}

fn route_list(routes: RouteFiles) -> String {
    let present: Vec<&str> = [
        ("web", routes.web),
        ("api", routes.api),
        ("console", routes.console),
    ]
    .into_iter()
    .filter_map(|(name, exists)| exists.then_some(name))
    .collect();

    if present.is_empty() {
        "none".into()
    } else {
        present.join(", ")
    }
}
