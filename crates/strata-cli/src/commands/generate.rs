//! `strata make` and `strata generate`.
//!
//! Both build a [`ComponentRequest`]; `make` takes the key from the typed
//! [`Kind`](crate::cli::Kind), `generate` passes it through as given.

use tracing::instrument;

use strata_core::{
    application::{ComponentRequest, ComponentService, GeneratedComponent, WriteStatus},
    domain::ComponentKind,
};

use crate::{
    cli::{GenerateArgs, MakeArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(kind = ?args.kind))]
pub fn execute_typed(args: MakeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let target = args.target;
    let request = ComponentRequest::typed(ComponentKind::from(args.kind), target.module, target.name)
        .with_force(target.force);
    run(&request, config, &output)
}

#[instrument(skip_all, fields(key = %args.key))]
pub fn execute_custom(
    args: GenerateArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let target = args.target;
    let request =
        ComponentRequest::custom(args.key, target.module, target.name).with_force(target.force);
    run(&request, config, &output)
}

fn run(request: &ComponentRequest, config: AppConfig, output: &OutputManager) -> CliResult<()> {
    let service = ComponentService::new(
        config.modules.clone(),
        super::stubs(&config.modules),
        super::renderer(),
        super::filesystem(),
    );

    let generated = service.make(request)?;

    if output.wants_json(false) {
        return output.json(&generated);
    }
    describe(&generated, output)
}

fn describe(generated: &GeneratedComponent, output: &OutputManager) -> CliResult<()> {
    match generated.status {
        WriteStatus::Written => {
            output.success(&format!(
                "Created {} {}",
                generated.key,
                generated.path.display()
            ))?;
            output.print(&format!("  {}", output.dim(&generated.fqcn)))?;
        }
        WriteStatus::Skipped => {
            output.warning(&format!(
                "{} already exists, use --force to overwrite",
                generated.path.display()
            ))?;
        }
    }
    Ok(())
}
