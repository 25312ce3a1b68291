//! `strata config` - inspect the resolved configuration.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.data(&value)?;
        }

        ConfigCommands::List => {
            if output.wants_json(false) {
                return output.json(&config);
            }
            let serialised = config
                .to_toml()
                .with_cli_context(|| "Failed to serialise config")?;
            output.header("Current Configuration:")?;
            output.data(serialised.trim_end())?;
        }

        ConfigCommands::Path => {
            let project = AppConfig::project_file(config_file.as_ref());
            let state = if project.is_file() { "" } else { " (not found)" };
            output.data(&format!("{}{state}", project.display()))?;
            if let Some(user) = AppConfig::user_file() {
                output.info(&format!("User configuration: {}", user.display()))?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    config
        .get(key.trim())
        .ok_or_else(|| CliError::UnknownConfigKey { key: key.into() })
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "modules.base_namespace").unwrap(),
            "App\\Modules"
        );
    }

    #[test]
    fn get_list_value_as_json() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "modules.scaffold").unwrap(),
            r#"["Providers","config","routes"]"#
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
