//! Diagnostics on stderr.
//!
//! `-v` reports each module and component written. `-vv` adds stub lookups
//! and skipped files, and `-vvv` traces every stub render. With
//! `--output-format json` the events go out as JSON lines, keeping stdout a
//! single parseable document.
//!
//! `RUST_LOG` replaces the derived filter when set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{GlobalArgs, OutputFormat};

/// Crates whose events are shown.
const TARGETS: [&str; 3] = ["strata", "strata_core", "strata_adapters"];

#[derive(Debug, Clone, PartialEq, Eq)]
struct LogSettings {
    level: &'static str,
    json: bool,
    ansi: bool,
}

impl LogSettings {
    fn from_args(args: &GlobalArgs, stderr_is_tty: bool) -> Self {
        let json = args.output_format == OutputFormat::Json;
        Self {
            level: derive_level(args),
            json,
            ansi: !json && !args.no_color && stderr_is_tty,
        }
    }

    fn directives(&self) -> String {
        TARGETS
            .iter()
            .map(|target| format!("{target}={}", self.level))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let settings = LogSettings::from_args(args, std::io::stderr().is_terminal());
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.directives()));

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if settings.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(settings.ansi)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: false,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_maps_to_levels() {
        for (count, expected) in [(0, "warn"), (1, "info"), (2, "debug"), (3, "trace"), (9, "trace")] {
            assert_eq!(derive_level(&args_with(count, false)), expected, "-v x{count}");
        }
    }

    #[test]
    fn quiet_overrides_verbose() {
        assert_eq!(derive_level(&args_with(0, true)), "error");
        assert_eq!(derive_level(&args_with(3, true)), "error");
    }

    #[test]
    fn directives_cover_every_workspace_crate() {
        let settings = LogSettings::from_args(&args_with(2, false), false);
        assert_eq!(
            settings.directives(),
            "strata=debug,strata_core=debug,strata_adapters=debug"
        );
    }

    #[test]
    fn json_output_switches_logs_to_json_without_colour() {
        let mut args = args_with(1, false);
        args.output_format = OutputFormat::Json;
        let settings = LogSettings::from_args(&args, true);
        assert!(settings.json);
        assert!(!settings.ansi);
    }

    #[test]
    fn colour_needs_a_terminal() {
        let args = args_with(0, false);
        assert!(LogSettings::from_args(&args, true).ansi);
        assert!(!LogSettings::from_args(&args, false).ansi);

        let mut args = args_with(0, false);
        args.no_color = true;
        assert!(!LogSettings::from_args(&args, true).ansi);
    }
}
