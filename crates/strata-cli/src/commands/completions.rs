//! `strata completions <shell>`.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell as Target;

use crate::{
    cli::{Cli, CompletionsArgs, Shell},
    error::CliResult,
};

const BIN_NAME: &str = "strata";

impl From<Shell> for Target {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => Self::Bash,
            Shell::Zsh => Self::Zsh,
            Shell::Fish => Self::Fish,
            Shell::PowerShell => Self::PowerShell,
            Shell::Elvish => Self::Elvish,
        }
    }
}

pub fn execute(args: CompletionsArgs) -> CliResult<()> {
    let mut out = std::io::stdout().lock();
    write_script(args.shell, &mut out);
    out.flush()?;
    Ok(())
}

fn write_script(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(Target::from(shell), &mut cmd, BIN_NAME, out);
}
