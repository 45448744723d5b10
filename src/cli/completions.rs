//! Completions command.
//!
//! Writes a completion script for the requested shell to stdout.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};

use crate::cli::{Cli, Shell};
use crate::error::Result;

impl From<Shell> for CompletionShell {
    fn from(shell: Shell) -> Self {
        match shell {
            Shell::Bash => CompletionShell::Bash,
            Shell::Zsh => CompletionShell::Zsh,
            Shell::Fish => CompletionShell::Fish,
            Shell::PowerShell => CompletionShell::PowerShell,
        }
    }
}

/// Generate shell completions.
pub fn execute(shell: Shell) -> Result<()> {
    write(shell, &mut io::stdout())
}

fn write(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(CompletionShell::from(shell), &mut cmd, "configlake", &mut *out);
    out.flush()?;
    Ok(())
}
