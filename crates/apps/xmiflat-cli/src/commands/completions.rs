//! Completions command.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::{Cli, CompletionShell};
use crate::error::CliResult;

impl From<CompletionShell> for Shell {
    fn from(shell: CompletionShell) -> Self {
        match shell {
            CompletionShell::Bash => Shell::Bash,
            CompletionShell::Zsh => Shell::Zsh,
            CompletionShell::Fish => Shell::Fish,
            CompletionShell::PowerShell => Shell::PowerShell,
        }
    }
}

/// Write the completion script for `shell` to `out`.
pub fn write_completions<W: Write>(shell: CompletionShell, out: &mut W) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(Shell::from(shell), &mut cmd, name, out);
}

/// Completion script for `shell`, returned for the caller to print.
pub fn completions(shell: CompletionShell) -> CliResult<String> {
    let mut script = Vec::new();
    write_completions(shell, &mut script);
    Ok(String::from_utf8_lossy(&script).trim_end().to_string())
}
