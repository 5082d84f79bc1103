//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "pathrel";

/// Generate shell completion scripts
#[derive(Parser)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    ///
    /// The script goes to stdout; installation hints go to stderr unless
    /// `--quiet` is set.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            if let Some(hint) = install_hint(self.shell) {
                eprintln!("# Generating {} completion script", self.shell);
                eprintln!("# To enable completions:");
                eprintln!("#   {hint}");
                eprintln!();
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}

fn install_hint(shell: Shell) -> Option<&'static str> {
    match shell {
        Shell::Bash => Some("pathrel completions bash > ~/.local/share/bash-completion/completions/pathrel"),
        Shell::Zsh => Some("pathrel completions zsh > ~/.zsh/completions/_pathrel"),
        Shell::Fish => Some("pathrel completions fish > ~/.config/fish/completions/pathrel.fish"),
        Shell::PowerShell => Some("pathrel completions powershell | Out-String | Invoke-Expression"),
        _ => None,
    }
}
