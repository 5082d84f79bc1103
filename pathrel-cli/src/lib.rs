//! Library exports for pathrel-cli.
//!
//! The binary is a thin wrapper over [`run`]; exposing the pieces here lets
//! integration tests and tooling reach the CLI definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;

use cli::Command;
use error::CliError;
use utils::GlobalOptions;

/// Execute a parsed command line.
pub fn run(cli: Cli) -> Result<(), CliError> {
    let logger = pathrel::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        logger.warn(&format!("could not install logger: {e}"));
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        platform: cli.platform,
        config: cli.config,
        format: cli.format,
        logger,
    };

    match cli.command {
        Command::Normalize(cmd) => cmd.execute(&global),
        Command::CommonBase(cmd) => cmd.execute(&global),
        Command::IsDescendant(cmd) => cmd.execute(&global),
        Command::IsChild(cmd) => cmd.execute(&global),
        Command::IsFolderGlob(cmd) => cmd.execute(&global),
        Command::Split(cmd) => cmd.execute(&global),
        Command::Relationship(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    }
}
