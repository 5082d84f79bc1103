//! Command to print the normalized form of a path.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::utils::{print_json, resolve_rules, GlobalOptions};
use clap::Args;

/// Print the normalized form of a path.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let rules = resolve_rules(global)?;
        let normalized = pathrel::normalize(&self.path, rules);

        match global.format {
            OutputFormat::Text => println!("{normalized}"),
            OutputFormat::Json => print_json(&serde_json::json!({
                "input": self.path,
                "normalized": normalized,
            }))?,
        }

        Ok(())
    }
}
