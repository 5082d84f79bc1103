//! Command to split a path into a relative part and a root.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::utils::{case_override, print_json, resolve_rules, GlobalOptions};
use clap::Args;

/// Split a path into a root and the path relative to it.
///
/// Text output is two lines: the relative path, then the root.
#[derive(Args)]
pub struct SplitCommand {
    /// Path to split
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Root to split at
    #[arg(long, value_name = "ROOT")]
    pub root: Option<String>,

    /// Without --root, split into file name and parent directory
    #[arg(long)]
    pub split_on_base: bool,

    /// Compare case-insensitively regardless of platform
    #[arg(long, conflicts_with = "match_case")]
    pub ignore_case: bool,

    /// Compare case-sensitively regardless of platform
    #[arg(long)]
    pub match_case: bool,
}

impl SplitCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let rules = resolve_rules(global)?;
        let (relative, root) = pathrel::split_path(
            &self.path,
            self.root.as_deref(),
            self.split_on_base,
            case_override(self.ignore_case, self.match_case),
            rules,
        );

        match global.format {
            OutputFormat::Text => {
                println!("{relative}");
                println!("{root}");
            }
            OutputFormat::Json => print_json(&serde_json::json!({
                "relative": relative,
                "root": root,
            }))?,
        }

        Ok(())
    }
}
