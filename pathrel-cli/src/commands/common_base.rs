//! Command to print the common base of two paths.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::utils::{case_override, print_json, resolve_rules, GlobalOptions};
use clap::Args;

/// Print the longest common base of two paths.
///
/// Paths are compared as given; normalize them first if their spelling may
/// differ.
#[derive(Args)]
pub struct CommonBaseCommand {
    /// First path
    #[arg(value_name = "A")]
    pub a: String,

    /// Second path
    #[arg(value_name = "B")]
    pub b: String,

    /// Segment delimiter
    #[arg(long, value_name = "CHAR", default_value = "/")]
    pub delimiter: char,

    /// Compare case-insensitively regardless of platform
    #[arg(long, conflicts_with = "match_case")]
    pub ignore_case: bool,

    /// Compare case-sensitively regardless of platform
    #[arg(long)]
    pub match_case: bool,
}

impl CommonBaseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let rules = resolve_rules(global)?;
        let ignore_case = case_override(self.ignore_case, self.match_case);

        let index = pathrel::common_base_index(&self.a, &self.b, self.delimiter, ignore_case, rules);
        let base = pathrel::common_base(&self.a, &self.b, self.delimiter, ignore_case, rules);

        match (global.format, &base) {
            (OutputFormat::Text, Some(base)) => println!("{base}"),
            (OutputFormat::Text, None) => {}
            (OutputFormat::Json, _) => print_json(&serde_json::json!({
                "base": base,
                "index": index,
            }))?,
        }

        if base.is_none() {
            return Err(CliError::SemanticFailure(format!(
                "{} and {} have no common base",
                self.a, self.b
            )));
        }

        Ok(())
    }
}
