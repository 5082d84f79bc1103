//! Command to classify how two locations relate.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::utils::{print_json, resolve_rules, GlobalOptions, LocationArg};
use clap::Args;
use pathrel::PathRelationship;

/// Classify two locations as ancestor, descendant, same or unrelated.
///
/// The answer describes the first location relative to the second.
#[derive(Args)]
pub struct RelationshipCommand {
    /// First location
    #[arg(value_name = "A")]
    pub a: String,

    /// Second location
    #[arg(value_name = "B")]
    pub b: String,
}

impl RelationshipCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let rules = resolve_rules(global)?;
        let a = LocationArg::parse(&self.a)?;
        let b = LocationArg::parse(&self.b)?;

        let relationship = PathRelationship::between(a.as_location(), b.as_location(), rules);
        let description = relationship.description(a.as_location(), b.as_location());
        global.logger.info(&description);

        match global.format {
            OutputFormat::Text => println!("{}", relationship.as_str()),
            OutputFormat::Json => print_json(&serde_json::json!({
                "relationship": relationship.as_str(),
                "hierarchical": relationship.is_hierarchical(),
                "description": description,
            }))?,
        }

        Ok(())
    }
}
