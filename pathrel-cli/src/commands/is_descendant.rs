//! Command to check whether a location is at or below a base.

use crate::error::CliError;
use crate::utils::{report_predicate, resolve_rules, GlobalOptions, LocationArg};
use clap::Args;

/// Check whether a location is at or below a base.
///
/// Arguments containing `://` are parsed as `scheme://authority/path`.
#[derive(Args)]
pub struct IsDescendantCommand {
    /// Location to test
    #[arg(value_name = "LOCATION")]
    pub location: String,

    /// Base location
    #[arg(value_name = "BASE")]
    pub base: String,
}

impl IsDescendantCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let rules = resolve_rules(global)?;
        let location = LocationArg::parse(&self.location)?;
        let base = LocationArg::parse(&self.base)?;

        let answer = pathrel::is_descendant(location.as_location(), base.as_location(), rules);
        report_predicate(global, answer)
    }
}
