//! Command to check whether a location is directly below a base.

use crate::error::CliError;
use crate::utils::{report_predicate, resolve_rules, GlobalOptions, LocationArg};
use clap::Args;

/// Check whether a location is exactly one segment below a base.
#[derive(Args)]
pub struct IsChildCommand {
    /// Location to test
    #[arg(value_name = "LOCATION")]
    pub location: String,

    /// Base location
    #[arg(value_name = "BASE")]
    pub base: String,
}

impl IsChildCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let rules = resolve_rules(global)?;
        let location = LocationArg::parse(&self.location)?;
        let base = LocationArg::parse(&self.base)?;

        let answer = pathrel::is_child(location.as_location(), base.as_location(), rules);
        report_predicate(global, answer)
    }
}
