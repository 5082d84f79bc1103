//! Command to check for a trailing `*` folder wildcard.

use crate::error::CliError;
use crate::utils::{report_predicate, GlobalOptions};
use clap::Args;

/// Check whether the last segment of a path is exactly `*`.
#[derive(Args)]
pub struct IsFolderGlobCommand {
    /// Path or pattern to test
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl IsFolderGlobCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        report_predicate(global, pathrel::is_folder_glob(&self.path))
    }
}
