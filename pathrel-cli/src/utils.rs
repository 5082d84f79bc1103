//! Utility functions for CLI operations.
//!
//! This module resolves the platform rules a command runs under, turns
//! command-line arguments into locations and writes results in the selected
//! output format.

use crate::cli::OutputFormat;
use crate::error::CliError;
use pathrel::{ConfigBuilder, Location, Logger, PlatformPreset, PlatformRules, StructuredLocation};
use std::io::{self, Write};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Platform preset given on the command line.
    pub platform: Option<PlatformPreset>,

    /// Extra configuration file given on the command line.
    pub config: Option<PathBuf>,

    /// Output format for results.
    pub format: OutputFormat,

    /// Logger for diagnostics on stderr.
    pub logger: Logger,
}

/// Resolve the platform rules a command should use.
///
/// Priority order:
/// 1. `--platform` (the preset is used as-is and no files are read)
/// 2. Layered configuration: `--config` file, `PATHREL_*` environment
///    variables, `pathrel.yaml`, `~/.pathrel/config.yaml`
/// 3. The host platform
pub fn resolve_rules(global: &GlobalOptions) -> Result<PlatformRules, CliError> {
    if let Some(preset) = global.platform {
        global
            .logger
            .info(&format!("Using {preset} platform rules from --platform"));
        return Ok(preset.rules());
    }

    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_file(path);
    }

    let config = builder.build().map_err(|e| CliError::Config(e.to_string()))?;
    let rules = config.platform_rules();

    global.logger.info(&format!(
        "Using platform rules: case_sensitive={}, drive_letters={}",
        rules.case_sensitive, rules.has_drive_letters
    ));

    Ok(rules)
}

/// A location argument, owned so it can be borrowed as a [`Location`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationArg {
    /// A plain path.
    Plain(String),
    /// A `scheme://authority/path` location.
    Structured(StructuredLocation),
}

impl LocationArg {
    /// Parse a command-line argument. Anything containing `://` must be a
    /// valid structured location; everything else is a plain path.
    pub fn parse(arg: &str) -> Result<Self, CliError> {
        if arg.contains("://") {
            let location = arg.parse::<StructuredLocation>()?;
            Ok(Self::Structured(location))
        } else {
            Ok(Self::Plain(arg.to_string()))
        }
    }

    /// Borrow as a [`Location`].
    pub fn as_location(&self) -> Location<'_> {
        match self {
            Self::Plain(path) => Location::from(path.as_str()),
            Self::Structured(location) => Location::from(location),
        }
    }
}

/// Resolve the `--ignore-case` / `--match-case` pair into an override.
pub fn case_override(ignore_case: bool, match_case: bool) -> Option<bool> {
    match (ignore_case, match_case) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Write a single JSON document followed by a newline to stdout.
pub fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}

/// Print a predicate's answer and turn "false" into exit code 1.
pub fn report_predicate(global: &GlobalOptions, answer: bool) -> Result<(), CliError> {
    match global.format {
        OutputFormat::Text => println!("{answer}"),
        OutputFormat::Json => print_json(&serde_json::json!({ "result": answer }))?,
    }

    if answer {
        Ok(())
    } else {
        Err(CliError::Unsatisfied)
    }
}
