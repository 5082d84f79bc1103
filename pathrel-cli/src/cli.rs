//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CommonBaseCommand, CompletionsCommand, IsChildCommand, IsDescendantCommand,
    IsFolderGlobCommand, NormalizeCommand, RelationshipCommand, SplitCommand,
};
use clap::{Parser, Subcommand, ValueEnum};
use pathrel::PlatformPreset;
use std::path::PathBuf;

/// Platform-aware reasoning about path hierarchies.
#[derive(Parser)]
#[command(name = "pathrel")]
#[command(version, about = "Reason about path hierarchies across platforms", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Platform rules to apply (posix, windows, macos, host)
    #[arg(long, value_name = "PRESET", global = true)]
    pub platform: Option<PlatformPreset>,

    /// Additional configuration file layered above discovered ones
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true, ignore_case = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one value per line
    Text,
    /// A single JSON object
    Json,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the normalized form of a path
    Normalize(NormalizeCommand),

    /// Print the longest common base of two paths
    CommonBase(CommonBaseCommand),

    /// Check whether a location is at or below a base
    IsDescendant(IsDescendantCommand),

    /// Check whether a location is directly below a base
    IsChild(IsChildCommand),

    /// Check whether a path ends in a `*` folder wildcard
    IsFolderGlob(IsFolderGlobCommand),

    /// Split a path into a root and a relative remainder
    Split(SplitCommand),

    /// Classify how two locations relate
    Relationship(RelationshipCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
