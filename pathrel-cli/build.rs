//! Build script for pathrel-cli.
//!
//! Generates the `pathrel.1` man page into `OUT_DIR` with `clap_mangen`.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is described again here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

fn location_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("location").value_name("LOCATION").required(true))
        .arg(Arg::new("base").value_name("BASE").required(true))
}

fn case_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("ignore-case")
            .long("ignore-case")
            .help("Compare case-insensitively regardless of platform")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("match-case")
            .long("match-case")
            .help("Compare case-sensitively regardless of platform")
            .action(ArgAction::SetTrue),
    )
}

/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("pathrel")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reason about path hierarchies across platforms")
        .long_about(
            "Normalize paths, find common bases and test ancestor, descendant and child \
             relationships between plain paths and scheme://authority/path locations, \
             using posix, windows or macos comparison rules",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("platform")
                .long("platform")
                .value_name("PRESET")
                .help("Platform rules to apply (posix, windows, macos, host)")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Additional configuration file layered above discovered ones")
                .global(true),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Output format (text, json)")
                .global(true),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Print the normalized form of a path")
                .arg(Arg::new("path").value_name("PATH").required(true)),
            case_args(
                Command::new("common-base")
                    .about("Print the longest common base of two paths")
                    .arg(Arg::new("a").value_name("A").required(true))
                    .arg(Arg::new("b").value_name("B").required(true))
                    .arg(
                        Arg::new("delimiter")
                            .long("delimiter")
                            .value_name("CHAR")
                            .help("Segment delimiter"),
                    ),
            ),
            location_args(
                Command::new("is-descendant")
                    .about("Check whether a location is at or below a base"),
            ),
            location_args(
                Command::new("is-child").about("Check whether a location is directly below a base"),
            ),
            Command::new("is-folder-glob")
                .about("Check whether a path ends in a * folder wildcard")
                .arg(Arg::new("path").value_name("PATH").required(true)),
            case_args(
                Command::new("split")
                    .about("Split a path into a root and a relative remainder")
                    .arg(Arg::new("path").value_name("PATH").required(true))
                    .arg(Arg::new("root").long("root").value_name("ROOT"))
                    .arg(
                        Arg::new("split-on-base")
                            .long("split-on-base")
                            .action(ArgAction::SetTrue),
                    ),
            ),
            Command::new("relationship")
                .about("Classify how two locations relate")
                .arg(Arg::new("a").value_name("A").required(true))
                .arg(Arg::new("b").value_name("B").required(true)),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").value_name("SHELL").required(true)),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::other("OUT_DIR not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("pathrel.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
