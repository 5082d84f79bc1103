//! Main entry point for the pathrel CLI.
//!
//! Commands answer questions about path hierarchies:
//! - `normalize`: Canonical form of a path
//! - `common-base`: Shared base of two paths
//! - `is-descendant` / `is-child`: Hierarchy predicates
//! - `split`: Root and relative remainder of a path
//! - `relationship`: Classification of two locations

use clap::Parser;
use pathrel_cli::Cli;

fn main() {
    let cli = Cli::parse();

    match pathrel_cli::run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if e.is_reported() {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
