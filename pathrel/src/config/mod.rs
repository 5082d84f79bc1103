//! Configuration system for pathrel.
//!
//! Configuration decides which [`PlatformRules`](crate::PlatformRules) the
//! CLI and other callers use. Sources are layered, highest precedence first:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHREL_PLATFORM`, `PATHREL_CASE_SENSITIVE`,
//!    `PATHREL_DRIVE_LETTERS`)
//! 3. Files passed to `ConfigBuilder::with_file`
//! 4. Project config (`pathrel.yaml`, nearest one above the working directory)
//! 5. User config (`~/.pathrel/config.yaml`)
//! 6. Built-in default: the host platform
//!
//! # Examples
//!
//! ```no_run
//! use pathrel::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! let rules = config.platform_rules();
//! println!("case sensitive: {}", rules.case_sensitive);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
