#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathrel
//!
//! Platform-aware reasoning about path hierarchies.
//!
//! This library answers questions such as "is this location inside that
//! folder?", "what do these two paths have in common?" and "what is this path
//! relative to that root?" for both plain paths and structured locations
//! (`scheme://authority/path`). It never touches the filesystem; platform
//! behavior is passed in explicitly as [`PlatformRules`].
//!
//! ## Core Types
//!
//! - [`PlatformRules`] and [`PlatformPreset`]: Case-sensitivity and drive-letter behavior
//! - [`Location`] and [`StructuredLocation`]: The inputs hierarchy checks accept
//! - [`PathRelationship`]: Classification of two locations
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration of platform rules
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathrel::{common_base, is_child, is_descendant, normalize, PlatformRules};
//!
//! let windows = PlatformRules::windows();
//! assert_eq!(normalize(r"C:\Users\dev\", windows), "c:/Users/dev");
//! assert!(is_descendant(r"C:\Users\dev\src", "c:/Users/dev", windows));
//!
//! let posix = PlatformRules::posix();
//! assert!(is_child("/a/b", "/a", posix));
//! assert_eq!(
//!     common_base("/a/b/c", "/a/b/d", '/', None, posix).as_deref(),
//!     Some("/a/b")
//! );
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod platform;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    basename, common_base, common_base_index, dirname, is_child, is_descendant, is_folder_glob,
    normalize, split_path, Location, PathRelationship, StructuredLocation,
};
pub use platform::{PlatformPreset, PlatformRules};
