//! Path hierarchy reasoning over plain and structured locations.
//!
//! Everything in this module is pure string/structural work: nothing touches
//! the filesystem, resolves symlinks or checks that a path is legal.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! [`normalize::normalize`] produces the canonical form comparisons run on:
//! `/` as the only separator, no trailing separator (except for the root) and,
//! on drive-letter platforms, a lower-case drive letter.
//!
//! ## Common bases
//!
//! [`common_base::common_base_index`] finds the last delimiter inside the
//! shared prefix of two strings, so a cut there never splits a segment.
//!
//! ## Descendants and children
//!
//! [`hierarchy::is_descendant`] and [`hierarchy::is_child`] accept any mix of
//! plain paths and [`StructuredLocation`]s. A location is its own descendant
//! but never its own child.
//!
//! ## Splitting
//!
//! [`split::split_path`] separates a path into a root and the remainder.
//!
//! # Examples
//!
//! ```
//! use pathrel::path::{is_child, is_descendant, split_path};
//! use pathrel::PlatformRules;
//!
//! let rules = PlatformRules::posix();
//!
//! assert!(is_descendant("/repo/src/file.ts", "/repo", rules));
//! assert!(!is_child("/repo/src/file.ts", "/repo", rules));
//! assert!(is_child("/repo/src", "/repo", rules));
//!
//! let (relative, root) = split_path("/repo/src/file.ts", Some("/repo"), false, None, rules);
//! assert_eq!((relative.as_str(), root.as_str()), ("src/file.ts", "/repo"));
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use pathrel::path::PathRelationship;
//! use pathrel::PlatformRules;
//!
//! let rel = PathRelationship::between("/home/user", "/home/user/project", PlatformRules::posix());
//! assert_eq!(rel, PathRelationship::Ancestor);
//! assert!(rel.is_hierarchical());
//! ```

pub mod common_base;
pub mod hierarchy;
pub mod location;
pub mod normalize;
pub mod relationship;
pub mod segments;
pub mod split;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use common_base::{common_base, common_base_index};
pub use hierarchy::{is_child, is_descendant, is_folder_glob};
pub use location::{Location, StructuredLocation};
pub use normalize::normalize;
pub use relationship::PathRelationship;
pub use segments::{basename, dirname};
pub use split::split_path;
