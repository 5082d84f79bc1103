//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Print the canonical form of a path
//! - `common_base`: Print the shared base of two paths
//! - `is_descendant`: Predicate, location at or below a base
//! - `is_child`: Predicate, location exactly one segment below a base
//! - `is_folder_glob`: Predicate, path ends in `*`
//! - `split`: Split a path into relative part and root
//! - `relationship`: Classify two locations
//! - `completions`: Shell completion scripts
//!
//! Predicates print `true` or `false` and exit with status 1 on `false`.

pub mod common_base;
pub mod completions;
pub mod is_child;
pub mod is_descendant;
pub mod is_folder_glob;
pub mod normalize;
pub mod relationship;
pub mod split;

pub use common_base::CommonBaseCommand;
pub use completions::CompletionsCommand;
pub use is_child::IsChildCommand;
pub use is_descendant::IsDescendantCommand;
pub use is_folder_glob::IsFolderGlobCommand;
pub use normalize::NormalizeCommand;
pub use relationship::RelationshipCommand;
pub use split::SplitCommand;
