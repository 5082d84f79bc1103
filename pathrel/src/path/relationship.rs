//! Path relationship checking.
//!
//! This module classifies how two locations relate to each other in the
//! hierarchy, built on [`is_descendant`].

use super::hierarchy::is_descendant;
use super::location::Location;
use crate::platform::PlatformRules;

/// Relationship between two locations.
///
/// # Examples
///
/// ```
/// use pathrel::{PathRelationship, PlatformRules};
///
/// let rules = PlatformRules::posix();
/// assert_eq!(
///     PathRelationship::between("/home/user", "/home/user/project", rules),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first location is an ancestor of the second.
    ///
    /// The second location is somewhere beneath the first.
    Ancestor,

    /// The first location is a descendant of the second.
    ///
    /// The first location is somewhere beneath the second.
    Descendant,

    /// After normalization the locations are the same.
    Same,

    /// Neither location is below the other. Structured locations with a
    /// different scheme or authority are always unrelated.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two locations.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathrel::{PathRelationship, PlatformRules, StructuredLocation};
    ///
    /// let rules = PlatformRules::posix();
    /// assert_eq!(PathRelationship::between("/a/b", "/a", rules), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between("/a/", "/a", rules), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between("/a", "/b", rules), PathRelationship::Unrelated);
    ///
    /// let here = StructuredLocation::new("file", "host-a", "/a");
    /// let there = StructuredLocation::new("file", "host-b", "/a");
    /// assert_eq!(PathRelationship::between(&here, &there, rules), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between<'a, 'b>(
        first: impl Into<Location<'a>>,
        second: impl Into<Location<'b>>,
        rules: PlatformRules,
    ) -> Self {
        let first = first.into();
        let second = second.into();

        match (
            is_descendant(first, second, rules),
            is_descendant(second, first, rules),
        ) {
            (true, true) => Self::Same,
            (true, false) => Self::Descendant,
            (false, true) => Self::Ancestor,
            (false, false) => Self::Unrelated,
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathrel::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Short lowercase name, as printed by the CLI.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ancestor => "ancestor",
            Self::Descendant => "descendant",
            Self::Same => "same",
            Self::Unrelated => "unrelated",
        }
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathrel::{Location, PathRelationship};
    ///
    /// let desc = PathRelationship::Ancestor.description(Location::from("/a"), Location::from("/a/b"));
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, first: Location<'_>, second: Location<'_>) -> String {
        match self {
            Self::Ancestor => format!("{first} is an ancestor of {second}"),
            Self::Descendant => format!("{first} is a descendant of {second}"),
            Self::Same => format!("{first} and {second} are the same location"),
            Self::Unrelated => format!("{first} and {second} are unrelated"),
        }
    }
}
