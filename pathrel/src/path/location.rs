//! Core location types.
//!
//! A location is either a plain path string or a structured identifier made of
//! a scheme, an authority and a slash-delimited path. The hierarchy functions
//! accept either kind for both of their arguments through [`Location`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A `{scheme, authority, path}` location supplied by the calling system.
///
/// The `path` is slash-delimited and conceptually begins with `/`; a stored
/// path without the leading slash is compared as if it had one.
///
/// # Examples
///
/// ```
/// use pathrel::StructuredLocation;
///
/// let loc: StructuredLocation = "file://server/share/docs".parse().unwrap();
/// assert_eq!(loc.scheme, "file");
/// assert_eq!(loc.authority, "server");
/// assert_eq!(loc.path, "/share/docs");
/// assert_eq!(loc.to_string(), "file://server/share/docs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StructuredLocation {
    /// Scheme, e.g. `file` or `vscode-remote`.
    pub scheme: String,
    /// Authority, e.g. a host name; may be empty.
    pub authority: String,
    /// Slash-delimited path.
    pub path: String,
}

impl StructuredLocation {
    /// Create a structured location from its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathrel::StructuredLocation;
    ///
    /// let loc = StructuredLocation::new("git", "", "/repo/src");
    /// assert_eq!(loc.path, "/repo/src");
    /// ```
    #[must_use]
    pub fn new(
        scheme: impl Into<String>,
        authority: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            authority: authority.into(),
            path: path.into(),
        }
    }

    /// Whether `other` has the same scheme and authority.
    #[must_use]
    pub fn same_origin(&self, other: &Self) -> bool {
        self.scheme == other.scheme && self.authority == other.authority
    }
}

impl fmt::Display for StructuredLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority)?;
        if !self.path.is_empty() && !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)
    }
}

impl FromStr for StructuredLocation {
    type Err = Error;

    /// Parse `scheme://authority/path`.
    ///
    /// Only the structure is split out; no percent-decoding or other URI
    /// processing is done.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidLocation {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (scheme, rest) = s
            .split_once("://")
            .ok_or_else(|| invalid("missing '://' after scheme"))?;

        if !is_valid_scheme(scheme) {
            return Err(invalid(
                "scheme must start with a letter and contain only letters, digits, '+', '-' or '.'",
            ));
        }

        let (authority, path) = match rest.find('/') {
            Some(slash) => rest.split_at(slash),
            None => (rest, ""),
        };

        Ok(Self::new(scheme, authority, path))
    }
}

fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// A borrowed view over either location kind.
///
/// Built implicitly from `&str`, `&String` or `&StructuredLocation`, so the
/// hierarchy functions can be called with any combination of the two kinds.
///
/// # Examples
///
/// ```
/// use pathrel::{Location, StructuredLocation};
///
/// let plain = Location::from("/repo/src");
/// assert!(matches!(plain, Location::Plain(_)));
///
/// let uri = StructuredLocation::new("file", "", "/repo/src");
/// let structured = Location::from(&uri);
/// assert_eq!(structured.path(), "/repo/src");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location<'a> {
    /// A plain path string that still needs normalization.
    Plain(&'a str),
    /// A structured location whose path is taken as already normalized.
    Structured(&'a StructuredLocation),
}

impl<'a> Location<'a> {
    /// The raw path component.
    #[must_use]
    pub fn path(&self) -> &'a str {
        match *self {
            Self::Plain(path) => path,
            Self::Structured(location) => &location.path,
        }
    }

    /// The structured location, if this is one.
    #[must_use]
    pub fn as_structured(&self) -> Option<&'a StructuredLocation> {
        match *self {
            Self::Plain(_) => None,
            Self::Structured(location) => Some(location),
        }
    }
}

impl<'a> From<&'a str> for Location<'a> {
    fn from(path: &'a str) -> Self {
        Self::Plain(path)
    }
}

impl<'a> From<&'a String> for Location<'a> {
    fn from(path: &'a String) -> Self {
        Self::Plain(path.as_str())
    }
}

impl<'a> From<&'a StructuredLocation> for Location<'a> {
    fn from(location: &'a StructuredLocation) -> Self {
        Self::Structured(location)
    }
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Plain(path) => f.write_str(path),
            Self::Structured(location) => fmt::Display::fmt(location, f),
        }
    }
}
