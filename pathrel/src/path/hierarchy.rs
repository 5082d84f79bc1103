//! Descendant and child classification between two locations.
//!
//! Both predicates accept any mix of plain paths and structured locations.
//! Each argument is first reduced to a comparable form:
//! - plain paths are normalized and given a leading `/`
//! - structured paths get a leading `/` if they lack one and are otherwise
//!   taken as already normalized
//!
//! Trailing separators are ignored on both sides, and two structured
//! locations are only related when their scheme and authority match. Path
//! comparison is exact; only the drive letter is case-folded (during
//! normalization, on drive-letter platforms).

use std::borrow::Cow;

use super::location::{Location, StructuredLocation};
use super::normalize::{normalize_rooted, unify_separators, with_leading_separator, SEPARATOR};
use super::segments::basename;
use crate::platform::PlatformRules;

/// Whether `location` is `base` itself or anywhere below it.
///
/// # Examples
///
/// ```
/// use pathrel::{is_descendant, PlatformRules, StructuredLocation};
///
/// let rules = PlatformRules::posix();
/// assert!(is_descendant("/repo/src/file.ts", "/repo", rules));
/// assert!(is_descendant("/repo", "/repo/", rules));
/// assert!(!is_descendant("/repository", "/repo", rules));
/// assert!(is_descendant("/anything", "/", rules));
///
/// let uri = StructuredLocation::new("file", "host", "/repo/src");
/// assert!(is_descendant(&uri, "/repo", rules));
///
/// let other_host = StructuredLocation::new("file", "other", "/repo");
/// assert!(!is_descendant(&uri, &other_host, rules));
/// ```
#[must_use]
pub fn is_descendant<'a, 'b>(
    location: impl Into<Location<'a>>,
    base: impl Into<Location<'b>>,
    rules: PlatformRules,
) -> bool {
    descendant_remainder(location.into(), base.into(), rules).is_some()
}

/// Whether `location` is exactly one segment below `base`.
///
/// A location is never its own child.
///
/// # Examples
///
/// ```
/// use pathrel::{is_child, PlatformRules};
///
/// let rules = PlatformRules::posix();
/// assert!(is_child("/repo/src", "/repo", rules));
/// assert!(!is_child("/repo/src/file.ts", "/repo", rules));
/// assert!(!is_child("/repo", "/repo", rules));
/// assert!(is_child("/repo", "/", rules));
/// ```
#[must_use]
pub fn is_child<'a, 'b>(
    location: impl Into<Location<'a>>,
    base: impl Into<Location<'b>>,
    rules: PlatformRules,
) -> bool {
    descendant_remainder(location.into(), base.into(), rules)
        .is_some_and(|rest| !rest.is_empty() && !rest.contains(SEPARATOR))
}

/// Whether the final segment of `path` is exactly `*`.
///
/// Purely syntactic; nothing is matched against a filesystem.
///
/// # Examples
///
/// ```
/// use pathrel::is_folder_glob;
///
/// assert!(is_folder_glob("/a/b/*"));
/// assert!(is_folder_glob(r"a\b\*"));
/// assert!(!is_folder_glob("/a/b/*.ts"));
/// assert!(!is_folder_glob("/a/*/b"));
/// ```
#[must_use]
pub fn is_folder_glob(path: &str) -> bool {
    basename(&unify_separators(path)) == "*"
}

/// A location reduced to the form prefix arithmetic runs on.
struct Comparable<'a> {
    origin: Option<&'a StructuredLocation>,
    path: Cow<'a, str>,
}

impl<'a> Comparable<'a> {
    fn new(location: Location<'a>, rules: PlatformRules) -> Self {
        match location {
            Location::Plain(path) => Self {
                origin: None,
                path: Cow::Owned(normalize_rooted(path, rules)),
            },
            Location::Structured(structured) => {
                let path = if structured.path.starts_with(SEPARATOR) {
                    Cow::Borrowed(structured.path.as_str())
                } else {
                    Cow::Owned(with_leading_separator(structured.path.clone()))
                };
                Self {
                    origin: Some(structured),
                    path,
                }
            }
        }
    }

    /// The path without trailing separators; the root becomes `""`.
    fn trimmed(&self) -> &str {
        self.path.trim_end_matches(SEPARATOR)
    }
}

/// The part of `location` below `base`, without its leading separator.
///
/// `None` when `location` is not a descendant; `Some("")` when the two are
/// the same location.
fn descendant_remainder(
    location: Location<'_>,
    base: Location<'_>,
    rules: PlatformRules,
) -> Option<String> {
    let location = Comparable::new(location, rules);
    let base = Comparable::new(base, rules);

    if let (Some(loc), Some(root)) = (location.origin, base.origin) {
        if !loc.same_origin(root) {
            log::trace!("{loc} and {root} differ in scheme or authority");
            return None;
        }
    }

    let path = location.trimmed();
    let base_path = base.trimmed();

    let rest = path.strip_prefix(base_path)?;
    if rest.is_empty() {
        return Some(String::new());
    }

    rest.strip_prefix(SEPARATOR).map(str::to_string)
}
