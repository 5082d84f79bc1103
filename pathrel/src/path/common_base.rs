//! Longest shared prefix of two paths, cut at a delimiter boundary.

use crate::platform::PlatformRules;

/// Byte index of the last delimiter inside the shared prefix of `a` and `b`.
///
/// Both strings are scanned together while their characters match; each
/// matched `delimiter` records its position. Scanning stops at the first
/// mismatch or when either string ends, and the last recorded position is
/// returned. The result is 0 when either string is empty or no delimiter was
/// matched, so it always lands on a delimiter and never inside a segment.
///
/// Case folding applies when `ignore_case` is `Some(true)`, or when it is
/// `None` and `rules` are case-insensitive.
///
/// The returned index is a byte offset into `a`.
///
/// # Examples
///
/// ```
/// use pathrel::path::common_base::common_base_index;
/// use pathrel::PlatformRules;
///
/// let posix = PlatformRules::posix();
/// assert_eq!(common_base_index("/a/b/c", "/a/b/d", '/', None, posix), 4);
/// assert_eq!(common_base_index("/a/bc", "/a/bd", '/', None, posix), 2);
/// assert_eq!(common_base_index("", "/a", '/', None, posix), 0);
/// ```
#[must_use]
pub fn common_base_index(
    a: &str,
    b: &str,
    delimiter: char,
    ignore_case: Option<bool>,
    rules: PlatformRules,
) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let fold = ignore_case.unwrap_or_else(|| rules.ignore_case_by_default());

    let mut index = 0;
    for ((i, ca), cb) in a.char_indices().zip(b.chars()) {
        let matched = if fold {
            chars_eq_ignore_case(ca, cb)
        } else {
            ca == cb
        };
        if !matched {
            break;
        }
        if ca == delimiter {
            index = i;
        }
    }

    index
}

/// The shared prefix of `a` up to (not including) its last common delimiter.
///
/// Returns `None` when [`common_base_index`] is 0, so "no shared segment" can
/// never be mistaken for an empty prefix.
///
/// # Examples
///
/// ```
/// use pathrel::path::common_base::common_base;
/// use pathrel::PlatformRules;
///
/// let posix = PlatformRules::posix();
/// assert_eq!(common_base("/a/b/c", "/a/b/d", '/', None, posix).as_deref(), Some("/a/b"));
/// assert_eq!(common_base("/a", "/b", '/', None, posix), None);
///
/// // Case folding follows the platform unless overridden
/// let windows = PlatformRules::windows();
/// assert_eq!(common_base("/Repo/x", "/repo/y", '/', None, windows).as_deref(), Some("/Repo"));
/// assert_eq!(common_base("/Repo/x", "/repo/y", '/', Some(false), windows), None);
/// ```
#[must_use]
pub fn common_base(
    a: &str,
    b: &str,
    delimiter: char,
    ignore_case: Option<bool>,
    rules: PlatformRules,
) -> Option<String> {
    match common_base_index(a, b, delimiter, ignore_case, rules) {
        0 => None,
        index => Some(a[..index].to_string()),
    }
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
