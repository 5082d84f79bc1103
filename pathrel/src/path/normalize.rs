//! Path normalization functions.
//!
//! Normalization produces the canonical string form every comparison in this
//! crate works on:
//! - Back-slashes are replaced with forward slashes
//! - Trailing separators are removed (a lone `/` is kept)
//! - On drive-letter platforms the drive letter is lower-cased

use std::borrow::Cow;

use crate::platform::PlatformRules;

/// The only separator a normalized path contains.
pub const SEPARATOR: char = '/';

/// Normalize a raw path string.
///
/// The empty string is returned unchanged.
///
/// # Examples
///
/// ```
/// use pathrel::path::normalize::normalize;
/// use pathrel::PlatformRules;
///
/// let posix = PlatformRules::posix();
/// assert_eq!(normalize("/repo/src/", posix), "/repo/src");
/// assert_eq!(normalize("/", posix), "/");
///
/// let windows = PlatformRules::windows();
/// assert_eq!(normalize(r"C:\Users\Dev\", windows), "c:/Users/Dev");
/// assert_eq!(normalize("/D:/work", windows), "/d:/work");
/// ```
#[must_use]
pub fn normalize(path: &str, rules: PlatformRules) -> String {
    if path.is_empty() {
        return String::new();
    }

    let mut normalized = unify_separators(path).into_owned();

    while normalized.len() > 1 && normalized.ends_with(SEPARATOR) {
        normalized.pop();
    }

    if rules.has_drive_letters {
        lowercase_drive_letter(&mut normalized);
    }

    normalized
}

/// Replace every back-slash with a forward slash.
///
/// Borrows when there is nothing to replace.
///
/// # Examples
///
/// ```
/// use pathrel::path::normalize::unify_separators;
///
/// assert_eq!(unify_separators(r"a\b\c"), "a/b/c");
/// assert_eq!(unify_separators("a/b/c"), "a/b/c");
/// ```
#[must_use]
pub fn unify_separators(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Normalize and make sure the result starts with `/`.
///
/// Root-relative and absolute spellings of the same path compare equal after
/// this, e.g. `c:/work` and `/c:/work`.
#[must_use]
pub fn normalize_rooted(path: &str, rules: PlatformRules) -> String {
    with_leading_separator(normalize(path, rules))
}

pub(crate) fn with_leading_separator(path: String) -> String {
    if path.starts_with(SEPARATOR) {
        path
    } else {
        let mut rooted = String::with_capacity(path.len() + 1);
        rooted.push(SEPARATOR);
        rooted.push_str(&path);
        rooted
    }
}

/// Lower-case `X` in `X:...` or `/X:...`.
fn lowercase_drive_letter(path: &mut String) {
    let offset = usize::from(path.starts_with(SEPARATOR));
    let bytes = path.as_bytes();
    if bytes.len() > offset + 1 && bytes[offset].is_ascii_alphabetic() && bytes[offset + 1] == b':'
    {
        // ASCII letter, so the byte range is a whole char
        path[offset..=offset].make_ascii_lowercase();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSIX: PlatformRules = PlatformRules::posix();
    const WINDOWS: PlatformRules = PlatformRules::windows();

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize("", POSIX), "");
        assert_eq!(normalize("", WINDOWS), "");
    }

    #[test]
    fn test_normalize_replaces_backslashes() {
        assert_eq!(normalize(r"a\b\c", POSIX), "a/b/c");
        assert_eq!(normalize(r"\repo\src", POSIX), "/repo/src");
        assert_eq!(normalize(r"mixed/sep\arators", POSIX), "mixed/sep/arators");
    }

    #[test]
    fn test_normalize_strips_trailing_separator() {
        assert_eq!(normalize("/a/b/", POSIX), "/a/b");
        assert_eq!(normalize(r"/a/b\", POSIX), "/a/b");
        assert_eq!(normalize("a/", POSIX), "a");
    }

    #[test]
    fn test_normalize_strips_repeated_trailing_separators() {
        assert_eq!(normalize("/a/b//", POSIX), "/a/b");
        assert_eq!(normalize("///", POSIX), "/");
    }

    #[test]
    fn test_normalize_keeps_root() {
        assert_eq!(normalize("/", POSIX), "/");
        assert_eq!(normalize(r"\", POSIX), "/");
    }

    #[test]
    fn test_normalize_drive_letter_windows() {
        assert_eq!(normalize(r"C:\Users", WINDOWS), "c:/Users");
        assert_eq!(normalize("/C:/Users", WINDOWS), "/c:/Users");
        assert_eq!(normalize("C:", WINDOWS), "c:");
        assert_eq!(normalize(r"C:\", WINDOWS), "c:");
    }

    #[test]
    fn test_normalize_drive_letter_untouched_on_posix() {
        assert_eq!(normalize(r"C:\Users", POSIX), "C:/Users");
        assert_eq!(normalize("/C:/Users", POSIX), "/C:/Users");
    }

    #[test]
    fn test_normalize_only_touches_drive_letter() {
        assert_eq!(normalize("/Repo/Src", WINDOWS), "/Repo/Src");
        assert_eq!(normalize("AB:/x", WINDOWS), "AB:/x");
        assert_eq!(normalize("//C:/x", WINDOWS), "//C:/x");
        assert_eq!(normalize("1:/x", WINDOWS), "1:/x");
    }

    #[test]
    fn test_normalize_preserves_non_ascii() {
        assert_eq!(normalize("/données/été/", WINDOWS), "/données/été");
        assert_eq!(normalize("É:/x", WINDOWS), "É:/x");
    }

    #[test]
    fn test_normalize_rooted() {
        assert_eq!(normalize_rooted("repo/src", POSIX), "/repo/src");
        assert_eq!(normalize_rooted("/repo/src/", POSIX), "/repo/src");
        assert_eq!(normalize_rooted(r"C:\work", WINDOWS), "/c:/work");
        assert_eq!(normalize_rooted("", POSIX), "/");
    }

    #[test]
    fn test_unify_separators_borrows() {
        assert!(matches!(unify_separators("/a/b"), Cow::Borrowed(_)));
        assert!(matches!(unify_separators(r"\a"), Cow::Owned(_)));
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn raw_path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec("[a-zA-Z0-9_.-]{0,6}", 1..=6).prop_flat_map(|parts| {
                (Just(parts), prop::collection::vec(prop::bool::ANY, 6), prop::bool::ANY)
            })
            .prop_map(|(parts, backslash, leading)| {
                let mut out = String::new();
                if leading {
                    out.push('/');
                }
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        out.push(if backslash[i % backslash.len()] { '\\' } else { '/' });
                    }
                    out.push_str(part);
                }
                out
            })
        }

        fn rules_strategy() -> impl Strategy<Value = PlatformRules> {
            prop_oneof![
                Just(PlatformRules::posix()),
                Just(PlatformRules::windows()),
                Just(PlatformRules::macos()),
            ]
        }

        proptest! {
            /// Normalizing twice gives the same result as normalizing once
            #[test]
            fn normalize_idempotent(s in raw_path_strategy(), rules in rules_strategy()) {
                let once = normalize(&s, rules);
                let twice = normalize(&once, rules);
                prop_assert_eq!(once, twice);
            }

            /// Only a lone separator may end with a separator
            #[test]
            fn normalize_no_trailing_separator(s in raw_path_strategy(), rules in rules_strategy()) {
                let normalized = normalize(&s, rules);
                prop_assert!(!normalized.ends_with('/') || normalized.len() == 1);
            }

            /// Back-slashes never survive normalization
            #[test]
            fn normalize_no_backslashes(s in raw_path_strategy(), rules in rules_strategy()) {
                prop_assert!(!normalize(&s, rules).contains('\\'));
            }
        }
    }
}
