//! Splitting a path into a root and a path relative to it.

use super::common_base::common_base_index;
use super::normalize::{normalize, unify_separators, SEPARATOR};
use super::segments::{basename, dirname};
use crate::platform::PlatformRules;

/// Split `path` into `(relative, root)`.
///
/// With a non-empty `root`, both inputs are normalized and the shared segment
/// boundary between `root + "/"` and `path` is located. The returned root is
/// the prefix of `path` up to that boundary (so it keeps `path`'s casing), and
/// the relative part is what follows the separator. When no boundary is found
/// the normalized inputs are returned unsplit.
///
/// Without a root, `split_on_base_if_missing` decides between
/// `(basename, dirname)` of `path` and `(path, "")`.
///
/// `ignore_case` follows the same policy as
/// [`common_base_index`](super::common_base::common_base_index).
///
/// # Examples
///
/// ```
/// use pathrel::{split_path, PlatformRules};
///
/// let rules = PlatformRules::posix();
/// assert_eq!(
///     split_path("/repo/src/file.ts", Some("/repo"), false, None, rules),
///     ("src/file.ts".to_string(), "/repo".to_string())
/// );
/// assert_eq!(
///     split_path("/a/b/file.ts", None, true, None, rules),
///     ("file.ts".to_string(), "/a/b".to_string())
/// );
/// assert_eq!(
///     split_path("/a/b/file.ts", None, false, None, rules),
///     ("/a/b/file.ts".to_string(), String::new())
/// );
/// ```
#[must_use]
pub fn split_path(
    path: &str,
    root: Option<&str>,
    split_on_base_if_missing: bool,
    ignore_case: Option<bool>,
    rules: PlatformRules,
) -> (String, String) {
    match root.filter(|r| !r.is_empty()) {
        Some(root) => split_at_root(path, root, ignore_case, rules),
        None if split_on_base_if_missing => {
            let unified = unify_separators(path);
            (
                normalize(basename(&unified), rules),
                normalize(dirname(&unified), rules),
            )
        }
        None => (normalize(path, rules), String::new()),
    }
}

fn split_at_root(
    path: &str,
    root: &str,
    ignore_case: Option<bool>,
    rules: PlatformRules,
) -> (String, String) {
    let path = normalize(path, rules);
    let root = normalize(root, rules);

    let mut bounded_root = root.clone();
    if !bounded_root.ends_with(SEPARATOR) {
        bounded_root.push(SEPARATOR);
    }

    // Scan `path` first so the boundary is a byte offset into `path`, which
    // is what gets sliced; folded chars may differ in encoded length.
    let index = common_base_index(&path, &bounded_root, SEPARATOR, ignore_case, rules);
    if index == 0 {
        log::debug!("{path} shares no segment with {root}; leaving it unsplit");
        return (path, root);
    }

    (path[index + 1..].to_string(), path[..index].to_string())
}
