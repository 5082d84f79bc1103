//! Segment helpers for `/`-separated path strings.
//!
//! These follow POSIX `basename`/`dirname` conventions: trailing separators
//! are ignored, the directory of a bare name is `.`, and the directory of a
//! top-level entry is `/`. Back-slashes are not treated as separators here;
//! run [`unify_separators`](super::normalize::unify_separators) first.

/// Final segment of `path`.
///
/// # Examples
///
/// ```
/// use pathrel::path::segments::basename;
///
/// assert_eq!(basename("/a/b/file.ts"), "file.ts");
/// assert_eq!(basename("/a/b/"), "b");
/// assert_eq!(basename("file.ts"), "file.ts");
/// assert_eq!(basename("/"), "");
/// ```
#[must_use]
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(slash) => &trimmed[slash + 1..],
        None => trimmed,
    }
}

/// Everything before the final segment of `path`.
///
/// # Examples
///
/// ```
/// use pathrel::path::segments::dirname;
///
/// assert_eq!(dirname("/a/b/file.ts"), "/a/b");
/// assert_eq!(dirname("/a/b/"), "/a");
/// assert_eq!(dirname("/file.ts"), "/");
/// assert_eq!(dirname("file.ts"), ".");
/// assert_eq!(dirname("/"), "/");
/// ```
#[must_use]
pub fn dirname(path: &str) -> &str {
    if path.is_empty() {
        return ".";
    }

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/";
    }

    match trimmed.rfind('/') {
        None => ".",
        Some(slash) => {
            let dir = trimmed[..slash].trim_end_matches('/');
            if dir.is_empty() {
                "/"
            } else {
                dir
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename() {
        assert_eq!(basename("/a/b/c"), "c");
        assert_eq!(basename("a"), "a");
        assert_eq!(basename("a/"), "a");
        assert_eq!(basename("/a//"), "a");
        assert_eq!(basename(""), "");
        assert_eq!(basename("//"), "");
        assert_eq!(basename("/a/b/*"), "*");
    }

    #[test]
    fn test_dirname() {
        assert_eq!(dirname("/a/b/c"), "/a/b");
        assert_eq!(dirname("/a//b"), "/a");
        assert_eq!(dirname("a/b"), "a");
        assert_eq!(dirname("a"), ".");
        assert_eq!(dirname(""), ".");
        assert_eq!(dirname("///"), "/");
        assert_eq!(dirname("/a"), "/");
        assert_eq!(dirname("c:/file"), "c:");
    }

    #[test]
    fn test_dirname_and_basename_rejoin() {
        for path in ["/a/b/c", "/x/y", "rel/dir/file.txt"] {
            assert_eq!(format!("{}/{}", dirname(path), basename(path)), path);
        }
    }
}
