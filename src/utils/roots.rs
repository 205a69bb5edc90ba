//! Root classification and absolute path detection.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::{OsType, UNC_PREFIX, UNIX_SEPARATOR, WIN_SEPARATOR};

const WIN_ROOT_PATTERN: &str = r"^\p{L}:$";
const UNC_ROOT_PATTERN: &str = r"^\\\\[\p{L}\p{Nd}]+$";

static WIN_ROOT: OnceLock<Regex> = OnceLock::new();
static UNC_ROOT: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("root patterns are valid regexes"))
}

fn is_separator(c: char) -> bool {
    c == WIN_SEPARATOR || c == UNIX_SEPARATOR
}

/// A drive root: a letter followed by `:` (`C:`).
pub fn is_win_root(root: &str) -> bool {
    compiled(&WIN_ROOT, WIN_ROOT_PATTERN).is_match(root)
}

/// The Unix root, `/`.
pub fn is_unix_root(root: &str) -> bool {
    root.len() == 1 && root.starts_with(UNIX_SEPARATOR)
}

/// A UNC root: `\\` followed by a server name of letters or digits (`\\server`).
pub fn is_unc_root(root: &str) -> bool {
    compiled(&UNC_ROOT, UNC_ROOT_PATTERN).is_match(root)
}

/// The leading segment of a Windows path that may name a root: `\\server` for
/// UNC paths, otherwise everything before the first separator.
fn windows_root_segment(value: &str) -> &str {
    let (skip, rest) = match value.strip_prefix(UNC_PREFIX) {
        Some(rest) => (UNC_PREFIX.len(), rest),
        None => (0, value),
    };
    let end = rest.find(is_separator).map_or(value.len(), |i| skip + i);
    &value[..end]
}

/// Whether `value` is rooted for `os`.
///
/// Windows accepts drive roots (`C:\dir`) and UNC roots (`\\server\share`); a
/// path starting with a single `\` is drive-relative and not absolute. Unix
/// accepts paths starting with `/`. Empty input is never absolute.
pub fn is_absolute_path(value: &str, os: OsType) -> bool {
    if value.is_empty() {
        return false;
    }
    match os {
        OsType::Unix => value.get(..1).is_some_and(is_unix_root),
        OsType::Windows => {
            let root = windows_root_segment(value);
            is_win_root(root) || is_unc_root(root)
        }
    }
}

/// [`is_absolute_path`] for a value that may be absent; absent is never absolute.
pub fn is_absolute_path_opt(value: Option<&str>, os: OsType) -> bool {
    value.is_some_and(|v| is_absolute_path(v, os))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_patterns_compile_once() {
        let first = compiled(&WIN_ROOT, WIN_ROOT_PATTERN);
        assert!(is_win_root("c:"));
        assert!(std::ptr::eq(compiled(&WIN_ROOT, WIN_ROOT_PATTERN), first));
        assert!(is_unc_root(r"\\server"));
        assert!(UNC_ROOT.get().is_some());
    }

    #[test]
    fn win_roots() {
        assert!(is_win_root("c:"));
        assert!(is_win_root("Z:"));
        assert!(!is_win_root("c"));
        assert!(!is_win_root("cc:"));
        assert!(!is_win_root("1:"));
        assert!(!is_win_root(""));
    }

    #[test]
    fn unix_roots() {
        assert!(is_unix_root("/"));
        assert!(!is_unix_root("//"));
        assert!(!is_unix_root("\\"));
        assert!(!is_unix_root(""));
    }

    #[test]
    fn unc_roots() {
        assert!(is_unc_root(r"\\server"));
        assert!(is_unc_root(r"\\s1"));
        assert!(!is_unc_root(r"\\"));
        assert!(!is_unc_root(r"\\my-server"));
        assert!(!is_unc_root(r"\server"));
    }

    #[test]
    fn windows_root_segments() {
        assert_eq!(windows_root_segment(r"c:\test"), "c:");
        assert_eq!(windows_root_segment(r"\\test\case"), r"\\test");
        assert_eq!(windows_root_segment(r"\\test"), r"\\test");
        assert_eq!(windows_root_segment(r"\test"), "");
        assert_eq!(windows_root_segment("file"), "file");
    }

    #[test]
    fn absolute_paths_on_windows() {
        let cases = [
            (r"c:\test", true),
            (r"C:\test\case.exe", true),
            ("c:/test", true),
            (r"\\test\case", true),
            (r"\test\case.exe", false),
            (r"test\case.exe", false),
            (r"c:test", false),
            ("", false),
        ];
        for (path, expected) in cases {
            assert_eq!(is_absolute_path(path, OsType::Windows), expected, "{path}");
        }
    }

    #[test]
    fn absolute_paths_on_unix() {
        let cases = [
            ("/test/case.exe", true),
            ("/", true),
            ("test/case.exe", false),
            (r"\test", false),
            ("é/x", false),
            ("", false),
        ];
        for (path, expected) in cases {
            assert_eq!(is_absolute_path(path, OsType::Unix), expected, "{path}");
        }
    }

    #[test]
    fn absent_value_is_not_absolute() {
        assert!(!is_absolute_path_opt(None, OsType::Unix));
        assert!(!is_absolute_path_opt(None, OsType::Windows));
        assert!(is_absolute_path_opt(Some("/x"), OsType::Unix));
    }
}
