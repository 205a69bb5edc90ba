//! Integration tests: slash helpers on raw strings.

use abstract_filesystem::{
    ensure_leading_slash, ensure_leading_slash_opt, ensure_trailing_slash,
    ensure_trailing_slash_opt, is_absolute_path, is_absolute_path_opt, remove_leading_slash,
    remove_trailing_slash, OsType, PathContext, PathStrExt,
};

#[test]
fn remove_leading_and_trailing() {
    assert_eq!("/test/leading/".remove_leading_slash(), "test/leading/");
    assert_eq!(r"\test\leading\".remove_leading_slash(), r"test\leading\");
    assert_eq!("/test/leading/".remove_trailing_slash(), "/test/leading");
    assert_eq!(r"\test\leading\".remove_trailing_slash(), r"\test\leading");
}

#[test]
fn remove_leading_only_strips_one_character() {
    for s in ["", "a", "ab/c", "a\\"] {
        assert_eq!(remove_leading_slash(s), s);
    }
    for s in ["", "a", "/a", "ab/c", r"\\unc"] {
        assert_eq!(remove_leading_slash(&format!("/{s}")), s);
        assert_eq!(remove_trailing_slash(&format!("{s}\\")), s);
    }
}

#[test]
fn ensure_leading_on_host() {
    let os = PathContext::detected().os_type;
    let separator = if os == OsType::Unix { "/" } else { "\\" };
    assert_eq!(ensure_leading_slash("test", os), format!("{separator}test"));
    assert_eq!(ensure_leading_slash_opt(None, os), None);
    assert_eq!(ensure_leading_slash("", os), "");
}

#[test]
fn ensure_leading_mixed_separators() {
    for os in [OsType::Unix, OsType::Windows] {
        assert_eq!(ensure_leading_slash(r"test\leading/", os), r"\test\leading/");
        assert_eq!(ensure_leading_slash(r"test/leading\", os), r"/test/leading\");
    }
}

#[test]
fn ensure_trailing_on_host() {
    let os = PathContext::detected().os_type;
    let separator = if os == OsType::Unix { "/" } else { "\\" };
    assert_eq!(ensure_trailing_slash("test", os), format!("test{separator}"));
    assert_eq!(ensure_trailing_slash_opt(None, os), None);
}

#[test]
fn ensure_trailing_mixed_separators() {
    for os in [OsType::Unix, OsType::Windows] {
        assert_eq!(ensure_trailing_slash(r"\test/leading", os), r"\test/leading/");
        assert_eq!(ensure_trailing_slash(r"/test\leading", os), r"/test\leading\");
    }
}

#[test]
fn absolute_paths_windows() {
    let cases = [
        (Some(r"c:\test"), true),
        (Some(r"C:\test\case.exe"), true),
        (Some(r"\\test\case"), true),
        (Some(r"\test\case.exe"), false),
        (Some(r"test\case.exe"), false),
        (Some(""), false),
        (None, false),
    ];
    for (path, expected) in cases {
        assert_eq!(is_absolute_path_opt(path, OsType::Windows), expected, "{path:?}");
    }
}

#[test]
fn absolute_paths_unix() {
    let cases = [
        (Some(""), false),
        (None, false),
        (Some("/test/case.exe"), true),
        (Some("test/case.exe"), false),
    ];
    for (path, expected) in cases {
        assert_eq!(is_absolute_path_opt(path, OsType::Unix), expected, "{path:?}");
    }
    assert!(is_absolute_path("/", OsType::Unix));
}
