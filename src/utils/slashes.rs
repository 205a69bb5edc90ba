//! Leading and trailing separator helpers for raw path strings.
//!
//! When a separator has to be added, the flavor is chosen from the separators
//! already present anywhere in the string, so mixed paths keep a consistent
//! look. Only a string without any separator falls back to the native one.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::types::{OsType, UNIX_SEPARATOR, WIN_SEPARATOR};
use crate::utils::path::normalize;
use crate::utils::roots::is_absolute_path;

fn starts_with_separator(value: &str) -> bool {
    value.starts_with(UNIX_SEPARATOR) || value.starts_with(WIN_SEPARATOR)
}

fn ends_with_separator(value: &str) -> bool {
    value.ends_with(UNIX_SEPARATOR) || value.ends_with(WIN_SEPARATOR)
}

/// Drop one leading `/` or `\`.
pub fn remove_leading_slash(value: &str) -> &str {
    if starts_with_separator(value) {
        &value[1..]
    } else {
        value
    }
}

/// Drop one trailing `/` or `\`.
pub fn remove_trailing_slash(value: &str) -> &str {
    if ends_with_separator(value) {
        &value[..value.len() - 1]
    } else {
        value
    }
}

/// [`remove_leading_slash`] for a value that may be absent.
pub fn remove_leading_slash_checked(value: Option<&str>) -> Result<&str> {
    value
        .map(remove_leading_slash)
        .ok_or_else(|| Error::invalid_input("remove_leading_slash"))
}

/// [`remove_trailing_slash`] for a value that may be absent.
pub fn remove_trailing_slash_checked(value: Option<&str>) -> Result<&str> {
    value
        .map(remove_trailing_slash)
        .ok_or_else(|| Error::invalid_input("remove_trailing_slash"))
}

/// Make sure `value` starts with a separator.
///
/// Empty input is returned as is. Otherwise the separator that occurs first
/// in the string is prepended, or the native one for `os` if there is none.
pub fn ensure_leading_slash(value: &str, os: OsType) -> Cow<'_, str> {
    if value.is_empty() || starts_with_separator(value) {
        return Cow::Borrowed(value);
    }

    let backslash = value.find(WIN_SEPARATOR);
    let slash = value.find(UNIX_SEPARATOR);
    let separator = match (backslash, slash) {
        (Some(b), Some(s)) if b < s => WIN_SEPARATOR,
        (Some(_), Some(_)) => UNIX_SEPARATOR,
        (Some(_), None) => WIN_SEPARATOR,
        (None, Some(_)) => UNIX_SEPARATOR,
        (None, None) => os.native_separator(),
    };

    let mut out = String::with_capacity(value.len() + 1);
    out.push(separator);
    out.push_str(value);
    Cow::Owned(out)
}

/// Make sure `value` ends with a separator.
///
/// Empty input is returned as is. Otherwise the separator that occurs last
/// in the string is appended, or the native one for `os` if there is none.
pub fn ensure_trailing_slash(value: &str, os: OsType) -> Cow<'_, str> {
    if value.is_empty() || ends_with_separator(value) {
        return Cow::Borrowed(value);
    }

    let backslash = value.rfind(WIN_SEPARATOR);
    let slash = value.rfind(UNIX_SEPARATOR);
    let separator = match (backslash, slash) {
        (Some(b), Some(s)) if b > s => WIN_SEPARATOR,
        (Some(_), Some(_)) => UNIX_SEPARATOR,
        (Some(_), None) => WIN_SEPARATOR,
        (None, Some(_)) => UNIX_SEPARATOR,
        (None, None) => os.native_separator(),
    };

    let mut out = String::with_capacity(value.len() + 1);
    out.push_str(value);
    out.push(separator);
    Cow::Owned(out)
}

/// [`ensure_leading_slash`] that passes an absent value through.
pub fn ensure_leading_slash_opt(value: Option<&str>, os: OsType) -> Option<Cow<'_, str>> {
    value.map(|v| ensure_leading_slash(v, os))
}

/// [`ensure_trailing_slash`] that passes an absent value through.
pub fn ensure_trailing_slash_opt(value: Option<&str>, os: OsType) -> Option<Cow<'_, str>> {
    value.map(|v| ensure_trailing_slash(v, os))
}

/// Method-call access to the string helpers.
pub trait PathStrExt {
    /// Rewrite separators to the native form of `os`.
    fn format_path(&self, os: OsType) -> String;
    fn remove_leading_slash(&self) -> &str;
    fn remove_trailing_slash(&self) -> &str;
    fn ensure_leading_slash(&self, os: OsType) -> Cow<'_, str>;
    fn ensure_trailing_slash(&self, os: OsType) -> Cow<'_, str>;
    fn is_absolute_path(&self, os: OsType) -> bool;
}

impl PathStrExt for str {
    fn format_path(&self, os: OsType) -> String {
        normalize(self, os)
    }

    fn remove_leading_slash(&self) -> &str {
        remove_leading_slash(self)
    }

    fn remove_trailing_slash(&self) -> &str {
        remove_trailing_slash(self)
    }

    fn ensure_leading_slash(&self, os: OsType) -> Cow<'_, str> {
        ensure_leading_slash(self, os)
    }

    fn ensure_trailing_slash(&self, os: OsType) -> Cow<'_, str> {
        ensure_trailing_slash(self, os)
    }

    fn is_absolute_path(&self, os: OsType) -> bool {
        is_absolute_path(self, os)
    }
}
