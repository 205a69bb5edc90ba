//! Type definitions for OS classification, separator tokens and case rules.
//!
//! - `OsType` decides which separator is native: Windows uses `\`, everything else `/`.
//! - `Separator` is the closed set of separator tokens the crate recognizes.
//! - `CaseRule` decides how `SystemPath` equality treats letter case.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Separator for Windows paths.
pub const WIN_SEPARATOR: char = '\\';

/// Separator for Unix paths.
pub const UNIX_SEPARATOR: char = '/';

/// Prefix of a UNC path (`\\server\share`).
pub const UNC_PREFIX: &str = "\\\\";

/// Identifier for the OS family, which defines how separators are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsType {
    /// Unix based OS, `/` separated.
    Unix,
    /// Windows, `\` separated.
    Windows,
}

impl OsType {
    /// Probe the platform this process was compiled for.
    ///
    /// This never caches; use [`crate::PathContext::detected`] for the
    /// process-wide value.
    pub fn detect() -> Self {
        if cfg!(windows) {
            OsType::Windows
        } else {
            OsType::Unix
        }
    }

    /// The separator character native to this OS.
    pub fn native_separator(self) -> char {
        match self {
            OsType::Unix => UNIX_SEPARATOR,
            OsType::Windows => WIN_SEPARATOR,
        }
    }

    /// The separator character of the other OS, which normalization rewrites.
    pub fn foreign_separator(self) -> char {
        match self {
            OsType::Unix => WIN_SEPARATOR,
            OsType::Windows => UNIX_SEPARATOR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OsType::Unix => "unix",
            OsType::Windows => "windows",
        }
    }
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unix" => Ok(OsType::Unix),
            "windows" => Ok(OsType::Windows),
            _ => Err(Error::UnknownOsType {
                value: s.to_string(),
            }),
        }
    }
}

/// Named separator tokens.
///
/// `WinSeparator` and `UnixSeparator` are aliases of `Backslash` and `Slash`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `/`
    Slash,
    /// `\`
    Backslash,
    /// `\`
    WinSeparator,
    /// `/`
    UnixSeparator,
    /// `\\`
    UncSeparator,
}

impl Separator {
    /// Every recognized separator token, in declaration order.
    pub const ALL: [Separator; 5] = [
        Separator::Slash,
        Separator::Backslash,
        Separator::WinSeparator,
        Separator::UnixSeparator,
        Separator::UncSeparator,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Slash | Separator::UnixSeparator => "/",
            Separator::Backslash | Separator::WinSeparator => "\\",
            Separator::UncSeparator => UNC_PREFIX,
        }
    }

    /// The separator written between segments on `os`.
    pub fn native(os: OsType) -> Self {
        match os {
            OsType::Unix => Separator::UnixSeparator,
            OsType::Windows => Separator::WinSeparator,
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Separator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// How `SystemPath` equality treats letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseRule {
    /// Unix compares exact case, Windows ignores case.
    #[default]
    Filesystem,
    /// Unix ignores case, Windows compares exact case. Kept for compatibility
    /// with stores that were written under that rule.
    Legacy,
}

impl CaseRule {
    /// Whether paths on `os` compare ignoring case under this rule.
    pub fn ignores_case(self, os: OsType) -> bool {
        match (self, os) {
            (CaseRule::Filesystem, OsType::Windows) | (CaseRule::Legacy, OsType::Unix) => true,
            (CaseRule::Filesystem, OsType::Unix) | (CaseRule::Legacy, OsType::Windows) => false,
        }
    }
}

impl FromStr for CaseRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "filesystem" => Ok(CaseRule::Filesystem),
            "legacy" => Ok(CaseRule::Legacy),
            _ => Err(Error::UnknownCaseRule {
                value: s.to_string(),
            }),
        }
    }
}
