//! The OS type and case rule that normalization and equality run against.

use std::sync::OnceLock;

use crate::config::PathConfig;
use crate::error::{Error, Result};
use crate::types::{CaseRule, OsType, Separator};

static DETECTED: OnceLock<PathContext> = OnceLock::new();

/// Inputs every OS-dependent operation reads. Passed by value; it is `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathContext {
    pub os_type: OsType,
    pub case_rule: CaseRule,
}

impl PathContext {
    pub fn new(os_type: OsType) -> Self {
        Self {
            os_type,
            case_rule: CaseRule::default(),
        }
    }

    pub fn unix() -> Self {
        Self::new(OsType::Unix)
    }

    pub fn windows() -> Self {
        Self::new(OsType::Windows)
    }

    pub fn with_case_rule(self, case_rule: CaseRule) -> Self {
        Self { case_rule, ..self }
    }

    /// The process-wide context.
    ///
    /// Computed on first use from the environment (see [`PathConfig::from_env`]),
    /// falling back to [`OsType::detect`], and never re-evaluated afterwards.
    pub fn detected() -> Self {
        *DETECTED.get_or_init(|| {
            let context = PathConfig::from_env().into_context();
            log::debug!(
                "Detected path context: os_type={}, case_rule={:?}",
                context.os_type,
                context.case_rule
            );
            context
        })
    }

    /// Fix the process-wide context before anything reads it.
    ///
    /// Fails with [`Error::ContextAlreadySet`] once [`PathContext::detected`] has
    /// run or a context was already installed.
    pub fn install(context: PathContext) -> Result<()> {
        DETECTED
            .set(context)
            .map_err(|_| Error::ContextAlreadySet)?;
        log::debug!(
            "Installed path context: os_type={}, case_rule={:?}",
            context.os_type,
            context.case_rule
        );
        Ok(())
    }

    pub fn native_separator(&self) -> char {
        self.os_type.native_separator()
    }

    pub fn separator(&self) -> Separator {
        Separator::native(self.os_type)
    }

    /// Whether paths in this context compare ignoring case.
    pub fn ignores_case(&self) -> bool {
        self.case_rule.ignores_case(self.os_type)
    }
}

impl Default for PathContext {
    fn default() -> Self {
        Self::detected()
    }
}

impl From<OsType> for PathContext {
    fn from(os_type: OsType) -> Self {
        Self::new(os_type)
    }
}
