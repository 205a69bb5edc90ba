//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors produced while normalizing paths or setting up the path context.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A path string was required but none was given.
    #[error("{operation} requires a path, but none was provided")]
    InvalidInput {
        /// The operation that rejected the missing value.
        operation: &'static str,
    },

    /// The process-wide path context was already fixed when an override was attempted.
    #[error("the process-wide path context is already set and cannot be replaced")]
    ContextAlreadySet,

    /// Text could not be interpreted as an OS type.
    #[error("unknown OS type '{value}', expected 'unix' or 'windows'")]
    UnknownOsType { value: String },

    /// Text could not be interpreted as a case rule.
    #[error("unknown case rule '{value}', expected 'filesystem' or 'legacy'")]
    UnknownCaseRule { value: String },

    /// A configuration file could not be read, parsed or written.
    #[error("configuration file {path}: {problem}")]
    Config { path: String, problem: String },
}

/// Result alias for this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_input(operation: &'static str) -> Self {
        Self::InvalidInput { operation }
    }

    pub(crate) fn config(path: impl Into<String>, problem: impl ToString) -> Self {
        Self::Config {
            path: path.into(),
            problem: problem.to_string(),
        }
    }
}
