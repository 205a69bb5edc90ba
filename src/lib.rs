//! Abstract FileSystem - OS-aware path normalization.
//!
//! Raw path strings are rewritten to the separator native to an [`OsType`],
//! wrapped in the immutable [`SystemPath`] value type, and adjusted with a set
//! of leading/trailing separator helpers. Every OS-dependent operation takes
//! its [`OsType`] (or a [`PathContext`]) explicitly; [`PathContext::detected`]
//! supplies the process-wide default.

pub mod config;
pub mod context;
pub mod error;
pub mod system_path;
pub mod types;
pub mod utils;

pub use config::{load_path_config, save_path_config, PathConfig};
pub use context::PathContext;
pub use error::{Error, Result};
pub use system_path::SystemPath;
pub use types::{CaseRule, OsType, Separator};
pub use utils::{
    ensure_leading_slash, ensure_leading_slash_opt, ensure_trailing_slash,
    ensure_trailing_slash_opt, is_absolute_path, is_absolute_path_opt, normalize,
    remove_leading_slash, remove_leading_slash_checked, remove_trailing_slash,
    remove_trailing_slash_checked, try_normalize, PathStrExt,
};
