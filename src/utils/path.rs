//! Path normalization for cross-platform consistency.

use crate::error::{Error, Result};
use crate::types::OsType;

/// Rewrite every separator of the other OS into the native one for `os`.
///
/// Unix turns `\` into `/`; Windows turns `/` into `\`. Idempotent.
pub fn normalize(path: &str, os: OsType) -> String {
    path.replace(os.foreign_separator(), &os.native_separator().to_string())
}

/// [`normalize`] for a path that may be absent. A missing path is an
/// [`Error::InvalidInput`].
pub fn try_normalize(path: Option<&str>, os: OsType) -> Result<String> {
    let path = path.ok_or_else(|| Error::invalid_input("normalize"))?;
    Ok(normalize(path, os))
}
