//! `SystemPath`: a path string whose separators are native to its OS type.

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::context::PathContext;
use crate::error::{Error, Result};
use crate::utils::{normalize, remove_leading_slash, remove_trailing_slash};

/// An immutable, normalized path.
///
/// The stored string never holds the separator of the other OS: on Unix every
/// `\` became `/`, on Windows every `/` became `\`.
#[derive(Debug, Clone)]
pub struct SystemPath {
    path: String,
    context: PathContext,
}

impl SystemPath {
    /// Normalize `raw` for `context` and wrap it.
    pub fn new(raw: &str, context: PathContext) -> Self {
        Self {
            path: normalize(raw, context.os_type),
            context,
        }
    }

    /// Like [`SystemPath::new`], but an absent `raw` is an [`Error::InvalidInput`].
    pub fn construct(raw: Option<&str>, context: PathContext) -> Result<Self> {
        raw.map(|r| Self::new(r, context))
            .ok_or_else(|| Error::invalid_input("SystemPath::construct"))
    }

    /// Conversion from an optional string: absent in, absent out.
    pub fn from_string(raw: Option<&str>, context: PathContext) -> Option<Self> {
        raw.map(|r| Self::new(r, context))
    }

    /// The normalized string, unchanged.
    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn into_string(self) -> String {
        self.path
    }

    pub fn context(&self) -> PathContext {
        self.context
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Join `base` and `segments` with the native separator of `context`.
    ///
    /// An absent base counts as empty, so the result then starts with a
    /// separator. The segments are not normalized here.
    pub fn combine<I, S>(base: Option<&SystemPath>, segments: I, context: PathContext) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let separator = context.native_separator();
        let mut combined = base.map(|b| b.path.clone()).unwrap_or_default();
        for segment in segments {
            combined.push(separator);
            combined.push_str(segment.as_ref());
        }
        combined
    }

    /// A new path with `segment` added after a native separator.
    pub fn join(&self, segment: &str) -> SystemPath {
        self.join_all([segment])
    }

    /// A new path with every segment added, each after a native separator.
    pub fn join_all<I, S>(&self, segments: I) -> SystemPath
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let combined = Self::combine(Some(self), segments, self.context);
        Self::new(&combined, self.context)
    }

    /// A new path with `suffix` appended directly, without a separator.
    pub fn append(&self, suffix: &str) -> SystemPath {
        let mut raw = String::with_capacity(self.path.len() + suffix.len());
        raw.push_str(&self.path);
        raw.push_str(suffix);
        Self::new(&raw, self.context)
    }

    /// [`SystemPath::append`] on a base that may be absent; an absent base is
    /// an [`Error::InvalidInput`].
    pub fn concatenate(base: Option<&SystemPath>, suffix: &str) -> Result<SystemPath> {
        base.map(|b| b.append(suffix))
            .ok_or_else(|| Error::invalid_input("SystemPath::concatenate"))
    }

    /// The stored string without one leading separator.
    pub fn remove_leading_slash(&self) -> &str {
        remove_leading_slash(&self.path)
    }

    /// The stored string without one trailing separator.
    pub fn remove_trailing_slash(&self) -> &str {
        remove_trailing_slash(&self.path)
    }

    /// Compare against a value of any type.
    ///
    /// Another `SystemPath` compares directly, strings are converted with this
    /// path's context first, and everything else is unequal.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        if let Some(path) = other.downcast_ref::<SystemPath>() {
            self == path
        } else if let Some(s) = other.downcast_ref::<String>() {
            self == s
        } else if let Some(s) = other.downcast_ref::<&str>() {
            self == *s
        } else {
            false
        }
    }

    /// Numeric hash of the path. An empty path hashes to `0`.
    pub fn hash_code(&self) -> u64 {
        if self.path.is_empty() {
            return 0;
        }
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Ordinal case folding: each char maps to its uppercase form when that is a
/// single char, otherwise it stays as is.
fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().map(fold_case).eq(b.chars().map(fold_case))
}

// Paths whose contexts disagree on case handling are never equal, which keeps
// `==` an equivalence relation.
impl PartialEq for SystemPath {
    fn eq(&self, other: &Self) -> bool {
        match (self.context.ignores_case(), other.context.ignores_case()) {
            (true, true) => eq_ignore_case(&self.path, &other.path),
            (false, false) => self.path == other.path,
            _ => false,
        }
    }
}

impl Eq for SystemPath {}

// Hashes the case-folded string so equal paths hash equally under either rule.
impl Hash for SystemPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.path.chars().map(fold_case) {
            c.hash(state);
        }
    }
}

impl PartialEq<str> for SystemPath {
    fn eq(&self, other: &str) -> bool {
        *self == SystemPath::new(other, self.context)
    }
}

impl PartialEq<&str> for SystemPath {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for SystemPath {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl fmt::Display for SystemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for SystemPath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

/// Uses [`PathContext::detected`].
impl From<&str> for SystemPath {
    fn from(raw: &str) -> Self {
        Self::new(raw, PathContext::detected())
    }
}

/// Uses [`PathContext::detected`].
impl From<String> for SystemPath {
    fn from(raw: String) -> Self {
        Self::new(&raw, PathContext::detected())
    }
}

impl From<SystemPath> for String {
    fn from(path: SystemPath) -> Self {
        path.path
    }
}
