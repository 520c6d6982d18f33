//! Validated dot-path type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CopyError, CopyResult};


/// A dotted path of one or more non-empty segments, e.g. `location.state`.
///
/// Construction through `parse` guarantees the path is non-empty and has no
/// zero-length segments, so the reader and writer can walk it without
/// re-checking. Serializes as the plain dotted string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DotPath(String);

impl DotPath {
    /// Parse a dotted string, rejecting empty paths and empty segments.
    pub fn parse(input: &str) -> CopyResult<Self> {
        if input.is_empty() {
            return Err(CopyError::EmptyPath);
        }
        if input.split('.').any(str::is_empty) {
            return Err(CopyError::EmptySegment { path: input.to_string() });
        }
        Ok(DotPath(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate the segments in order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Number of segments; always at least one.
    pub fn len(&self) -> usize {
        self.segments().count()
    }

    /// First segment of the path.
    pub fn head(&self) -> &str {
        super::split_dot_path(&self.0).0
    }

    /// True if `other` is this path or lies underneath it.
    ///
    /// Two paths where neither covers the other address disjoint leaves.
    pub fn covers(&self, other: &DotPath) -> bool {
        other.0 == self.0
            || (other.0.len() > self.0.len()
                && other.0.starts_with(&self.0)
                && other.0.as_bytes()[self.0.len()] == b'.')
    }
}

impl fmt::Display for DotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DotPath {
    type Err = CopyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DotPath::parse(s)
    }
}

impl TryFrom<String> for DotPath {
    type Error = CopyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        DotPath::parse(&s)
    }
}

impl From<DotPath> for String {
    fn from(p: DotPath) -> Self {
        p.0
    }
}

impl AsRef<str> for DotPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
