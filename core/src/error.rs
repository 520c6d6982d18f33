//! Error types for path-addressed copying.

use std::fmt;

use serde_json::Value;
use thiserror::Error;


/// Result alias used throughout the copy engine.
pub type CopyResult<T> = Result<T, CopyError>;


/// Which input of a copy operation an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Source,
    Destination,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Source => "source",
            Side::Destination => "destination",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


/// Coarse classification of a `CopyError`.
///
/// Several variants can share a kind; e.g. both a serde failure and a
/// top-level non-object are conversion errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Conversion,
    NilObject,
    EmptyPath,
    PathNotFound,
    TypeMismatch,
}


/// Errors produced while converting, reading, or writing records.
#[derive(Debug, Error)]
pub enum CopyError {
    /// serde could not project the value to, or rebuild it from, a record.
    #[error("{side} object could not be converted: {source}")]
    Conversion {
        side: Side,
        #[source]
        source: serde_json::Error,
    },

    /// The value serialized to something other than a mapping.
    #[error("{side} object must serialize to a mapping, found {found}")]
    NotARecord { side: Side, found: &'static str },

    /// The value serialized to `null`.
    #[error("{side} object was nil, please pass in a valid object")]
    NilObject { side: Side },

    #[error("path has a length of zero, please pass in a valid path")]
    EmptyPath,

    /// A path such as `a..b` or `a.` with a zero-length segment.
    #[error("path '{path}' contains an empty segment")]
    EmptySegment { path: String },

    #[error("could not find key '{key}' while resolving path '{path}'")]
    PathNotFound { path: String, key: String },

    /// A non-terminal segment resolved to something that is not a mapping.
    #[error("value {found} at key '{key}' is not a mapping, cannot resolve path '{path}'")]
    TypeMismatch {
        path: String,
        key: String,
        found: Value,
    },
}

impl CopyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CopyError::Conversion { .. } | CopyError::NotARecord { .. } => ErrorKind::Conversion,
            CopyError::NilObject { .. } => ErrorKind::NilObject,
            CopyError::EmptyPath | CopyError::EmptySegment { .. } => ErrorKind::EmptyPath,
            CopyError::PathNotFound { .. } => ErrorKind::PathNotFound,
            CopyError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }

    #[inline]
    pub fn path_not_found(path: impl Into<String>, key: impl Into<String>) -> Self {
        CopyError::PathNotFound {
            path: path.into(),
            key: key.into(),
        }
    }

    #[inline]
    pub fn type_mismatch(path: impl Into<String>, key: impl Into<String>, found: Value) -> Self {
        CopyError::TypeMismatch {
            path: path.into(),
            key: key.into(),
            found,
        }
    }

    /// The dot-path the error was raised for, when there is one.
    pub fn path(&self) -> Option<&str> {
        match self {
            CopyError::EmptySegment { path }
            | CopyError::PathNotFound { path, .. }
            | CopyError::TypeMismatch { path, .. } => Some(path),
            _ => None,
        }
    }
}
