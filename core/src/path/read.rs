use serde_json::Value;

use super::{split_dot_path, DotPath};
use crate::error::{CopyError, CopyResult};
use crate::record::GenericRecord;


/// Read the value at `path`, validating the path first.
///
/// The leaf may be of any type, including `null` or a nested mapping.
pub fn read_path<'a>(path: &str, record: &'a GenericRecord) -> CopyResult<&'a Value> {
    DotPath::parse(path)?.read(record)
}


impl DotPath {
    /// Resolve this path in `record`.
    ///
    /// Every segment must exist, and every non-terminal segment must hold a
    /// mapping.
    pub fn read<'a>(&self, record: &'a GenericRecord) -> CopyResult<&'a Value> {
        read_at(self.as_str(), self.as_str(), record)
    }
}


fn read_at<'a>(full: &str, remaining: &str, record: &'a GenericRecord) -> CopyResult<&'a Value> {
    let (key, rest) = split_dot_path(remaining);

    let value = record
        .get(key)
        .ok_or_else(|| CopyError::path_not_found(full, key))?;

    if rest.is_empty() {
        return Ok(value);
    }

    match value {
        Value::Object(next) => read_at(full, rest, next),
        other => Err(CopyError::type_mismatch(full, key, other.clone())),
    }
}
