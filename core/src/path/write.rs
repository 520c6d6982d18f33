use serde_json::Value;

use super::{split_dot_path, DotPath};
use crate::error::{CopyError, CopyResult};
use crate::record::GenericRecord;


/// Overwrite the value at `path`, validating the path first.
pub fn write_path(path: &str, record: &mut GenericRecord, value: Value) -> CopyResult<()> {
    DotPath::parse(path)?.write(record, value)
}


impl DotPath {
    /// Overwrite the existing value at this path in `record`.
    ///
    /// Keys are never created: every segment, including the last, must
    /// already exist. Only the terminal segment is written, so on error
    /// `record` is left as it was.
    pub fn write(&self, record: &mut GenericRecord, value: Value) -> CopyResult<()> {
        write_at(self.as_str(), self.as_str(), record, value)
    }
}


fn write_at(full: &str, remaining: &str, record: &mut GenericRecord, value: Value) -> CopyResult<()> {
    let (key, rest) = split_dot_path(remaining);

    let slot = record
        .get_mut(key)
        .ok_or_else(|| CopyError::path_not_found(full, key))?;

    if rest.is_empty() {
        *slot = value;
        return Ok(());
    }

    match slot {
        Value::Object(next) => write_at(full, rest, next, value),
        other => Err(CopyError::type_mismatch(full, key, other.clone())),
    }
}
