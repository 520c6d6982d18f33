//! Loading and rendering JSON/YAML documents as generic records.

use std::fmt;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::record::{value_type_name, GenericRecord};


#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("document must be a mapping at the top level, found {found}")]
    NotAMapping { found: &'static str },

    #[error("unknown format '{0}', expected 'json' or 'yaml'")]
    UnknownFormat(String),
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick a format from a file extension; anything but `.yaml`/`.yml` is JSON.
    pub fn from_path(path: &Path) -> Format {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => Format::Yaml,
            _ => Format::Json,
        }
    }

    pub fn parse(s: &str) -> Result<Format, DocumentError> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(DocumentError::UnknownFormat(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


/// Read a document from disk, choosing the parser by extension.
pub fn load_document(path: &Path) -> Result<GenericRecord, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&content, Format::from_path(path))
}


/// Parse a document that must be a mapping at the top level.
pub fn parse_document(content: &str, format: Format) -> Result<GenericRecord, DocumentError> {
    match parse_value(content, format)? {
        Value::Object(map) => Ok(map),
        other => Err(DocumentError::NotAMapping {
            found: value_type_name(&other),
        }),
    }
}


/// Parse any document value.
pub fn parse_value(content: &str, format: Format) -> Result<Value, DocumentError> {
    Ok(match format {
        Format::Json => serde_json::from_str(content)?,
        Format::Yaml => serde_yaml::from_str(content)?,
    })
}


pub fn render_document(record: &GenericRecord, format: Format) -> Result<String, DocumentError> {
    render_value(&Value::Object(record.clone()), format)
}


/// Render a value; JSON is pretty-printed, YAML output ends with a newline.
pub fn render_value(value: &Value, format: Format) -> Result<String, DocumentError> {
    Ok(match format {
        Format::Json => serde_json::to_string_pretty(value)?,
        Format::Yaml => serde_yaml::to_string(value)?,
    })
}
