//! Copy named fields between differently-typed records.
//!
//! Both records are projected into `serde_json` object maps, each dot-path
//! (e.g. `location.state`) is read from the source and written over the
//! existing value in the destination, and the destination is rebuilt from
//! the patched map.
//!
//! ```
//! use fieldcopy_core::copy_values_from_paths;
//! use serde_json::json;
//!
//! let source = json!({"location": {"state": "NC"}});
//! let dest = json!({"connections": 10, "location": {"state": "WV", "zip": "11111"}});
//! let patched = copy_values_from_paths(&["location.state"], &source, &dest).unwrap();
//! assert_eq!(patched, json!({"connections": 10, "location": {"state": "NC", "zip": "11111"}}));
//! ```

pub mod cli;
pub mod command;
pub mod copy;
pub mod document;
pub mod error;
pub mod exec;
pub mod path;
pub mod plan;
pub mod record;

pub use copy::{copy_path, copy_values_from_paths, patch_record};
pub use error::{CopyError, CopyResult, ErrorKind, Side};
pub use path::{read_path, split_dot_path, write_path, DotPath};
pub use plan::CopyPlan;
pub use record::{from_record, to_record, GenericRecord};
