//! The typed interface for every `fieldcopy` operation.
//!
//! Commands serialize as JSON objects with a `"command"` discriminant:
//!
//! ```json
//! {"command": "copy", "source": "req.json", "dest": "user.yaml", "paths": ["location.state"]}
//! {"command": "get", "file": "user.yaml", "path": "location.zip"}
//! ```

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command")]
pub enum Command {
    /// Patch `dest` with the values at `paths` (and any plan paths) from `source`.
    #[serde(rename = "copy")]
    Copy {
        source: String,
        dest: String,
        #[serde(default)]
        paths: Vec<String>,
        /// Plan file whose paths run before the command-line ones.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        plan: Option<String>,
        /// Output format: "json" or "yaml"; defaults to the dest file's format.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },

    /// Print the value at `path` in `file`.
    #[serde(rename = "get")]
    Get {
        file: String,
        path: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<String>,
    },

    #[serde(rename = "help")]
    Help,
}
