//! Copy plans: reusable lists of paths stored as YAML (or JSON) files.
//!
//! ```yaml
//! paths:
//!   - location.state
//!   - connections
//! ```

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::copy::{copy_values_from_paths, patch_record};
use crate::error::CopyResult;
use crate::path::DotPath;
use crate::record::GenericRecord;


#[derive(Debug, Error)]
pub enum PlanError {
    #[error("cannot read plan '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid copy plan: {0}")]
    Parse(#[from] serde_yaml::Error),
}


/// An ordered list of paths to copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPlan {
    #[serde(default)]
    pub paths: Vec<DotPath>,
}

impl CopyPlan {
    pub fn new(paths: Vec<DotPath>) -> Self {
        CopyPlan { paths }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Append paths after the ones already in the plan.
    pub fn extend(&mut self, paths: impl IntoIterator<Item = DotPath>) {
        self.paths.extend(paths);
    }

    /// Pairs of paths where one lies underneath the other.
    ///
    /// Overlapping paths are still applied in order; the later one wins for
    /// the shared leaves.
    pub fn overlaps(&self) -> Vec<(&DotPath, &DotPath)> {
        let mut out = Vec::new();
        for (i, a) in self.paths.iter().enumerate() {
            for b in &self.paths[i + 1..] {
                if a.covers(b) || b.covers(a) {
                    out.push((a, b));
                }
            }
        }
        out
    }

    /// Apply the plan to typed values.
    pub fn apply<S, D>(&self, source: &S, dest: &D) -> CopyResult<D>
    where
        S: Serialize + ?Sized,
        D: Serialize + DeserializeOwned,
    {
        copy_values_from_paths(&self.paths, source, dest)
    }

    /// Apply the plan to generic records.
    pub fn apply_record(&self, source: &GenericRecord, dest: GenericRecord) -> CopyResult<GenericRecord> {
        patch_record(&self.paths, source, dest)
    }
}


/// Parse a copy plan from YAML. JSON is accepted as well.
pub fn parse(content: &str) -> Result<CopyPlan, PlanError> {
    Ok(serde_yaml::from_str(content)?)
}


/// Load a copy plan from a file.
pub fn load(path: &Path) -> Result<CopyPlan, PlanError> {
    let content = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}
