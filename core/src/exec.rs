//! Command execution: turns a parsed `Command` into rendered output.

use std::path::Path;

use thiserror::Error;

use crate::cli::usage;
use crate::command::Command;
use crate::document::{self, DocumentError, Format};
use crate::error::CopyError;
use crate::path::{read_path, DotPath};
use crate::plan::{self, CopyPlan, PlanError};


#[derive(Debug, Error)]
pub enum ExecError {
    #[error(transparent)]
    Copy(#[from] CopyError),

    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("no paths to copy; pass --path or --plan")]
    NoPaths,
}


/// Execute a command and return the text to print on stdout.
pub fn execute(cmd: Command) -> Result<String, ExecError> {
    match cmd {
        Command::Copy { source, dest, paths, plan, format } => {
            execute_copy(Path::new(&source), Path::new(&dest), &paths, plan.as_deref(), format.as_deref())
        }
        Command::Get { file, path, format } => execute_get(Path::new(&file), &path, format.as_deref()),
        Command::Help => Ok(usage().to_string()),
    }
}


fn execute_copy(
    source: &Path,
    dest: &Path,
    paths: &[String],
    plan_file: Option<&str>,
    format: Option<&str>,
) -> Result<String, ExecError> {
    let mut copy_plan = match plan_file {
        Some(p) => plan::load(Path::new(p))?,
        None => CopyPlan::default(),
    };
    let extra = paths
        .iter()
        .map(|p| DotPath::parse(p))
        .collect::<Result<Vec<_>, _>>()?;
    copy_plan.extend(extra);

    if copy_plan.is_empty() {
        return Err(ExecError::NoPaths);
    }
    for (a, b) in copy_plan.overlaps() {
        tracing::warn!(first = %a, second = %b, "overlapping paths; the later one wins");
    }

    let format = resolve_format(format, dest)?;
    let src = document::load_document(source)?;
    let dst = document::load_document(dest)?;
    tracing::debug!(source = %source.display(), dest = %dest.display(), paths = copy_plan.paths.len(), "patching document");

    let patched = copy_plan.apply_record(&src, dst)?;
    Ok(document::render_document(&patched, format)?)
}


fn execute_get(file: &Path, path: &str, format: Option<&str>) -> Result<String, ExecError> {
    let format = resolve_format(format, file)?;
    let record = document::load_document(file)?;
    let value = read_path(path, &record)?;
    Ok(document::render_value(value, format)?)
}


/// An explicit `--format` wins; otherwise follow the file's extension.
fn resolve_format(explicit: Option<&str>, file: &Path) -> Result<Format, DocumentError> {
    match explicit {
        Some(f) => Format::parse(f),
        None => Ok(Format::from_path(file)),
    }
}
