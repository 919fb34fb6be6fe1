//! Root and checker resolution.
//!
//! Runs before anything else: a missing iteration directory or a missing
//! checker stops the run with no file selected and nothing invoked.

use crate::core::{ProjectRoot, ToolPath};
use crate::errors::{BatchError, Result};
use std::path::{Component, Path, PathBuf};

/// Default iteration directory, relative to the working directory.
///
/// Points at the project root when run from inside `ext/cpplint`.
pub const DEFAULT_ITERATION_DIR: &str = "../..";

/// Turn a user-supplied directory into an absolute, existing project root.
pub fn resolve_root(dir: &Path) -> Result<ProjectRoot> {
    let absolute = std::path::absolute(dir).map_err(|e| BatchError::io(dir, e))?;
    let path = normalize_lexically(&absolute);

    if !path.is_dir() {
        return Err(BatchError::InvalidRoot { path });
    }

    log::info!("Project root: {}", path.display());
    Ok(ProjectRoot::new(path))
}

/// Locate the checker beneath the project root.
pub fn resolve_tool(root: &ProjectRoot, relative: &Path) -> Result<ToolPath> {
    let path = normalize_lexically(&root.as_path().join(relative));

    if !path.is_file() {
        return Err(BatchError::ToolNotFound { path });
    }

    log::info!("Checker: {}", path.display());
    Ok(ToolPath::new(path))
}

/// Remove `.` and `..` components without touching the filesystem.
///
/// Symlinks are not resolved, so `a/link/..` becomes `a`.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(
                    normalized.components().next_back(),
                    Some(Component::Normal(_))
                ) {
                    normalized.pop();
                } else if !normalized.has_root() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
