//! Project discovery
//!
//! A sibling directory is a target project if and only if the marker file
//! exists directly inside it.

use std::path::{Component, Path, PathBuf};

use crate::error::{Result, SyncError};

fn list_error(path: &Path, e: &std::io::Error) -> SyncError {
    SyncError::DirectoryListFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Check whether `dir` opts into synchronization
pub fn is_managed(dir: &Path, marker: &str) -> bool {
    dir.is_dir() && dir.join(marker).exists()
}

/// Make `path` absolute and drop `.` and `..` components
///
/// Purely lexical: symlinks are kept as they appear under the parent.
pub fn absolute_lexical(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

/// List the managed projects among the immediate children of `parent`
///
/// Returned paths are absolute and normalized, in directory listing order.
pub fn discover_projects(parent: &Path, marker: &str) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(parent).map_err(|e| list_error(parent, &e))?;

    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| list_error(parent, &e))?;
        let path = entry.path();

        if !is_managed(&path, marker) {
            tracing::trace!(path = %path.display(), "skipping unmanaged entry");
            continue;
        }

        let normalized = absolute_lexical(&path).map_err(|e| SyncError::PathNormalizeFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::debug!(project = %normalized.display(), "found managed project");
        projects.push(normalized);
    }

    Ok(projects)
}
