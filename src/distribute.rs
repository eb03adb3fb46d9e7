//! Content distribution
//!
//! Writes every fetched body into every target project. Each write fully
//! replaces the destination. The first failure stops the run and files
//! written before it are left in place.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, SyncError};
use crate::fetch::FetchedContent;

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SyncError::DirectoryCreateFailed {
            path: parent.display().to_string(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}

/// Remove a file, symlink or empty directory at `path`
///
/// A non-empty directory is left alone and reported as a failure.
fn remove_if_exists(path: &Path) -> Result<()> {
    // A dangling symlink still counts as an existing file.
    let Ok(metadata) = path.symlink_metadata() else {
        return Ok(());
    };
    let removed = if metadata.is_dir() {
        std::fs::remove_dir(path)
    } else {
        std::fs::remove_file(path)
    };
    match removed {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SyncError::FileRemoveFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Replace `target` with `body`, creating parent directories as needed
pub fn write_resource(body: &str, target: &Path) -> Result<()> {
    remove_if_exists(target)?;
    ensure_parent_dir(target)?;
    std::fs::write(target, body.as_bytes()).map_err(|e| SyncError::FileWriteFailed {
        path: target.display().to_string(),
        reason: e.to_string(),
    })
}

/// Write all fetched content into each project, returning the number of files written
pub fn distribute(content: &FetchedContent, projects: &[PathBuf]) -> Result<usize> {
    let mut written = 0;
    for project in projects {
        for (resource, body) in content.entries() {
            let target = resource.destination_in(project);
            write_resource(body, &target)?;
            tracing::debug!(
                resource = resource.kind.name(),
                path = %target.display(),
                "wrote file"
            );
            written += 1;
        }
    }
    Ok(written)
}
