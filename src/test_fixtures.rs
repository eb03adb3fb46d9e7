//! Test fixtures for building project trees on disk.
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, create_project};
//!
//! let parent = create_temp_dir();
//! let marked = create_project(&parent, "projA", true);
//! let plain = create_project(&parent, "projB", false);
//! ```

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::MARKER_FILE;

/// Create a temp directory in the system temp location.
///
/// Never relative, so a `TMPDIR=tmp` environment cannot place fixtures under
/// the current working directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    let base = std::env::temp_dir();
    let base = if base.is_absolute() {
        base
    } else {
        PathBuf::from("/tmp")
    };
    TempDir::new_in(base).expect("Failed to create temp directory")
}

/// Create a project directory under `parent`, optionally with the marker file.
///
/// # Panics
///
/// Panics if the directory or marker cannot be created.
pub fn create_project(parent: &TempDir, name: &str, marked: bool) -> PathBuf {
    let path = parent.path().join(name);
    std::fs::create_dir_all(&path).expect("Failed to create project directory");
    if marked {
        std::fs::write(path.join(MARKER_FILE), "").expect("Failed to write marker file");
    }
    path
}

/// Read a file relative to `project`.
///
/// # Panics
///
/// Panics if the file cannot be read.
pub fn read(project: &Path, relative: &str) -> String {
    std::fs::read_to_string(project.join(relative)).expect("Failed to read file")
}
