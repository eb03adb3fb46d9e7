//! Common test utilities for sharedsettings integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A directory holding sibling projects
pub struct TestProjects {
    /// Temporary parent directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the parent directory
    pub path: PathBuf,
}

impl TestProjects {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a sibling project, optionally opted in with the marker file
    pub fn create_project(&self, name: &str, marked: bool) -> PathBuf {
        let project = self.path.join(name);
        std::fs::create_dir_all(&project).expect("Failed to create project directory");
        if marked {
            std::fs::write(project.join(".sharedsettings"), "")
                .expect("Failed to write marker file");
        }
        project
    }

    /// Check if a file exists relative to the parent directory
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Read a file relative to the parent directory
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }
}
