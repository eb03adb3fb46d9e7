//! Fixed run configuration
//!
//! All URLs and paths are constants. They are gathered into one immutable
//! [`SyncConfig`] that `main` builds once and hands to each stage.

use std::fmt;
use std::path::{Path, PathBuf};

/// Directory scanned for sibling projects, relative to the working directory
pub const PARENT_DIR: &str = "..";

/// File whose presence opts a project into synchronization
pub const MARKER_FILE: &str = ".sharedsettings";

const BASE_URL: &str = "https://raw.githubusercontent.com/rhjoerg/rhj-settings/master";

/// The three shared files, in write order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    License,
    Settings,
    BuildWorkflow,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::License,
        ResourceKind::Settings,
        ResourceKind::BuildWorkflow,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::License => "license",
            ResourceKind::Settings => "settings",
            ResourceKind::BuildWorkflow => "build workflow",
        }
    }

    fn remote_file(self) -> &'static str {
        match self {
            ResourceKind::License => "LICENSE",
            ResourceKind::Settings => "settings.xml",
            ResourceKind::BuildWorkflow => "build.yml",
        }
    }

    /// Path of this resource inside a target project
    pub fn destination(self) -> &'static Path {
        match self {
            ResourceKind::License => Path::new("LICENSE"),
            ResourceKind::Settings => Path::new("settings.xml"),
            ResourceKind::BuildWorkflow => Path::new(".github/workflows/build.yml"),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A shared file and where it is downloaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteResource {
    pub kind: ResourceKind,
    pub url: String,
}

impl RemoteResource {
    pub fn new(kind: ResourceKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
        }
    }

    /// Destination of this resource under `project`
    pub fn destination_in(&self, project: &Path) -> PathBuf {
        project.join(self.kind.destination())
    }
}

/// Immutable configuration for a single run
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub parent_dir: PathBuf,
    pub marker_file: String,
    /// One entry per [`ResourceKind`], in [`ResourceKind::ALL`] order
    pub resources: Vec<RemoteResource>,
}

impl SyncConfig {
    /// Same fixed resources, pointed at another base URL and parent directory
    #[cfg(test)]
    pub fn with_base(parent_dir: impl Into<PathBuf>, base_url: &str) -> Self {
        Self {
            parent_dir: parent_dir.into(),
            marker_file: MARKER_FILE.to_string(),
            resources: resources_at(base_url),
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            parent_dir: PathBuf::from(PARENT_DIR),
            marker_file: MARKER_FILE.to_string(),
            resources: resources_at(BASE_URL),
        }
    }
}

fn resources_at(base_url: &str) -> Vec<RemoteResource> {
    let base = base_url.trim_end_matches('/');
    ResourceKind::ALL
        .iter()
        .map(|&kind| RemoteResource::new(kind, format!("{base}/{}", kind.remote_file())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = SyncConfig::default();
        let urls: Vec<&str> = config.resources.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://raw.githubusercontent.com/rhjoerg/rhj-settings/master/LICENSE",
                "https://raw.githubusercontent.com/rhjoerg/rhj-settings/master/settings.xml",
                "https://raw.githubusercontent.com/rhjoerg/rhj-settings/master/build.yml",
            ]
        );
    }

    #[test]
    fn test_default_paths() {
        let config = SyncConfig::default();
        assert_eq!(config.parent_dir, PathBuf::from(".."));
        assert_eq!(config.marker_file, ".sharedsettings");
    }

    #[test]
    fn test_destinations() {
        let project = Path::new("/work/proj");
        let config = SyncConfig::default();
        let dests: Vec<PathBuf> = config
            .resources
            .iter()
            .map(|r| r.destination_in(project))
            .collect();
        assert_eq!(
            dests,
            vec![
                PathBuf::from("/work/proj/LICENSE"),
                PathBuf::from("/work/proj/settings.xml"),
                PathBuf::from("/work/proj/.github/workflows/build.yml"),
            ]
        );
    }

    #[test]
    fn test_with_base_trims_slash() {
        let config = SyncConfig::with_base("/tmp", "http://127.0.0.1:1234/");
        assert_eq!(config.resources[0].url, "http://127.0.0.1:1234/LICENSE");
    }
}
