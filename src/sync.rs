//! Run orchestration: discover, fetch, distribute

use std::path::PathBuf;

use crate::config::SyncConfig;
use crate::discovery;
use crate::distribute;
use crate::error::Result;
use crate::fetch::{self, ContentSource};

/// Outcome of a completed run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncReport {
    pub projects: Vec<PathBuf>,
    pub files_written: usize,
}

/// Run the whole pipeline once
///
/// `connect` is only called when at least one project is managed, so a run
/// without targets never touches the network.
pub fn run<S, F>(config: &SyncConfig, connect: F) -> Result<SyncReport>
where
    S: ContentSource,
    F: FnOnce() -> Result<S>,
{
    let projects = discovery::discover_projects(&config.parent_dir, &config.marker_file)?;
    if projects.is_empty() {
        tracing::debug!(
            parent = %config.parent_dir.display(),
            "no managed projects found"
        );
        return Ok(SyncReport::default());
    }

    let source = connect()?;
    let content = fetch::fetch_content(&source, &config.resources)?;
    tracing::debug!(resources = content.len(), "all resources fetched");

    let files_written = distribute::distribute(&content, &projects)?;
    tracing::info!(
        projects = projects.len(),
        files = files_written,
        "shared settings updated"
    );

    Ok(SyncReport {
        projects,
        files_written,
    })
}
