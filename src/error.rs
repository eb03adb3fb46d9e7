//! Error types and handling for sharedsettings
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes.
//! Every variant is fatal for the run; `main` reports it and exits non-zero.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for a synchronization run
#[derive(Error, Diagnostic, Debug)]
pub enum SyncError {
    // Discovery errors
    #[error("Failed to list project directory '{path}': {reason}")]
    #[diagnostic(
        code(sharedsettings::discovery::list_failed),
        help("Run sharedsettings from inside a project whose parent directory is readable")
    )]
    DirectoryListFailed { path: String, reason: String },

    #[error("Failed to normalize project path '{path}': {reason}")]
    #[diagnostic(code(sharedsettings::discovery::normalize_failed))]
    PathNormalizeFailed { path: String, reason: String },

    // Fetch errors
    #[error("Failed to create HTTP client: {reason}")]
    #[diagnostic(code(sharedsettings::fetch::client_failed))]
    HttpClientFailed { reason: String },

    #[error("Failed to download {resource} from {url}: response status {status}")]
    #[diagnostic(
        code(sharedsettings::fetch::bad_status),
        help("Check that the shared settings repository is reachable and the file exists")
    )]
    FetchStatus {
        resource: String,
        url: String,
        status: u16,
    },

    #[error("Failed to download {resource} from {url}: {reason}")]
    #[diagnostic(code(sharedsettings::fetch::transport_failed))]
    FetchFailed {
        resource: String,
        url: String,
        reason: String,
    },

    // Distribution errors
    #[error("Failed to remove existing file: {path}: {reason}")]
    #[diagnostic(code(sharedsettings::fs::remove_failed))]
    FileRemoveFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(sharedsettings::fs::create_dir_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(sharedsettings::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SyncError>;
