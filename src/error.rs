//! Error definitions shared by the logging system.

use thiserror::Error;

use crate::upload::UploadError;

/// Errors that can occur while writing, collecting or shipping logs.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log store could not be queried.
    #[error("Log store query failed: {0}")]
    Store(String),

    /// The subsystem has no log entries to snapshot.
    #[error("No log entries recorded for subsystem '{0}'")]
    EmptySnapshot(String),

    /// The uploader rejected or failed to deliver the snapshot.
    #[error("Upload failed: {0}")]
    Upload(#[from] UploadError),

    /// Filesystem error while materializing a log.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The logging system was built outside a Tokio runtime.
    #[error("Logging system requires a Tokio runtime")]
    NoRuntime,
}

/// Result type for logging system operations.
pub type LogResult<T> = Result<T, LogError>;
