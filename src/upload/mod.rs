//! Remote upload.
//!
//! # Responsibilities
//! - Define the uploader capability the logging system depends on
//! - Ship snapshots to an HTTP collector (`http.rs`)
//!
//! # Design Decisions
//! - The server is authoritative for log identifiers: `upload` returns the id
//!   the log is known by remotely
//! - Failures are opaque to the coordinator; they are reported once and
//!   never retried. Uploaders other than HTTP report through `UploadError::Other`

pub mod http;

pub use http::HttpUploader;

use std::future::Future;
use thiserror::Error;
use uuid::Uuid;

use crate::record::Log;

/// Errors that can occur while uploading a log.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Transport failure or undecodable response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The collector answered with a non-success status.
    #[error("Collector returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The configured endpoint is unusable.
    #[error("Invalid upload endpoint: {0}")]
    InvalidEndpoint(String),

    /// Failure reported by an uploader that does not speak HTTP.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl UploadError {
    /// Wrap an uploader-specific error.
    pub fn other(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        UploadError::Other(Box::new(err))
    }
}

/// Ships a log to a remote collector.
pub trait Uploader: Send + Sync + 'static {
    /// Upload `log`, returning the identifier the server assigned to it.
    fn upload(&self, log: Log) -> impl Future<Output = Result<Uuid, UploadError>> + Send;
}
