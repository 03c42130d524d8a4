//! Settings collaborator and its designated execution context.
//!
//! # Data Flow
//! ```text
//! upload continuation
//!     → MainContext::read   (consent check)
//!     → uploader
//!     → MainContext::update (append to uploaded history)
//! ```
//!
//! # Design Decisions
//! - The consent flag and the uploaded history are only touched through
//!   `MainContext`, which serializes access in FIFO order
//! - Implementations backed by visible UI override `record_uploaded_log`
//!   to animate the insertion; the default is a plain append

pub mod context;

pub use context::MainContext;

use serde::{Deserialize, Serialize};

use crate::record::Log;

/// Capability the logging system needs from the application's settings.
pub trait LogConfiguration: Send + 'static {
    /// Whether the user allows logs to be uploaded.
    fn do_upload_logs(&self) -> bool;

    /// Previously uploaded logs, oldest first.
    fn uploaded_logs(&self) -> &[Log];

    fn uploaded_logs_mut(&mut self) -> &mut Vec<Log>;

    /// Append a freshly uploaded log to the history.
    fn record_uploaded_log(&mut self, log: Log) {
        self.uploaded_logs_mut().push(log);
    }
}

/// Plain in-memory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MemorySettings {
    pub do_upload_logs: bool,
    pub uploaded_logs: Vec<Log>,
}

impl MemorySettings {
    pub fn new(do_upload_logs: bool) -> Self {
        Self {
            do_upload_logs,
            uploaded_logs: Vec::new(),
        }
    }
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self::new(true)
    }
}

impl LogConfiguration for MemorySettings {
    fn do_upload_logs(&self) -> bool {
        self.do_upload_logs
    }

    fn uploaded_logs(&self) -> &[Log] {
        &self.uploaded_logs
    }

    fn uploaded_logs_mut(&mut self) -> &mut Vec<Log> {
        &mut self.uploaded_logs
    }
}
