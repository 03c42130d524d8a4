//! The `Log` record: one uploaded snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

use crate::error::LogResult;
use crate::record::platform::ClientPlatform;

/// A snapshot of a subsystem's log history.
///
/// Immutable once built, except for `id`: it starts as a locally generated
/// identifier and is replaced once by the identifier the uploader returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    id: Uuid,
    content: String,
    client_platform: ClientPlatform,
    date: DateTime<Utc>,
}

impl Log {
    /// Create a log for `content` with a fresh id and the current time.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            client_platform: ClientPlatform::current(),
            date: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn client_platform(&self) -> ClientPlatform {
        self.client_platform
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Adopt the server-assigned identifier after a successful upload.
    pub(crate) fn reconcile_id(&mut self, id: Uuid) {
        self.id = id;
    }

    /// Write `content` as UTF-8 to a temporary file named after the id.
    pub fn write_to_disk(&self) -> LogResult<PathBuf> {
        let path = std::env::temp_dir().join(format!("{}.log", self.id));
        fs::write(&path, self.content.as_bytes())?;
        tracing::debug!(log_id = %self.id, path = %path.display(), "Wrote log to disk");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_log() {
        let a = Log::new("hello");
        let b = Log::new("hello");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.content(), "hello");
        assert_eq!(a.client_platform(), ClientPlatform::current());
        assert!(a.date() <= Utc::now());
    }

    #[test]
    fn test_reconcile_id() {
        let mut log = Log::new("x");
        let server_id = Uuid::new_v4();
        log.reconcile_id(server_id);
        assert_eq!(log.id(), server_id);
        assert_eq!(log.content(), "x");
    }

    #[test]
    fn test_write_to_disk_round_trip() {
        let log = Log::new("[1/2/26, 3:04:05 PM] first\n[1/2/26, 3:04:06 PM] [network] ünïcode");
        let path = log.write_to_disk().unwrap();
        assert!(path.ends_with(format!("{}.log", log.id())));

        let read = std::fs::read(&path).unwrap();
        assert_eq!(read, log.content().as_bytes());

        std::fs::remove_file(path).unwrap_or_default();
    }

    #[test]
    fn test_wire_format() {
        let log = Log::new("body");
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["content"], "body");
        assert_eq!(json["id"], log.id().to_string());
        assert!(json.get("clientPlatform").is_some());
        assert!(json.get("date").is_some());
    }
}
