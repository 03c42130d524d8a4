//! In-process log store.
//!
//! # Design Decisions
//! - Entries are only ever pushed whole, so the `Vec` stays consistent even if
//!   a writer panicked. A poisoned lock is recovered on every path: writes keep
//!   landing and reads keep returning what is stored

use std::sync::{Arc, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::LogResult;
use crate::sink::entry::LogEntry;
use crate::sink::LogSink;

/// A thread-safe in-memory log store.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: RwLock<Vec<LogEntry>>,
}

impl MemorySink {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide store.
    pub fn global() -> Arc<MemorySink> {
        static GLOBAL: OnceLock<Arc<MemorySink>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(MemorySink::new())).clone()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_entries(&self) -> RwLockReadGuard<'_, Vec<LogEntry>> {
        self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, Vec<LogEntry>> {
        self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for MemorySink {
    fn append(&self, entry: LogEntry) {
        self.write_entries().push(entry);
    }

    fn entries(&self, predicate: &dyn Fn(&LogEntry) -> bool) -> LogResult<Vec<LogEntry>> {
        Ok(self
            .read_entries()
            .iter()
            .filter(|e| predicate(e))
            .cloned()
            .collect())
    }
}
