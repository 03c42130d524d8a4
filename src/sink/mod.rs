//! Platform log sink.
//!
//! # Data Flow
//! ```text
//! Logger::log(level, message)
//!     → tracing event (subsystem, category fields)
//!     → LogSink::append(LogEntry)
//!
//! Upload cycle:
//!     LogSink::entries(predicate) → entries in creation order
//! ```
//!
//! # Design Decisions
//! - The sink is an append-only store; entries are never mutated
//! - Queries take a predicate so callers decide what belongs to them
//! - `MemorySink::global()` is the process-wide store

pub mod entry;
pub mod logger;
pub mod memory;

pub use entry::{EntryKind, LogEntry, LogLevel};
pub use logger::Logger;
pub use memory::MemorySink;

use crate::error::LogResult;

/// An append-only log store with query-by-predicate retrieval.
pub trait LogSink: Send + Sync {
    /// Append an entry.
    fn append(&self, entry: LogEntry);

    /// Return every entry matching `predicate`, in creation order.
    fn entries(&self, predicate: &dyn Fn(&LogEntry) -> bool) -> LogResult<Vec<LogEntry>>;
}
