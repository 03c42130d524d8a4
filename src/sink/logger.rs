//! Category-scoped logger handle.

use std::fmt;
use std::sync::Arc;

use crate::observability::metrics;
use crate::sink::entry::{LogEntry, LogLevel};
use crate::sink::LogSink;

/// A handle bound to one subsystem and one category.
///
/// Handles are only lent out by the logging system, never cloned by callers.
pub struct Logger {
    inner: Arc<LoggerInner>,
}

struct LoggerInner {
    subsystem: Arc<str>,
    category: String,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    pub(crate) fn new(subsystem: Arc<str>, category: impl Into<String>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            inner: Arc::new(LoggerInner {
                subsystem,
                category: category.into(),
                sink,
            }),
        }
    }

    /// Another reference to this handle, for the cache.
    pub(crate) fn share(&self) -> Logger {
        Logger {
            inner: self.inner.clone(),
        }
    }

    pub fn subsystem(&self) -> &str {
        &self.inner.subsystem
    }

    pub fn category(&self) -> &str {
        &self.inner.category
    }

    /// True if both values refer to the same underlying handle.
    pub fn same_handle(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Write a message at `level`.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        let message = message.into();
        let subsystem = &*self.inner.subsystem;
        let category = self.inner.category.as_str();

        match level {
            LogLevel::Debug => tracing::debug!(subsystem, category, "{}", message),
            LogLevel::Info | LogLevel::Notice => tracing::info!(subsystem, category, "{}", message),
            LogLevel::Error => tracing::error!(subsystem, category, "{}", message),
            LogLevel::Fault => tracing::error!(subsystem, category, fault = true, "{}", message),
        }

        metrics::record_entry(level);
        self.inner
            .sink
            .append(LogEntry::now(subsystem, category, level, message));
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn notice(&self, message: impl Into<String>) {
        self.log(LogLevel::Notice, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn fault(&self, message: impl Into<String>) {
        self.log(LogLevel::Fault, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("subsystem", &self.inner.subsystem)
            .field("category", &self.inner.category)
            .finish()
    }
}
