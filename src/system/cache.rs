//! Per-category logger cache.

use dashmap::DashMap;
use std::sync::Arc;

use crate::category::Category;
use crate::observability::metrics;
use crate::sink::{LogSink, Logger};

/// Lazily created, never evicted logger handles keyed by category.
pub(crate) struct LoggerCache<K> {
    subsystem: Arc<str>,
    sink: Arc<dyn LogSink>,
    loggers: DashMap<K, Logger>,
}

impl<K: Category> LoggerCache<K> {
    pub(crate) fn new(subsystem: Arc<str>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            subsystem,
            sink,
            loggers: DashMap::new(),
        }
    }

    /// Get the handle for `category`, creating it on first use.
    pub(crate) fn get_or_create(&self, category: &K) -> Logger {
        if let Some(logger) = self.loggers.get(category) {
            return logger.value().share();
        }

        // The entry API holds the shard lock, so concurrent callers for the
        // same category all end up with the first handle inserted.
        let logger = self
            .loggers
            .entry(category.clone())
            .or_insert_with(|| {
                metrics::record_logger_created(category.name());
                tracing::debug!(
                    subsystem = %self.subsystem,
                    category = category.name(),
                    "Created logger"
                );
                Logger::new(self.subsystem.clone(), category.name(), self.sink.clone())
            })
            .value()
            .share();

        metrics::record_cached_loggers(self.loggers.len());
        logger
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.loggers.len()
    }
}
