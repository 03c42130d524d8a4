//! Logging-system coordinator.
//!
//! # Data Flow
//! ```text
//! with_logger(category, do_upload, f)
//!     → cache.rs (lazy per-category Logger)
//!     → f(&logger) runs synchronously
//!     → do_upload? spawn detached continuation (tasks.rs)
//!
//! continuation:
//!     → MainContext::read (consent)
//!     → upload_log:
//!         sink query → snapshot.rs (render) → Log
//!         → Uploader::upload → reconcile id
//!         → MainContext::update (history append)
//!     → on failure: one error entry via with_logger(default, false, ..)
//! ```
//!
//! # Design Decisions
//! - Upload failures are logged with uploading forced off, so reporting an
//!   upload failure can never start another upload
//! - Snapshots capture whatever the store holds at query time; concurrent
//!   cycles may upload overlapping content
//! - `upload_log` does not check consent; `with_logger` gates it

pub mod cache;
pub mod snapshot;
pub mod tasks;

use std::convert::Infallible;
use std::sync::Arc;
use tokio::runtime::Handle;

use crate::category::Category;
use crate::error::{LogError, LogResult};
use crate::observability::metrics;
use crate::record::Log;
use crate::settings::{LogConfiguration, MainContext};
use crate::sink::{LogEntry, LogSink, Logger, MemorySink};
use crate::upload::Uploader;

use self::cache::LoggerCache;
use self::tasks::Continuations;

/// Category-scoped logging with opportunistic upload.
///
/// Cheap to clone; clones share loggers, settings and uploader.
pub struct LoggingSystem<K, C, U> {
    inner: Arc<Inner<K, C, U>>,
}

struct Inner<K, C, U> {
    subsystem: Arc<str>,
    loggers: LoggerCache<K>,
    sink: Arc<dyn LogSink>,
    settings: MainContext<C>,
    uploader: U,
    runtime: Handle,
    continuations: Arc<Continuations>,
}

impl<K, C, U> Clone for LoggingSystem<K, C, U> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K, C, U> LoggingSystem<K, C, U>
where
    K: Category,
    C: LogConfiguration,
    U: Uploader,
{
    /// Create a logging system writing to the process-wide store.
    ///
    /// Must be called from within a Tokio runtime; upload continuations are
    /// spawned on it.
    pub fn new(subsystem: impl Into<String>, settings: MainContext<C>, uploader: U) -> LogResult<Self> {
        Self::with_sink(subsystem, MemorySink::global(), settings, uploader)
    }

    /// Create a logging system backed by `sink`.
    pub fn with_sink(
        subsystem: impl Into<String>,
        sink: Arc<dyn LogSink>,
        settings: MainContext<C>,
        uploader: U,
    ) -> LogResult<Self> {
        let runtime = Handle::try_current().map_err(|_| LogError::NoRuntime)?;
        let subsystem: String = subsystem.into();
        let subsystem: Arc<str> = Arc::from(subsystem);

        tracing::info!(subsystem = %subsystem, "Logging system initialized");

        Ok(Self {
            inner: Arc::new(Inner {
                loggers: LoggerCache::new(subsystem.clone(), sink.clone()),
                subsystem,
                sink,
                settings,
                uploader,
                runtime,
                continuations: Arc::new(Continuations::default()),
            }),
        })
    }

    pub fn subsystem(&self) -> &str {
        &self.inner.subsystem
    }

    /// The designated context guarding the settings.
    pub fn settings(&self) -> &MainContext<C> {
        &self.inner.settings
    }

    pub(crate) fn logger(&self, category: &K) -> Logger {
        self.inner.loggers.get_or_create(category)
    }

    /// Lend the logger for `category` to `f`, then maybe upload.
    ///
    /// `f` runs synchronously and its error is returned unchanged; a failed
    /// `f` never triggers an upload. When `f` succeeds and `do_upload` is set,
    /// an upload is attempted in the background if the user allows it. This
    /// call does not wait for that attempt. Anything `f` hands off to other
    /// tasks may not be in the store yet when the snapshot is taken.
    pub fn with_logger<R, E, F>(&self, category: K, do_upload: bool, f: F) -> Result<R, E>
    where
        F: FnOnce(&Logger) -> Result<R, E>,
    {
        let logger = self.logger(&category);
        let value = f(&logger)?;

        if do_upload {
            let system = self.clone();
            self.inner
                .continuations
                .spawn(&self.inner.runtime, async move {
                    system.upload_if_permitted().await;
                });
        }

        Ok(value)
    }

    /// Infallible form of [`with_logger`](Self::with_logger).
    pub fn log(&self, category: K, do_upload: bool, f: impl FnOnce(&Logger)) {
        let result = self.with_logger(category, do_upload, |logger| {
            f(logger);
            Ok::<(), Infallible>(())
        });
        if let Err(never) = result {
            match never {}
        }
    }

    /// Wait for every upload continuation spawned so far.
    pub async fn flush(&self) {
        self.inner.continuations.wait_idle().await;
    }

    /// Copy of the uploaded-log history.
    pub async fn uploaded_logs(&self) -> Vec<Log> {
        self.inner
            .settings
            .read(|settings| settings.uploaded_logs().to_vec())
            .await
    }

    /// Collect this subsystem's entries into a new `Log`.
    pub fn snapshot(&self) -> LogResult<Log> {
        let subsystem = &*self.inner.subsystem;
        let entries = self
            .inner
            .sink
            .entries(&|entry: &LogEntry| entry.subsystem == subsystem)?;

        let default_category = K::default();
        let content = snapshot::render(entries, default_category.name());
        if content.is_empty() {
            return Err(LogError::EmptySnapshot(subsystem.to_string()));
        }

        metrics::record_snapshot_bytes(content.len());
        Ok(Log::new(content))
    }

    /// Snapshot the store, upload it and append the result to the history.
    ///
    /// Returns the log carrying the server-assigned id. Does not consult
    /// the user's consent.
    pub async fn upload_log(&self) -> LogResult<Log> {
        let result = self.snapshot_and_upload().await;
        metrics::record_upload(if result.is_ok() { "success" } else { "failure" });
        result
    }

    async fn snapshot_and_upload(&self) -> LogResult<Log> {
        let mut log = self.snapshot()?;
        let local_id = log.id();

        let server_id = self.inner.uploader.upload(log.clone()).await?;
        log.reconcile_id(server_id);

        tracing::info!(
            subsystem = %self.inner.subsystem,
            local_id = %local_id,
            log_id = %server_id,
            bytes = log.content().len(),
            "Uploaded log snapshot"
        );

        let stored = log.clone();
        self.inner
            .settings
            .update(move |settings| settings.record_uploaded_log(stored))
            .await;

        Ok(log)
    }

    async fn upload_if_permitted(&self) {
        let permitted = self
            .inner
            .settings
            .read(|settings| settings.do_upload_logs())
            .await;
        if !permitted {
            metrics::record_upload("skipped");
            tracing::debug!(subsystem = %self.inner.subsystem, "Log upload disabled by user");
            return;
        }

        if let Err(e) = self.upload_log().await {
            tracing::warn!(subsystem = %self.inner.subsystem, error = %e, "Log upload failed");
            self.log(K::default(), false, |logger| {
                logger.error(format!("Failed to upload logs: {}", e));
            });
        }
    }
}
