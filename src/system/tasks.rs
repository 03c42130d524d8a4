//! Tracking of detached upload continuations.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::Notify;

/// Counts detached continuations so shutdown can wait for them.
///
/// Spawned work is never joined individually; callers only learn when all of
/// it has finished.
#[derive(Debug, Default)]
pub(crate) struct Continuations {
    in_flight: AtomicUsize,
    idle: Notify,
}

impl Continuations {
    /// Spawn `future` on `runtime` without waiting for it.
    pub(crate) fn spawn<F>(self: &Arc<Self>, runtime: &Handle, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let guard = ContinuationGuard {
            tracker: self.clone(),
        };
        runtime.spawn(async move {
            let _guard = guard;
            future.await;
        });
    }

    pub(crate) fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Wait until no continuation is running.
    pub(crate) async fn wait_idle(&self) {
        loop {
            let notified = self.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.in_flight() == 0 {
                return;
            }
            notified.await;
        }
    }
}

/// Decrements the in-flight count when the task finishes or is dropped.
struct ContinuationGuard {
    tracker: Arc<Continuations>,
}

impl Drop for ContinuationGuard {
    fn drop(&mut self) {
        if self.tracker.in_flight.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.tracker.idle.notify_waiters();
        }
    }
}
