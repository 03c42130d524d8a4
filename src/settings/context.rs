//! Designated execution context for UI-observable settings.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::settings::LogConfiguration;

/// Serialized access to a [`LogConfiguration`].
///
/// Every access is a suspension point. Waiters are served in arrival order,
/// so state updates are observed in the order they were issued.
pub struct MainContext<C> {
    state: Arc<Mutex<C>>,
}

impl<C: LogConfiguration> MainContext<C> {
    pub fn new(config: C) -> Self {
        Self {
            state: Arc::new(Mutex::new(config)),
        }
    }

    /// Run `f` with shared access to the settings.
    pub async fn read<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        let guard = self.state.lock().await;
        f(&guard)
    }

    /// Run `f` with exclusive access to the settings.
    pub async fn update<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        let mut guard = self.state.lock().await;
        f(&mut guard)
    }
}

impl<C> Clone for MainContext<C> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
