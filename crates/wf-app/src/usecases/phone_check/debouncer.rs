use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::task::AbortHandle;
use tokio::time::{sleep_until, Instant};

/// Runs at most one delayed task at a time.
///
/// Scheduling replaces (aborts) the previously scheduled task, whether it is
/// still waiting or already running. Dropping the debouncer aborts it too.
#[derive(Default)]
pub struct Debouncer {
    handle: Mutex<Option<AbortHandle>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The delay counts from this call, not from when the task is first polled.
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let deadline = Instant::now() + delay;
        let join = tokio::spawn(async move {
            sleep_until(deadline).await;
            task.await;
        });
        let previous = self
            .handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(join.abort_handle());
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// Aborts the scheduled task. Returns whether one was still pending.
    pub fn cancel(&self) -> bool {
        let handle = self
            .handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match handle {
            Some(handle) => {
                let pending = !handle.is_finished();
                handle.abort();
                pending
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
