//! Cancellable delayed invocation.
//!
//! A [`Debouncer`] runs only the most recent of a burst of scheduled actions:
//! scheduling a new action cancels the pending one, and dropping the
//! debouncer cancels whatever is still waiting. Actions run on the tokio
//! runtime that was current when they were scheduled.

use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// Default delay used by search inputs.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Delays an action until no newer action has been scheduled for `delay`.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<CancellationToken>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: Mutex::new(None) }
    }

    /// Quiet period before an action fires
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `action`, superseding any pending one.
    ///
    /// The returned handle resolves to `true` when the action ran and
    /// `false` when it was cancelled. Must be called within a tokio runtime.
    pub fn schedule<F>(&self, action: F) -> JoinHandle<bool>
    where
        F: FnOnce() + Send + 'static,
    {
        let token = CancellationToken::new();
        if let Some(previous) = self.pending.lock().replace(token.clone()) {
            previous.cancel();
        }

        let delay = self.delay;
        let fired = token.clone();
        tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {
                    trace!("debounced action superseded");
                    false
                }
                () = tokio::time::sleep(delay) => {
                    action();
                    fired.cancel();
                    true
                }
            }
        })
    }

    /// Cancel the pending action, if any
    pub fn cancel(&self) {
        if let Some(token) = self.pending.lock().take() {
            token.cancel();
        }
    }

    /// Whether an action is waiting to fire
    pub fn is_pending(&self) -> bool {
        self.pending.lock().as_ref().is_some_and(|token| !token.is_cancelled())
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
