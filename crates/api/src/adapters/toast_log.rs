//! Toast sink for a terminal front end

use baitulmal_core::{Notifier, Toast};
use parking_lot::Mutex;
use tracing::{info, warn};

/// Logs every toast and keeps it until the caller drains it
///
/// The CLI prints drained toasts to stderr after each command.
#[derive(Debug, Default)]
pub struct ToastLog {
    pending: Mutex<Vec<Toast>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every toast raised since the last drain, oldest first
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.pending.lock())
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

impl Notifier for ToastLog {
    fn notify(&self, toast: Toast) {
        let title = toast.title.as_deref().unwrap_or_default();
        if toast.is_destructive() {
            warn!(title, description = %toast.description, "toast");
        } else {
            info!(title, description = %toast.description, "toast");
        }
        self.pending.lock().push(toast);
    }
}
