//! Notifier that keeps every toast for later assertions

use std::sync::{Arc, Mutex};

use baitulmal_core::{Notifier, Toast};

#[derive(Default, Clone)]
pub struct RecordingNotifier {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }

    /// Titles of the titled toasts, oldest first
    pub fn titles(&self) -> Vec<String> {
        self.toasts().into_iter().filter_map(|toast| toast.title).collect()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts.lock().unwrap().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().unwrap().push(toast);
    }
}
