//! Shared test helpers for `baitulmal-core` integration tests.
//!
//! In-memory gateways, stores and a recording notifier so the flow tests can
//! focus on behaviour instead of wiring.

#![allow(dead_code)]

pub mod gateways;
pub mod notifier;
pub mod stores;

use std::sync::Arc;

use baitulmal_core::QueryClient;

pub use notifier::RecordingNotifier;

/// Query client whose toasts land in the returned recorder
pub fn query_client() -> (QueryClient, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    (QueryClient::new(notifier.clone()), notifier)
}
