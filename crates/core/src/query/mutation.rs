//! Side effects attached to a backend write

use baitulmal_common::cache::QueryKey;

use crate::notifications::Toast;

/// Cache entries to drop after a successful write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invalidation {
    /// Every entry of one operation
    Operation(String),
    /// One exact entry
    Key(QueryKey),
}

/// Description of a write: what it invalidates and what it tells the user
#[derive(Debug, Clone)]
pub struct Mutation {
    name: &'static str,
    invalidations: Vec<Invalidation>,
    success_toast: Option<Toast>,
    error_toast: Option<Toast>,
}

impl Mutation {
    /// Write named `name` in logs, with no side effects yet
    pub fn new(name: &'static str) -> Self {
        Self { name, invalidations: Vec::new(), success_toast: None, error_toast: None }
    }

    /// Drop every cached entry of `operation` on success
    pub fn invalidates(mut self, operation: impl Into<String>) -> Self {
        self.invalidations.push(Invalidation::Operation(operation.into()));
        self
    }

    /// Drop one exact cached entry on success
    pub fn invalidates_key(mut self, key: QueryKey) -> Self {
        self.invalidations.push(Invalidation::Key(key));
        self
    }

    /// Toast raised after the invalidations are applied
    pub fn success_toast(mut self, toast: Toast) -> Self {
        self.success_toast = Some(toast);
        self
    }

    /// Toast raised after the global error toast
    pub fn error_toast(mut self, toast: Toast) -> Self {
        self.error_toast = Some(toast);
        self
    }

    /// Name used in logs
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invalidations in the order they were added
    pub fn invalidations(&self) -> &[Invalidation] {
        &self.invalidations
    }

    pub(crate) fn success(&self) -> Option<&Toast> {
        self.success_toast.as_ref()
    }

    pub(crate) fn failure(&self) -> Option<&Toast> {
        self.error_toast.as_ref()
    }
}
