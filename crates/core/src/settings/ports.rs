//! Port interfaces for persisted preferences

use baitulmal_domain::Result;

/// String key-value store backing the preferences
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;
}
