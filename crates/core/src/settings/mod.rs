//! User preferences: currency, language and theme

pub mod ports;
pub mod service;

pub use ports::SettingsStore;
pub use service::{SettingKey, SettingsService};
