//! User interface preferences

use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;
use crate::impl_domain_status_conversions;

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Bs,
}

impl_domain_status_conversions!(Language {
    En => "en",
    Bs => "bs",
});

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

impl_domain_status_conversions!(Theme {
    Light => "light",
    Dark => "dark",
    System => "system",
});

/// Persisted preferences; defaults are RSD, English, light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    pub currency: CurrencyCode,
    pub language: Language,
    pub theme: Theme,
}
