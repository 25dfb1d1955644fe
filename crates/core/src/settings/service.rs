//! Settings service

use std::str::FromStr;
use std::sync::Arc;

use baitulmal_domain::constants::storage_keys;
use baitulmal_domain::{
    format_currency, AppSettings, BaitulMalError, CurrencyCode, Language, Result, Theme,
};
use tracing::{info, warn};

use super::ports::SettingsStore;

/// A single preference, addressed by its storage key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    Currency,
    Language,
    Theme,
}

impl SettingKey {
    pub const ALL: [Self; 3] = [Self::Currency, Self::Language, Self::Theme];

    pub const fn storage_key(self) -> &'static str {
        match self {
            Self::Currency => storage_keys::CURRENCY,
            Self::Language => storage_keys::LANGUAGE,
            Self::Theme => storage_keys::THEME,
        }
    }
}

impl FromStr for SettingKey {
    type Err = BaitulMalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.storage_key().eq_ignore_ascii_case(s))
            .ok_or_else(|| BaitulMalError::InvalidInput(format!("unknown setting: {s}")))
    }
}

/// Reads and writes [`AppSettings`]
pub struct SettingsService {
    store: Arc<dyn SettingsStore>,
}

impl SettingsService {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Stored preferences; missing or unreadable values fall back to defaults
    pub fn load(&self) -> Result<AppSettings> {
        let defaults = AppSettings::default();
        Ok(AppSettings {
            currency: self.read(SettingKey::Currency)?.unwrap_or(defaults.currency),
            language: self.read(SettingKey::Language)?.unwrap_or(defaults.language),
            theme: self.read(SettingKey::Theme)?.unwrap_or(defaults.theme),
        })
    }

    pub fn save(&self, settings: &AppSettings) -> Result<()> {
        self.store.set(storage_keys::CURRENCY, settings.currency.as_str())?;
        self.store.set(storage_keys::LANGUAGE, settings.language.as_str())?;
        self.store.set(storage_keys::THEME, settings.theme.as_str())?;
        Ok(())
    }

    /// Change one preference from its textual form
    pub fn set(&self, key: SettingKey, value: &str) -> Result<AppSettings> {
        let mut settings = self.load()?;
        let invalid = BaitulMalError::InvalidInput;
        match key {
            SettingKey::Currency => settings.currency = value.parse().map_err(invalid)?,
            SettingKey::Language => settings.language = value.parse().map_err(invalid)?,
            SettingKey::Theme => settings.theme = value.parse().map_err(invalid)?,
        }
        self.save(&settings)?;
        info!(setting = key.storage_key(), value, "preference updated");
        Ok(settings)
    }

    /// `amount` in the preferred currency
    pub fn format_amount(&self, amount: f64) -> Result<String> {
        Ok(format_currency(amount, self.load()?.currency))
    }

    fn read<T>(&self, key: SettingKey) -> Result<Option<T>>
    where
        T: FromStr<Err = String>,
    {
        let Some(raw) = self.store.get(key.storage_key())? else {
            return Ok(None);
        };
        match raw.parse() {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!(setting = key.storage_key(), error = %err, "ignoring stored preference");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use parking_lot::Mutex;

    use super::*;

    #[derive(Default)]
    struct Memory(Mutex<HashMap<String, String>>);

    impl SettingsStore for Memory {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.0.lock().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.0.lock().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn defaults_when_nothing_stored() {
        let service = SettingsService::new(Arc::new(Memory::default()));
        let settings = service.load().unwrap();
        assert_eq!(settings.currency, CurrencyCode::Rsd);
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn garbage_values_fall_back() {
        let store = Arc::new(Memory::default());
        store.set(storage_keys::CURRENCY, "BAM").unwrap();
        store.set(storage_keys::LANGUAGE, "bs").unwrap();
        let settings = SettingsService::new(store).load().unwrap();
        assert_eq!(settings.currency, CurrencyCode::Rsd);
        assert_eq!(settings.language, Language::Bs);
    }

    #[test]
    fn set_persists_and_formats_in_new_currency() {
        let store = Arc::new(Memory::default());
        let service = SettingsService::new(store.clone());
        service.set("currency".parse().unwrap(), "usd").unwrap();
        assert_eq!(store.get(storage_keys::CURRENCY).unwrap().as_deref(), Some("USD"));
        assert_eq!(service.format_amount(1234.5).unwrap(), "$1,234.50");
    }

    #[test]
    fn rejects_unknown_key_and_value() {
        let service = SettingsService::new(Arc::new(Memory::default()));
        assert!("volume".parse::<SettingKey>().is_err());
        assert!(matches!(
            service.set(SettingKey::Theme, "neon"),
            Err(BaitulMalError::InvalidInput(_))
        ));
    }
}
