//! Supported currencies

use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/// ISO code of a supported currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CurrencyCode {
    #[default]
    #[serde(rename = "RSD")]
    Rsd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "USD")]
    Usd,
}

impl_domain_status_conversions!(CurrencyCode {
    Rsd => "RSD",
    Eur => "EUR",
    Usd => "USD",
});

/// Entry of the currency picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub id: &'static str,
    pub name: &'static str,
    pub code: CurrencyCode,
}

/// Currencies offered when recording a transaction; the first is the default
pub const CURRENCIES: [Currency; 3] = [
    Currency { id: "1", name: "Dinar", code: CurrencyCode::Rsd },
    Currency { id: "2", name: "Euro", code: CurrencyCode::Eur },
    Currency { id: "3", name: "Dollar", code: CurrencyCode::Usd },
];

impl Currency {
    /// Picker entry by display name
    pub fn by_name(name: &str) -> Option<Self> {
        CURRENCIES.iter().copied().find(|c| c.name == name)
    }

    /// The default selection
    pub const fn default_choice() -> Self {
        CURRENCIES[0]
    }
}
