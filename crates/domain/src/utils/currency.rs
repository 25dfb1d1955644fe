//! Locale-aware money formatting for the three supported currencies.
//!
//! | code | locale  | example         |
//! |------|---------|-----------------|
//! | RSD  | `sr-RS` | `1.234,56 RSD`  |
//! | EUR  | `de-DE` | `1.234,56 €`    |
//! | USD  | `en-US` | `$1,234.56`     |
//!
//! The space before a trailing symbol is a no-break space, as browsers emit.

use crate::types::CurrencyCode;

const NBSP: char = '\u{a0}';

/// Format `amount` with two fraction digits in the currency's locale
pub fn format_currency(amount: f64, code: CurrencyCode) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };

    match code {
        CurrencyCode::Usd => format!("{sign}${}.{fraction}", group(whole, ',')),
        CurrencyCode::Eur => format!("{sign}{},{fraction}{NBSP}€", group(whole, '.')),
        CurrencyCode::Rsd => format!("{sign}{},{fraction}{NBSP}RSD", group(whole, '.')),
    }
}

fn group(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
