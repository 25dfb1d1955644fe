//! Compiled input patterns shared by form schemas

use once_cell::sync::Lazy;
use regex::Regex;

/// Donor phone: three groups of digits with optional separators
pub static DONOR_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9]{3}[-\s]?[0-9]{3}[-\s]?[0-9]{3,6}$")
        .expect("DONOR_PHONE pattern is valid")
});

/// User phone: international or leading-zero local number, or empty
pub static USER_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+]?[1-9]|0)\d{7,14}$|^$").expect("USER_PHONE pattern is valid")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn donor_phone_accepts_grouped_numbers() {
        for phone in ["+387 061 123", "387-061-1234", "061123456", "+381601234567"] {
            assert!(DONOR_PHONE.is_match(phone), "{phone} should match");
        }
        for phone in ["12-34", "phone", "+387 61 123 456"] {
            assert!(!DONOR_PHONE.is_match(phone), "{phone} should not match");
        }
    }

    #[test]
    fn user_phone_accepts_local_and_international() {
        assert!(USER_PHONE.is_match("061234567"));
        assert!(USER_PHONE.is_match("+38761234567"));
        assert!(USER_PHONE.is_match(""));
        assert!(!USER_PHONE.is_match("+0123"));
        assert!(!USER_PHONE.is_match("12345"));
    }
}
