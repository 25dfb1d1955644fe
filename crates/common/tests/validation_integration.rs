//! Integration tests for the validation framework

#![cfg(feature = "foundation")]

use baitulmal_common::validation::{
    CustomValidator, EmailValidator, FieldValidator, StringValidator, Validator,
};

/// Verifies that a multi-field form collects one message per failing field.
#[test]
fn test_form_collects_field_errors() {
    let name = StringValidator::new().min_length(3).message("Name must have at least 3 characters");
    let email = EmailValidator::new();

    let mut validator = Validator::new();
    validator
        .validate_field("name", "Al", &name)
        .validate_field("email", "not-an-email", &email)
        .validate_field("description", "anything", &StringValidator::new());

    let errors = validator.finish().expect_err("two fields are invalid");
    assert_eq!(errors.error_count(), 2);
    assert_eq!(errors.first_message("name"), Some("Name must have at least 3 characters"));
    assert_eq!(errors.first_message("email"), Some("Invalid email format"));
}

/// Verifies the phone pattern used for donors accepts common layouts.
#[test]
fn test_phone_pattern_layouts() {
    let phone = StringValidator::new()
        .pattern(r"^\+?[0-9]{3}[-\s]?[0-9]{3}[-\s]?[0-9]{3,6}$")
        .expect("pattern compiles")
        .message("Invalid phone number format");

    for ok in ["+387 061 123", "387-061-1234", "061123456", "+381601234567"] {
        assert!(FieldValidator::<str>::validate(&phone, ok).is_ok(), "{ok} should be accepted");
    }
    assert!(FieldValidator::<str>::validate(&phone, "12-34").is_err());
}

/// Verifies closures can express cross-field rules.
#[test]
fn test_custom_validator() {
    let matches = CustomValidator::new(|pair: &(String, String)| {
        if pair.0 == pair.1 {
            Ok(())
        } else {
            Err("Passwords must match".to_string())
        }
    });

    assert!(matches.validate(&("secret1".to_string(), "secret1".to_string())).is_ok());
    assert_eq!(
        matches.validate(&("secret1".to_string(), "secret2".to_string())),
        Err("Passwords must match".to_string())
    );
}
