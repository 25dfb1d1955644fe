//! Field-level validation framework used by form schemas.
//!
//! Validators check a single value and return a human-readable message on
//! failure. [`Validator`] runs several of them against named fields and
//! collects every failure into one [`ValidationError`], which is what form
//! controllers surface next to inputs.

use std::collections::HashMap;
use std::fmt;

mod validators;

pub use validators::{
    CustomValidator, DecimalPlacesValidator, EmailValidator, FieldValidator, RangeValidator,
    StringValidator,
};

/// Type alias for validation results
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error with detailed field-level errors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create a new, empty validation error
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Create with a single field error
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add_field_error(field, message);
        err
    }

    /// Add a field-level error
    pub fn add_field_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Add a field error with a machine-readable code
    pub fn add_error_with_code(
        &mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) {
        self.errors.push(FieldError::new(field, message).with_code(code));
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get error count
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Get errors for a specific field
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// First message recorded for `field`, if any
    pub fn first_message(&self, field: &str) -> Option<&str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    /// Whether any error is attached to `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Keep only errors whose field is in `fields`
    pub fn retain_fields(&mut self, fields: &[&str]) {
        self.errors.retain(|e| fields.contains(&e.field.as_str()));
    }

    /// Merge another validation error into this one
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    pub fn into_result(self) -> ValidationResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "Validation error with no specific field errors"),
            [single] => write!(f, "Validation failed: {}", single.message),
            many => {
                write!(f, "Validation failed with {} errors: ", many.len())?;
                for (i, error) in many.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}: {}", error.field, error.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Individual field error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: Option<String>,
    pub metadata: HashMap<String, String>,
}

impl FieldError {
    /// Create a new field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into(), code: None, metadata: HashMap::new() }
    }

    /// Add metadata to the error
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Set error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

/// Collects failures across several fields.
///
/// Only the first failure per field is kept, mirroring how a form shows one
/// message under each input.
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationError,
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error unless the field already has one
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        if !self.errors.has_field(&field) {
            self.errors.add_field_error(field, message);
        }
    }

    /// Validate a field with a specific validator
    pub fn validate_field<T, V>(&mut self, field: &str, value: &T, validator: &V) -> &mut Self
    where
        T: ?Sized,
        V: FieldValidator<T> + ?Sized,
    {
        if let Err(message) = validator.validate(value) {
            self.add_error(field, message);
        }
        self
    }

    /// Record an error when `condition` is false
    pub fn ensure(
        &mut self,
        condition: bool,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        if !condition {
            self.add_error(field, message);
        }
        self
    }

    /// Whether `field` already carries an error
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.has_field(field)
    }

    /// Finish validation
    pub fn finish(self) -> ValidationResult<()> {
        self.errors.into_result()
    }

    /// Consume and return the collected errors, possibly empty
    pub fn into_errors(self) -> ValidationError {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Validates that only the first error per field is kept.
    ///
    /// Assertions:
    /// - A second message for the same field is dropped
    /// - Distinct fields each keep their message
    #[test]
    fn validator_keeps_first_error_per_field() {
        let mut validator = Validator::new();
        validator.add_error("name", "first");
        validator.add_error("name", "second");
        validator.add_error("email", "bad email");

        let errors = validator.into_errors();
        assert_eq!(errors.error_count(), 2);
        assert_eq!(errors.first_message("name"), Some("first"));
        assert_eq!(errors.first_message("email"), Some("bad email"));
    }

    #[test]
    fn empty_error_converts_to_ok() {
        assert!(ValidationError::new().into_result().is_ok());
        assert!(ValidationError::field("x", "y").into_result().is_err());
    }

    #[test]
    fn retain_fields_filters_other_fields() {
        let mut errors = ValidationError::field("currencyName", "required");
        errors.add_field_error("donorEmail", "required");

        errors.retain_fields(&["currencyName"]);

        assert_eq!(errors.error_count(), 1);
        assert!(errors.has_field("currencyName"));
    }

    #[test]
    fn display_lists_every_field_when_many() {
        let mut errors = ValidationError::field("a", "one");
        errors.add_field_error("b", "two");
        assert_eq!(errors.to_string(), "Validation failed with 2 errors: a: one; b: two");
        assert_eq!(ValidationError::field("a", "one").to_string(), "Validation failed: one");
    }
}
