// Field Validators - Reusable validation components
use std::fmt::Display;

use once_cell::sync::Lazy;

/// Type alias for a custom validation function (clippy::type_complexity)
type CustomValidationFn<T> = Box<dyn Fn(&T) -> Result<(), String> + Send + Sync>;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Range validator for numeric types
#[derive(Debug, Clone)]
pub struct RangeValidator<T> {
    min: Option<T>,
    max: Option<T>,
    message: Option<String>,
}

impl<T> Default for RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    /// Create a new range validator with no constraints
    pub fn empty() -> Self {
        Self { min: None, max: None, message: None }
    }

    /// Create a new range validator with min and max values
    pub fn new(min: T, max: T) -> Self {
        Self { min: Some(min), max: Some(max), message: None }
    }

    /// Set minimum value
    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    /// Set maximum value
    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }

    /// Replace the default failure message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn fail(&self, default: String) -> Result<(), String> {
        Err(self.message.clone().unwrap_or(default))
    }
}

impl<T> FieldValidator<T> for RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    fn validate(&self, value: &T) -> Result<(), String> {
        if let Some(ref min) = self.min {
            if value < min {
                return self.fail(format!("Value must be at least {min}"));
            }
        }

        if let Some(ref max) = self.max {
            if value > max {
                return self.fail(format!("Value must not exceed {max}"));
            }
        }

        Ok(())
    }
}

/// Rejects numbers with more fractional digits than allowed.
#[derive(Debug, Clone)]
pub struct DecimalPlacesValidator {
    places: u32,
    message: Option<String>,
}

impl DecimalPlacesValidator {
    /// Allow at most `places` digits after the decimal point
    pub fn new(places: u32) -> Self {
        Self { places, message: None }
    }

    /// Replace the default failure message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl FieldValidator<f64> for DecimalPlacesValidator {
    fn validate(&self, value: &f64) -> Result<(), String> {
        if !value.is_finite() {
            return Err("Value must be a finite number".to_string());
        }
        let scale = 10_f64.powi(i32::try_from(self.places).unwrap_or(i32::MAX));
        let scaled = value * scale;
        if (scaled - scaled.round()).abs() > 1e-6 {
            return Err(self
                .message
                .clone()
                .unwrap_or_else(|| format!("At most {} decimal places allowed", self.places)));
        }
        Ok(())
    }
}

/// String validator with various constraints
#[derive(Debug, Clone)]
pub struct StringValidator {
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<regex::Regex>,
    not_empty: bool,
    allow_empty: bool,
    trim: bool,
    message: Option<String>,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringValidator {
    /// Create a new string validator
    pub fn new() -> Self {
        Self {
            min_length: None,
            max_length: None,
            pattern: None,
            not_empty: false,
            allow_empty: false,
            trim: true,
            message: None,
        }
    }

    /// Require non-empty string
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Accept the empty string even when other constraints would reject it
    pub fn or_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Set minimum length in characters
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Set maximum length in characters
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set pattern to match
    pub fn pattern(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.pattern = Some(regex::Regex::new(pattern)?);
        Ok(self)
    }

    /// Set pattern from an already compiled regex
    pub fn with_regex(mut self, regex: &regex::Regex) -> Self {
        self.pattern = Some(regex.clone());
        self
    }

    /// Set whether to trim before validation
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Replace every default failure message with `message`
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn fail(&self, default: String) -> Result<(), String> {
        Err(self.message.clone().unwrap_or(default))
    }
}

impl FieldValidator<str> for StringValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let val = if self.trim { value.trim() } else { value };

        if val.is_empty() && self.allow_empty {
            return Ok(());
        }

        if self.not_empty && val.is_empty() {
            return self.fail("Value cannot be empty".to_string());
        }

        let length = val.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return self.fail(format!("Length must be at least {min} characters"));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return self.fail(format!("Length must not exceed {max} characters"));
            }
        }

        if let Some(ref pattern) = self.pattern {
            if !pattern.is_match(val) {
                return self.fail(format!("Value must match pattern: {}", pattern.as_str()));
            }
        }

        Ok(())
    }
}

impl FieldValidator<String> for StringValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

/// Custom validator that takes a closure
pub struct CustomValidator<T> {
    validator: CustomValidationFn<T>,
}

impl<T> std::fmt::Debug for CustomValidator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomValidator").field("validator", &"<closure>").finish()
    }
}

impl<T> CustomValidator<T> {
    /// Create a new custom validator
    pub fn new<F>(validator: F) -> Self
    where
        F: Fn(&T) -> Result<(), String> + Send + Sync + 'static,
    {
        Self { validator: Box::new(validator) }
    }
}

impl<T> FieldValidator<T> for CustomValidator<T> {
    fn validate(&self, value: &T) -> Result<(), String> {
        (self.validator)(value)
    }
}

/// Static email regex pattern compiled once at first use
static EMAIL_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX pattern is valid and well-formed")
});

/// Email validator
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
    allow_empty: bool,
    message: Option<String>,
}

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept the empty string
    pub fn or_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Replace the default failure message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl FieldValidator<str> for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.is_empty() && self.allow_empty {
            return Ok(());
        }
        if !EMAIL_REGEX.is_match(value) {
            return Err(self.message.clone().unwrap_or_else(|| "Invalid email format".to_string()));
        }

        Ok(())
    }
}

impl FieldValidator<String> for EmailValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        FieldValidator::<str>::validate(self, value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_validator_counts_characters_not_bytes() {
        let validator = StringValidator::new().min_length(3);
        assert!(validator.validate("Ćiš").is_ok());
        assert!(validator.validate("Ći").is_err());
    }

    #[test]
    fn string_validator_custom_message_overrides_defaults() {
        let validator = StringValidator::new().not_empty().message("Currency name is required");
        assert_eq!(validator.validate("  "), Err("Currency name is required".to_string()));
    }

    #[test]
    fn or_empty_skips_pattern_for_blank_input() {
        let validator = StringValidator::new().pattern(r"^\d+$").map(StringValidator::or_empty);
        let validator = validator.expect("pattern compiles");
        assert!(validator.validate("").is_ok());
        assert!(validator.validate("123").is_ok());
        assert!(validator.validate("abc").is_err());
    }

    #[test]
    fn decimal_places_rejects_third_digit() {
        let validator = DecimalPlacesValidator::new(2);
        assert!(validator.validate(&10.25).is_ok());
        assert!(validator.validate(&0.1).is_ok());
        assert!(validator.validate(&10.255).is_err());
        assert!(validator.validate(&f64::NAN).is_err());
    }

    #[test]
    fn range_validator_uses_custom_message() {
        let validator = RangeValidator::empty().min(0.0).message("Must be non-negative");
        assert_eq!(validator.validate(&-1.0), Err("Must be non-negative".to_string()));
        assert!(validator.validate(&0.0).is_ok());
    }

    #[test]
    fn email_validator_or_empty() {
        assert!(EmailValidator::new().or_empty().validate("").is_ok());
        assert!(EmailValidator::new().validate("").is_err());
        assert!(EmailValidator::new().validate("donor@example.org").is_ok());
        assert!(EmailValidator::new().validate("donor.example.org").is_err());
    }
}
