//! Login form

use baitulmal_common::validation::{
    EmailValidator, StringValidator, ValidationResult, Validator,
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> ValidationResult<()> {
        let mut validator = Validator::new();
        validator
            .validate_field(
                "email",
                self.email.as_str(),
                &EmailValidator::new().message("PLEASE_ENTER_VALID_EMAIL"),
            )
            .validate_field(
                "password",
                self.password.as_str(),
                &StringValidator::new()
                    .trim(false)
                    .min_length(MIN_PASSWORD_LENGTH)
                    .message("PASSWORD_MIN_LENGTH_ERROR"),
            );
        validator.finish()
    }
}
