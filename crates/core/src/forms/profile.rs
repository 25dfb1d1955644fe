//! Create-user and edit-profile forms

use baitulmal_common::validation::{
    EmailValidator, StringValidator, ValidationResult, Validator,
};
use baitulmal_domain::{CreateUserRequest, EditUserRequest, UserRole};

use super::login::MIN_PASSWORD_LENGTH;
use super::patterns::USER_PHONE;

pub const MIN_PERSON_NAME_LENGTH: usize = 3;

fn check_name(
    validator: &mut Validator,
    field: &str,
    value: &str,
    required_key: &str,
    min_key: &str,
) {
    validator.ensure(!value.trim().is_empty(), field, required_key).validate_field(
        field,
        value,
        &StringValidator::new().min_length(MIN_PERSON_NAME_LENGTH).message(min_key),
    );
}

fn check_phone(validator: &mut Validator, value: &str) {
    validator.validate_field(
        "phoneNumber",
        value,
        &StringValidator::new().with_regex(&USER_PHONE).message("INVALID_PHONE_NUMBER"),
    );
}

/// New user, or a full profile update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub role: Option<UserRole>,
    pub password: String,
    pub confirm_password: String,
}

impl ProfileForm {
    pub fn validate(&self) -> ValidationResult<()> {
        let mut validator = Validator::new();
        check_name(
            &mut validator,
            "name",
            &self.name,
            "FIRST_NAME_REQUIRED",
            "FIRST_NAME_MIN_LENGTH_ERROR",
        );
        check_name(
            &mut validator,
            "lastName",
            &self.last_name,
            "LAST_NAME_REQUIRED",
            "LAST_NAME_MIN_LENGTH_ERROR",
        );
        validator.ensure(
            !self.phone_number.trim().is_empty(),
            "phoneNumber",
            "PHONE_NUMBER_REQUIRED",
        );
        check_phone(&mut validator, &self.phone_number);
        validator
            .ensure(!self.email.trim().is_empty(), "email", "EMAIL_REQUIRED")
            .validate_field(
                "email",
                self.email.as_str(),
                &EmailValidator::new().message("PLEASE_ENTER_VALID_EMAIL"),
            );

        let password_rule = StringValidator::new()
            .trim(false)
            .min_length(MIN_PASSWORD_LENGTH)
            .message("PASSWORD_MIN_LENGTH_ERROR");
        validator
            .validate_field("password", self.password.as_str(), &password_rule)
            .validate_field("confirmPassword", self.confirm_password.as_str(), &password_rule)
            .ensure(
                self.password == self.confirm_password,
                "confirmPassword",
                "PASSWORDS_DO_NOT_MATCH",
            );
        validator.finish()
    }

    pub fn into_request(self) -> ValidationResult<CreateUserRequest> {
        self.validate()?;
        Ok(CreateUserRequest {
            name: self.name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            role: self.role,
        })
    }
}

/// Partial profile edit; omitted fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditProfileForm {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub role: Option<UserRole>,
}

impl EditProfileForm {
    pub fn validate(&self) -> ValidationResult<()> {
        let mut validator = Validator::new();
        if let Some(name) = &self.name {
            check_name(
                &mut validator,
                "name",
                name,
                "FIRST_NAME_REQUIRED",
                "FIRST_NAME_MIN_LENGTH_ERROR",
            );
        }
        if let Some(last_name) = &self.last_name {
            check_name(
                &mut validator,
                "lastName",
                last_name,
                "LAST_NAME_REQUIRED",
                "LAST_NAME_MIN_LENGTH_ERROR",
            );
        }
        if let Some(phone) = &self.phone_number {
            check_phone(&mut validator, phone);
        }
        validator.finish()
    }

    pub fn into_request(self) -> ValidationResult<EditUserRequest> {
        self.validate()?;
        Ok(EditUserRequest {
            name: self.name.map(|n| n.trim().to_string()),
            last_name: self.last_name.map(|n| n.trim().to_string()),
            phone_number: self.phone_number.map(|p| p.trim().to_string()),
            role: self.role,
        })
    }
}
