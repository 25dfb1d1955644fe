//! Transaction draft and its schema
//!
//! The draft holds what the user typed across the wizard's steps. Field
//! names in validation errors use the backend's camelCase spelling so a
//! front end can place messages next to the matching input.

use baitulmal_common::validation::{
    DecimalPlacesValidator, EmailValidator, RangeValidator, StringValidator, ValidationError,
    ValidationResult, Validator,
};
use baitulmal_domain::constants::ZERO_GUID;
use baitulmal_domain::{CreateTransactionRequest, Currency, Donor};
use chrono::NaiveDate;

use crate::forms::patterns::DONOR_PHONE;

/// Field names used in validation errors
pub mod fields {
    pub const AMOUNT: &str = "amount";
    pub const PROMISED_AMOUNT: &str = "promisedAmount";
    pub const PROJECT_ID: &str = "projectId";
    pub const CURRENCY_NAME: &str = "currencyName";
    pub const CURRENCY_CODE: &str = "currencyCode";
    pub const DUE_DATE: &str = "dueDate";
    pub const DONOR_NAME: &str = "donorName";
    pub const DONOR_LAST_NAME: &str = "donorLastName";
    pub const DONOR_PHONE_NUMBER: &str = "donorPhoneNumber";
    pub const DONOR_EMAIL: &str = "donorEmail";
    pub const DONOR_DESCRIPTION: &str = "donorDescription";
    pub const TRANSACTION_CREATORS_NOTE: &str = "transactionCreatorsNote";
    /// Form-level errors not tied to one input
    pub const ROOT: &str = "root";
}

pub const AMOUNTS_REQUIRED: &str = "Either Amount or Promised Amount must be filled";

/// Values used to pre-fill a new draft; unset or empty entries keep the
/// defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftSeed {
    pub amount: Option<f64>,
    pub promised_amount: Option<f64>,
    pub project_id: Option<String>,
    pub currency_name: Option<String>,
    pub currency_code: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub donor_name: Option<String>,
    pub donor_last_name: Option<String>,
    pub donor_phone_number: Option<String>,
    pub donor_email: Option<String>,
    pub donor_description: Option<String>,
    pub transaction_creators_note: Option<String>,
}

/// In-progress transaction
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub amount: Option<f64>,
    pub promised_amount: Option<f64>,
    pub project_id: Option<String>,
    pub currency_name: String,
    pub currency_code: String,
    pub due_date: Option<NaiveDate>,
    pub donor_name: String,
    pub donor_last_name: String,
    pub donor_phone_number: String,
    pub donor_email: String,
    pub donor_id: Option<String>,
    pub donor_description: String,
    pub transaction_creators_note: String,
}

impl Default for TransactionDraft {
    fn default() -> Self {
        let currency = Currency::default_choice();
        Self {
            amount: Some(0.0),
            promised_amount: Some(0.0),
            project_id: None,
            currency_name: currency.name.to_string(),
            currency_code: currency.code.to_string(),
            due_date: None,
            donor_name: String::new(),
            donor_last_name: String::new(),
            donor_phone_number: String::new(),
            donor_email: String::new(),
            donor_id: None,
            donor_description: String::new(),
            transaction_creators_note: String::new(),
        }
    }
}

fn pick(seed: &Option<String>, default: String) -> String {
    seed.as_ref().filter(|value| !value.is_empty()).cloned().unwrap_or(default)
}

fn blank_to_none(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn is_positive(value: Option<f64>) -> bool {
    value.is_some_and(|v| v > 0.0)
}

impl TransactionDraft {
    /// Defaults overridden by whatever `seed` provides
    pub fn seeded(seed: &DraftSeed) -> Self {
        let defaults = Self::default();
        Self {
            amount: seed.amount.filter(|v| *v != 0.0).or(defaults.amount),
            promised_amount: seed
                .promised_amount
                .filter(|v| *v != 0.0)
                .or(defaults.promised_amount),
            project_id: seed.project_id.clone().filter(|id| !id.is_empty()),
            currency_name: pick(&seed.currency_name, defaults.currency_name),
            currency_code: pick(&seed.currency_code, defaults.currency_code),
            due_date: seed.due_date,
            donor_name: pick(&seed.donor_name, defaults.donor_name),
            donor_last_name: pick(&seed.donor_last_name, defaults.donor_last_name),
            donor_phone_number: pick(&seed.donor_phone_number, defaults.donor_phone_number),
            donor_email: pick(&seed.donor_email, defaults.donor_email),
            donor_id: None,
            donor_description: pick(&seed.donor_description, defaults.donor_description),
            transaction_creators_note: pick(
                &seed.transaction_creators_note,
                defaults.transaction_creators_note,
            ),
        }
    }

    /// At least one of the two amounts is positive
    pub fn has_valid_amounts(&self) -> bool {
        is_positive(self.amount) || is_positive(self.promised_amount)
    }

    /// A pledge needs a reachable donor
    pub fn requires_donor_contact(&self) -> bool {
        is_positive(self.promised_amount)
    }

    /// Replace the "no project" sentinel with an absent project
    pub fn normalize_project(&mut self) {
        if self.project_id.as_deref().is_some_and(|id| id == ZERO_GUID || id.is_empty()) {
            self.project_id = None;
        }
    }

    /// Copy a known donor's identity and contact details
    pub fn fill_from_donor(&mut self, donor: &Donor) {
        self.donor_email = donor.email.clone();
        self.donor_phone_number = donor.phone_number.clone();
        self.donor_name = donor.name.clone();
        self.donor_last_name = donor.last_name.clone();
        self.donor_id = Some(donor.id().to_string());
    }

    /// Run the whole schema, collecting at most one message per field
    pub fn check(&self) -> ValidationError {
        let mut validator = Validator::new();

        if let Some(amount) = self.amount {
            validator.validate_field(
                fields::AMOUNT,
                &amount,
                &DecimalPlacesValidator::new(2)
                    .message("Amount must have at most 2 decimal places"),
            );
        }
        if let Some(promised) = self.promised_amount {
            validator
                .validate_field(
                    fields::PROMISED_AMOUNT,
                    &promised,
                    &RangeValidator::empty().min(0.0).message("Promised amount cannot be negative"),
                )
                .validate_field(
                    fields::PROMISED_AMOUNT,
                    &promised,
                    &DecimalPlacesValidator::new(2)
                        .message("Promised amount must have at most 2 decimal places"),
                );
        }

        let required =
            |message: &str| StringValidator::new().trim(false).not_empty().message(message);
        validator
            .validate_field(
                fields::CURRENCY_NAME,
                self.currency_name.as_str(),
                &required("Currency name is required"),
            )
            .validate_field(
                fields::CURRENCY_CODE,
                self.currency_code.as_str(),
                &required("Currency code is required"),
            )
            .validate_field(
                fields::DONOR_PHONE_NUMBER,
                self.donor_phone_number.as_str(),
                &StringValidator::new()
                    .trim(false)
                    .with_regex(&DONOR_PHONE)
                    .or_empty()
                    .message("Invalid phone number format"),
            )
            .validate_field(
                fields::DONOR_EMAIL,
                self.donor_email.as_str(),
                &EmailValidator::new().or_empty().message("Invalid email"),
            );

        validator.ensure(self.has_valid_amounts(), fields::AMOUNT, AMOUNTS_REQUIRED);

        if self.requires_donor_contact() {
            if self.donor_phone_number.is_empty() {
                validator.add_error(
                    fields::DONOR_PHONE_NUMBER,
                    "Phone number is required when promised amount is set",
                );
            } else if !DONOR_PHONE.is_match(&self.donor_phone_number) {
                validator.add_error(fields::DONOR_PHONE_NUMBER, "Invalid phone number format");
            }

            if self.donor_email.is_empty() {
                validator.add_error(
                    fields::DONOR_EMAIL,
                    "Email is required when promised amount is set",
                );
            } else if !self.donor_email.contains('@') {
                validator.add_error(fields::DONOR_EMAIL, "Invalid email format");
            }
        }

        validator.into_errors()
    }

    /// Schema errors restricted to `names`
    pub fn check_fields(&self, names: &[&str]) -> ValidationResult<()> {
        let mut errors = self.check();
        errors.retain_fields(names);
        errors.into_result()
    }

    /// Request body: empty optional text becomes `null`, the "no project"
    /// sentinel becomes `null`, amounts are rounded to cents.
    pub fn to_request(&self) -> CreateTransactionRequest {
        let mut normalized = self.clone();
        normalized.normalize_project();
        CreateTransactionRequest {
            amount: self.amount.map(round_cents),
            promised_amount: self.promised_amount.map(round_cents),
            project_id: normalized.project_id,
            currency_name: self.currency_name.clone(),
            currency_code: self.currency_code.clone(),
            due_date: self.due_date,
            donor_id: self.donor_id.clone().filter(|id| !id.is_empty()),
            donor_name: blank_to_none(&self.donor_name),
            donor_last_name: blank_to_none(&self.donor_last_name),
            donor_phone_number: blank_to_none(&self.donor_phone_number),
            donor_email: blank_to_none(&self.donor_email),
            donor_description: blank_to_none(&self.donor_description),
            transaction_creators_note: blank_to_none(&self.transaction_creators_note),
        }
    }
}
