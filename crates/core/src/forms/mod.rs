//! Form schemas
//!
//! Each form is a plain struct of the values a user typed plus a `validate`
//! method returning field-level errors. Messages are translation keys.

use baitulmal_common::validation::ValidationError;
use baitulmal_domain::BaitulMalError;

pub mod login;
pub mod patterns;
pub mod profile;
pub mod project;
pub mod sector;

pub use login::LoginForm;
pub use profile::{EditProfileForm, ProfileForm};
pub use project::{EditProjectForm, ProjectForm};
pub use sector::SectorForm;

/// `Some(trimmed)` for non-blank input, `None` otherwise
pub(crate) fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Surface form errors through the crate-wide error type
pub(crate) fn rejected(err: ValidationError) -> BaitulMalError {
    BaitulMalError::Validation(err.to_string())
}
