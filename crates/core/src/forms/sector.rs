//! Create-sector form

use baitulmal_common::validation::{StringValidator, ValidationResult, Validator};
use baitulmal_domain::CreateSectorRequest;

pub const MIN_SECTOR_NAME_LENGTH: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectorForm {
    pub name: String,
    pub description: String,
    pub assigned_coordinator_ids: Vec<String>,
}

impl SectorForm {
    pub fn validate(&self) -> ValidationResult<()> {
        let mut validator = Validator::new();
        validator
            .ensure(!self.name.trim().is_empty(), "name", "SECTOR_NAME_REQUIRED")
            .validate_field(
                "name",
                self.name.as_str(),
                &StringValidator::new()
                    .min_length(MIN_SECTOR_NAME_LENGTH)
                    .message("SECTOR_NAME_MIN_LENGTH_ERROR"),
            );
        validator.finish()
    }

    /// Validate and build the request body
    pub fn into_request(self) -> ValidationResult<CreateSectorRequest> {
        self.validate()?;
        Ok(CreateSectorRequest {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            assigned_coordinator_ids: self.assigned_coordinator_ids,
        })
    }
}
