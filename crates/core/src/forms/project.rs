//! Create- and edit-project forms

use baitulmal_common::validation::{StringValidator, ValidationResult, Validator};
use baitulmal_domain::{CreateProjectRequest, EditProjectRequest};

use super::non_blank;

pub const MIN_PROJECT_NAME_LENGTH: usize = 3;

fn name_rule() -> StringValidator {
    StringValidator::new()
        .min_length(MIN_PROJECT_NAME_LENGTH)
        .message("PROJECT_NAME_MIN_LENGTH_ERROR")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub name: String,
    pub description: String,
    pub sector_id: String,
    pub assigned_coordinator_ids: Vec<String>,
}

impl ProjectForm {
    pub fn validate(&self) -> ValidationResult<()> {
        let mut validator = Validator::new();
        validator
            .ensure(!self.name.trim().is_empty(), "name", "PROJECT_NAME_REQUIRED")
            .validate_field("name", self.name.as_str(), &name_rule())
            .ensure(!self.sector_id.trim().is_empty(), "sectorId", "SECTOR_REQUIRED");
        validator.finish()
    }

    pub fn into_request(self) -> ValidationResult<CreateProjectRequest> {
        self.validate()?;
        Ok(CreateProjectRequest {
            name: self.name.trim().to_string(),
            description: non_blank(&self.description),
            sector_id: self.sector_id,
            assigned_coordinator_ids: self.assigned_coordinator_ids,
        })
    }
}

/// Edit form; the project keeps its sector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditProjectForm {
    pub name: String,
    pub description: String,
}

impl EditProjectForm {
    pub fn validate(&self) -> ValidationResult<()> {
        let mut validator = Validator::new();
        validator.validate_field("name", self.name.as_str(), &name_rule());
        validator.finish()
    }

    pub fn into_request(self, sector_id: &str) -> ValidationResult<EditProjectRequest> {
        self.validate()?;
        Ok(EditProjectRequest {
            name: Some(self.name.trim().to_string()),
            description: non_blank(&self.description),
            sector_id: Some(sector_id.to_string()),
        })
    }
}
