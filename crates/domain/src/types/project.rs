//! Projects and budgets

use serde::{Deserialize, Serialize};

use super::coordinator::Coordinator;
use super::entity::EntityMeta;
use crate::impl_domain_status_conversions;

/// Outcome reported for a project
///
/// Variant names keep the backend's spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectOutcomeType {
    Success,
    Failed,
    PartialSuccess,
    Postoponed,
    Paused,
    Stoped,
    Ongoing,
    #[default]
    NewlyCreated,
}

impl_domain_status_conversions!(ProjectOutcomeType {
    Success => "Success",
    Failed => "Failed",
    PartialSuccess => "PartialSuccess",
    Postoponed => "Postoponed",
    Paused => "Paused",
    Stoped => "Stoped",
    Ongoing => "Ongoing",
    NewlyCreated => "NewlyCreated",
});

/// Budget figures attached to a sector or project
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub budget_id: String,
    #[serde(default)]
    pub budget_name: String,
    #[serde(default)]
    pub assigned_amount: f64,
    #[serde(default)]
    pub unassigned_amount: f64,
    #[serde(default)]
    pub reserved_amount: f64,
    #[serde(default)]
    pub pending_amount: f64,
    #[serde(default)]
    pub spent_amount: f64,
}

/// A project within a sector
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(flatten)]
    pub entity: EntityMeta,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assigned_to_sector_id: Option<String>,
    #[serde(default)]
    pub assigned_to_sector_name: Option<String>,
    #[serde(default)]
    pub current_coordinators: Vec<Coordinator>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub outcome_type: ProjectOutcomeType,
}

impl Project {
    pub fn id(&self) -> &str {
        &self.entity.id
    }
}

/// Body of `POST /sectors/{sectorId}/projects`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sector_id: String,
    pub assigned_coordinator_ids: Vec<String>,
}

/// Body of `PUT /sectors/{sectorId}/projects/update/{projectId}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sector_id: Option<String>,
}

/// Response of the project edit endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditProjectResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
