//! Sectors

use serde::{Deserialize, Serialize};

use super::coordinator::Coordinator;
use super::entity::EntityMeta;
use super::project::Budget;

/// Project summary embedded in a sector payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorProject {
    #[serde(flatten)]
    pub entity: EntityMeta,
    pub name: String,
    #[serde(default)]
    pub assigned_to_sector_id: Option<String>,
    #[serde(default)]
    pub assigned_to_sector_name: Option<String>,
    #[serde(default)]
    pub current_coordinators: Vec<Coordinator>,
    #[serde(default)]
    pub budget: Option<Budget>,
}

/// Top-level area of work that groups projects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sector {
    #[serde(flatten)]
    pub entity: EntityMeta,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub projects: Vec<SectorProject>,
    #[serde(default)]
    pub current_coordinators: Vec<Coordinator>,
    #[serde(default)]
    pub budget: Option<Budget>,
}

impl Sector {
    pub fn id(&self) -> &str {
        &self.entity.id
    }
}

/// Body of `POST /sectors`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectorRequest {
    pub name: String,
    pub description: String,
    pub assigned_coordinator_ids: Vec<String>,
}

/// Response of `POST /sectors`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectorResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}
