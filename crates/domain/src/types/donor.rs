//! Donors

use serde::{Deserialize, Serialize};

use super::entity::EntityMeta;

/// A person who has given or pledged funds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Donor {
    #[serde(flatten)]
    pub entity: EntityMeta,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub description: String,
}

impl Donor {
    pub fn id(&self) -> &str {
        &self.entity.id
    }

    /// "Name LastName", trimmed
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name).trim().to_string()
    }
}
