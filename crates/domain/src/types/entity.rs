//! Bookkeeping fields shared by every persisted entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::serde::flexible_datetime;

/// Identity and soft-delete metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMeta {
    pub id: String,
    #[serde(default, with = "flexible_datetime::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime::option")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime::option")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl EntityMeta {
    /// Metadata for an entity known only by id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Self::default() }
    }
}
