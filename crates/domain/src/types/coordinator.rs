//! Coordinators assigned to sectors and projects
//!
//! The backend describes a coordinator in two shapes. Sector payloads carry
//! both an assignment `id` and the person's `userId`; project payloads carry
//! only `id`, which is the person. Both are decoded into one [`Coordinator`]
//! whose `person_id` always identifies the user.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::serde::flexible_datetime;

/// A user appointed to coordinate a sector or project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CoordinatorWire", into = "CoordinatorWire")]
pub struct Coordinator {
    /// Id of the coordinating user
    pub person_id: String,
    /// Id of the assignment record, when the payload exposed one
    pub assignment_id: Option<String>,
    pub name: String,
    pub email: String,
    pub appointed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CoordinatorWire {
    #[serde(default)]
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default, with = "flexible_datetime::option")]
    appointed_at: Option<DateTime<Utc>>,
}

impl From<CoordinatorWire> for Coordinator {
    fn from(wire: CoordinatorWire) -> Self {
        match wire.user_id.filter(|id| !id.is_empty()) {
            Some(user_id) => Self {
                person_id: user_id,
                assignment_id: Some(wire.id),
                name: wire.name,
                email: wire.email,
                appointed_at: wire.appointed_at,
            },
            None => Self {
                person_id: wire.id,
                assignment_id: None,
                name: wire.name,
                email: wire.email,
                appointed_at: wire.appointed_at,
            },
        }
    }
}

impl From<Coordinator> for CoordinatorWire {
    fn from(c: Coordinator) -> Self {
        match c.assignment_id {
            Some(assignment_id) => Self {
                id: assignment_id,
                user_id: Some(c.person_id),
                name: c.name,
                email: c.email,
                appointed_at: c.appointed_at,
            },
            None => Self {
                id: c.person_id,
                user_id: None,
                name: c.name,
                email: c.email,
                appointed_at: c.appointed_at,
            },
        }
    }
}

/// Body of `POST /organizationdomain/{id}/coordinations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddCoordinatorsRequest {
    pub user_ids: Vec<String>,
}

/// Edits made in the coordinator picker for one sector or project
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinatorChanges {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl CoordinatorChanges {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Final id list: current coordinators minus removed, plus added
    ///
    /// Order is current-first, then additions; duplicates are dropped.
    pub fn resolve(&self, current: &[Coordinator]) -> Vec<String> {
        let removed: BTreeSet<&str> = self.removed.iter().map(String::as_str).collect();
        let mut seen = BTreeSet::new();
        current
            .iter()
            .map(|c| c.person_id.as_str())
            .filter(|id| !removed.contains(id))
            .chain(self.added.iter().map(String::as_str))
            .filter(|id| seen.insert(*id))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinator(person: &str) -> Coordinator {
        Coordinator {
            person_id: person.into(),
            assignment_id: None,
            name: person.into(),
            email: format!("{person}@example.org"),
            appointed_at: None,
        }
    }

    #[test]
    fn sector_shape_uses_user_id_as_person() {
        let c: Coordinator = serde_json::from_str(
            r#"{"id":"assign-1","userId":"user-9","name":"Amina","email":"a@x.ba","appointedAt":"2024-01-05T00:00:00Z"}"#,
        )
        .expect("sector coordinator");
        assert_eq!(c.person_id, "user-9");
        assert_eq!(c.assignment_id.as_deref(), Some("assign-1"));
        assert!(c.appointed_at.is_some());
    }

    #[test]
    fn project_shape_uses_id_as_person() {
        let c: Coordinator = serde_json::from_str(
            r#"{"id":"user-3","name":"Haris","email":"h@x.ba","appointedAt":"2024-01-05T00:00:00"}"#,
        )
        .expect("project coordinator");
        assert_eq!(c.person_id, "user-3");
        assert!(c.assignment_id.is_none());
    }

    #[test]
    fn resolve_removes_then_adds() {
        let current = vec![coordinator("a"), coordinator("b"), coordinator("c")];
        let changes =
            CoordinatorChanges { added: vec!["d".into(), "a".into()], removed: vec!["b".into()] };
        assert_eq!(changes.resolve(&current), vec!["a", "c", "d"]);
    }

    #[test]
    fn request_body_uses_pascal_case() {
        let body = serde_json::to_value(AddCoordinatorsRequest { user_ids: vec!["u1".into()] })
            .expect("serializable");
        assert_eq!(body, serde_json::json!({ "UserIds": ["u1"] }));
    }
}
