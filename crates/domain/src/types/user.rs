//! Users, roles and the signed-in session

use serde::{Deserialize, Serialize};

use super::entity::EntityMeta;
use crate::impl_domain_status_conversions;

/// Role assigned to a staff member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    FinanceLead,
    Contributor,
    #[default]
    Unassigned,
}

impl_domain_status_conversions!(UserRole {
    Admin => "Admin",
    FinanceLead => "FinanceLead",
    Contributor => "Contributor",
    Unassigned => "Unassigned",
});

impl UserRole {
    pub const ALL: [Self; 4] =
        [Self::Admin, Self::FinanceLead, Self::Contributor, Self::Unassigned];

    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Account enablement state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Enabled,
    Disabled,
}

impl_domain_status_conversions!(UserStatus {
    Enabled => "Enabled",
    Disabled => "Disabled",
});

/// Staff member as listed by the backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(flatten)]
    pub entity: EntityMeta,
    pub name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: Option<UserRole>,
}

impl User {
    pub fn id(&self) -> &str {
        &self.entity.id
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name).trim().to_string()
    }
}

/// Login response and persisted session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub id: String,
    pub name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    pub email: String,
    pub role: UserRole,
    /// Absent from `/auth/me` responses
    #[serde(default)]
    pub jwt: String,
}

impl AuthSession {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name).trim().to_string()
    }
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
    pub role: Option<UserRole>,
}

/// Body of `PUT /users/{id}`; unset fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

/// Body of `PUT /users/{id}/update-status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserStatusRequest {
    pub status: UserStatus,
}
