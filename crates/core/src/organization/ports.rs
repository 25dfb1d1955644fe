//! Port interfaces for the organization and its domains

use async_trait::async_trait;
use baitulmal_domain::{AddCoordinatorsRequest, OrganizationInfo, Result};

/// Backend organization endpoints
#[async_trait]
pub trait OrganizationGateway: Send + Sync {
    /// `GET /organizationInfo`
    async fn info(&self) -> Result<OrganizationInfo>;

    /// Replace the coordinators of a sector or project
    /// (`POST /organizationdomain/{id}/coordinations`)
    async fn set_coordinators(&self, domain_id: &str, request: &AddCoordinatorsRequest)
        -> Result<()>;
}
