use std::sync::Arc;

use async_trait::async_trait;
use baitulmal_core::OrganizationGateway;
use baitulmal_domain::{AddCoordinatorsRequest, OrganizationInfo, Result};

use crate::api::ApiClient;

pub struct RestOrganizationGateway {
    client: Arc<ApiClient>,
}

impl RestOrganizationGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrganizationGateway for RestOrganizationGateway {
    async fn info(&self) -> Result<OrganizationInfo> {
        Ok(self.client.get(&["organizationInfo"], &[]).await?)
    }

    /// Replaces the coordinators of a sector or project
    async fn set_coordinators(
        &self,
        domain_id: &str,
        request: &AddCoordinatorsRequest,
    ) -> Result<()> {
        let path = ["organizationdomain", domain_id, "coordinations"];
        Ok(self.client.post(&path, request).await?)
    }
}
