use std::sync::Arc;

use async_trait::async_trait;
use baitulmal_core::ProjectGateway;
use baitulmal_domain::{
    CreateProjectRequest, EditProjectRequest, EditProjectResponse, PaginatedResponse, Project,
    QueryParams, Result,
};

use crate::api::ApiClient;

/// Projects are listed flat but created and edited below their sector
pub struct RestProjectGateway {
    client: Arc<ApiClient>,
}

impl RestProjectGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectGateway for RestProjectGateway {
    async fn list(&self, params: &QueryParams) -> Result<PaginatedResponse<Project>> {
        Ok(self.client.get(&["projects"], &params.to_query_pairs()).await?)
    }

    async fn get(&self, project_id: &str) -> Result<Project> {
        Ok(self.client.get(&["projects", project_id], &[]).await?)
    }

    async fn create(&self, sector_id: &str, request: &CreateProjectRequest) -> Result<()> {
        Ok(self.client.post(&["sectors", sector_id, "projects"], request).await?)
    }

    async fn edit(
        &self,
        sector_id: &str,
        project_id: &str,
        request: &EditProjectRequest,
    ) -> Result<EditProjectResponse> {
        let path = ["sectors", sector_id, "projects", "update", project_id];
        Ok(self.client.put(&path, request).await?)
    }
}
