//! Port interfaces for projects

use async_trait::async_trait;
use baitulmal_domain::{
    CreateProjectRequest, EditProjectRequest, EditProjectResponse, PaginatedResponse, Project,
    QueryParams, Result,
};

/// Backend project endpoints
///
/// Projects are created and edited through their sector
/// (`/sectors/{sectorId}/projects`), but listed and read through `/projects`.
#[async_trait]
pub trait ProjectGateway: Send + Sync {
    async fn list(&self, params: &QueryParams) -> Result<PaginatedResponse<Project>>;

    async fn get(&self, project_id: &str) -> Result<Project>;

    async fn create(&self, sector_id: &str, request: &CreateProjectRequest) -> Result<()>;

    async fn edit(
        &self,
        sector_id: &str,
        project_id: &str,
        request: &EditProjectRequest,
    ) -> Result<EditProjectResponse>;
}
