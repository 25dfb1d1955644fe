//! Project service

use std::sync::Arc;

use async_trait::async_trait;
use baitulmal_common::cache::QueryKey;
use baitulmal_domain::constants::{message_keys, query_keys, PROJECT_INFINITE_PAGE_SIZE};
use baitulmal_domain::{EditProjectResponse, PaginatedResponse, Project, QueryParams, Result};
use tracing::instrument;

use super::ports::ProjectGateway;
use crate::forms::{rejected, EditProjectForm, ProjectForm};
use crate::notifications::Toast;
use crate::query::{fetch_all_pages, page_key, Mutation, PageSource, QueryClient};

/// Project service
pub struct ProjectService {
    gateway: Arc<dyn ProjectGateway>,
    query: QueryClient,
    infinite_page_size: u32,
}

impl ProjectService {
    pub fn new(gateway: Arc<dyn ProjectGateway>, query: QueryClient) -> Self {
        Self { gateway, query, infinite_page_size: PROJECT_INFINITE_PAGE_SIZE }
    }

    /// Override the page size used by [`list_all`](Self::list_all)
    pub fn with_infinite_page_size(mut self, page_size: u32) -> Self {
        self.infinite_page_size = page_size.max(1);
        self
    }

    pub async fn list(&self, params: &QueryParams) -> Result<PaginatedResponse<Project>> {
        self.query
            .fetch(page_key(query_keys::PROJECT_GET_ALL, params), || self.gateway.list(params))
            .await
    }

    /// Every project matching `params`, loaded incrementally
    pub async fn list_all(&self, params: &QueryParams) -> Result<Vec<Project>> {
        let pages = fetch_all_pages(&self.query, self, params, self.infinite_page_size).await?;
        Ok(pages.into_iter().flat_map(|page| page.items).collect())
    }

    pub async fn get(&self, project_id: &str) -> Result<Project> {
        self.query.fetch(project_key(project_id), || self.gateway.get(project_id)).await
    }

    /// Create a project inside its sector; both list views are refreshed
    #[instrument(skip(self, form), fields(name = %form.name, sector_id = %form.sector_id))]
    pub async fn create(&self, form: ProjectForm) -> Result<()> {
        let request = form.into_request().map_err(rejected)?;
        let mutation = Mutation::new("create_project")
            .invalidates(query_keys::PROJECT_GET_ALL)
            .invalidates(query_keys::SECTOR_GET_ALL)
            .invalidates_key(
                QueryKey::new(query_keys::SECTOR_GET_BY_ID).with_params(&request.sector_id),
            )
            .success_toast(Toast::success(message_keys::PROJECT_CREATED_SUCCESS))
            .error_toast(Toast::failure(message_keys::PROJECT_CREATED_ERROR));
        self.query.mutate(mutation, self.gateway.create(&request.sector_id, &request)).await
    }

    #[instrument(skip(self, form))]
    pub async fn edit(
        &self,
        sector_id: &str,
        project_id: &str,
        form: EditProjectForm,
    ) -> Result<EditProjectResponse> {
        let request = form.into_request(sector_id).map_err(rejected)?;
        let mutation = Mutation::new("edit_project")
            .invalidates(query_keys::PROJECT_GET_ALL)
            .invalidates_key(project_key(project_id))
            .success_toast(Toast::success(message_keys::PROJECT_EDITED_SUCCESS))
            .error_toast(Toast::failure(message_keys::PROJECT_EDITED_ERROR));
        self.query.mutate(mutation, self.gateway.edit(sector_id, project_id, &request)).await
    }
}

fn project_key(project_id: &str) -> QueryKey {
    QueryKey::new(query_keys::PROJECT_GET_BY_ID).with_params(project_id)
}

#[async_trait]
impl PageSource<Project> for ProjectService {
    fn operation(&self) -> &'static str {
        query_keys::PROJECT_GET_ALL
    }

    async fn fetch_page(&self, params: &QueryParams) -> Result<PaginatedResponse<Project>> {
        self.gateway.list(params).await
    }
}
