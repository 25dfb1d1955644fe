//! Sector service

use std::sync::Arc;

use async_trait::async_trait;
use baitulmal_common::cache::QueryKey;
use baitulmal_domain::constants::{message_keys, query_keys, SECTOR_INFINITE_PAGE_SIZE};
use baitulmal_domain::{CreateSectorResponse, PaginatedResponse, QueryParams, Result, Sector};
use tracing::instrument;

use super::ports::SectorGateway;
use crate::forms::{rejected, SectorForm};
use crate::notifications::Toast;
use crate::query::{fetch_all_pages, page_key, Mutation, PageSource, QueryClient};

/// Sector service
pub struct SectorService {
    gateway: Arc<dyn SectorGateway>,
    query: QueryClient,
    infinite_page_size: u32,
}

impl SectorService {
    pub fn new(gateway: Arc<dyn SectorGateway>, query: QueryClient) -> Self {
        Self { gateway, query, infinite_page_size: SECTOR_INFINITE_PAGE_SIZE }
    }

    /// Override the page size used by [`list_all`](Self::list_all)
    pub fn with_infinite_page_size(mut self, page_size: u32) -> Self {
        self.infinite_page_size = page_size.max(1);
        self
    }

    pub async fn list(&self, params: &QueryParams) -> Result<PaginatedResponse<Sector>> {
        self.query
            .fetch(page_key(query_keys::SECTOR_GET_ALL, params), || self.gateway.list(params))
            .await
    }

    /// Every sector, loaded incrementally
    pub async fn list_all(&self, params: &QueryParams) -> Result<Vec<Sector>> {
        let pages = fetch_all_pages(&self.query, self, params, self.infinite_page_size).await?;
        Ok(pages.into_iter().flat_map(|page| page.items).collect())
    }

    pub async fn get(&self, sector_id: &str) -> Result<Sector> {
        let key = QueryKey::new(query_keys::SECTOR_GET_BY_ID).with_params(sector_id);
        self.query.fetch(key, || self.gateway.get(sector_id)).await
    }

    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create(&self, form: SectorForm) -> Result<CreateSectorResponse> {
        let request = form.into_request().map_err(rejected)?;
        let mutation = Mutation::new("create_sector")
            .invalidates(query_keys::SECTOR_GET_ALL)
            .success_toast(Toast::success(message_keys::SECTOR_CREATED_SUCCESS))
            .error_toast(Toast::failure(message_keys::SECTOR_CREATED_ERROR));
        self.query.mutate(mutation, self.gateway.create(&request)).await
    }
}

#[async_trait]
impl PageSource<Sector> for SectorService {
    fn operation(&self) -> &'static str {
        query_keys::SECTOR_GET_ALL
    }

    async fn fetch_page(&self, params: &QueryParams) -> Result<PaginatedResponse<Sector>> {
        self.gateway.list(params).await
    }
}
