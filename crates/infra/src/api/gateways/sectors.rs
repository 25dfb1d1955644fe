use std::sync::Arc;

use async_trait::async_trait;
use baitulmal_core::SectorGateway;
use baitulmal_domain::{
    CreateSectorRequest, CreateSectorResponse, PaginatedResponse, QueryParams, Result, Sector,
};

use crate::api::ApiClient;

pub struct RestSectorGateway {
    client: Arc<ApiClient>,
}

impl RestSectorGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SectorGateway for RestSectorGateway {
    async fn list(&self, params: &QueryParams) -> Result<PaginatedResponse<Sector>> {
        Ok(self.client.get(&["sectors"], &params.to_query_pairs()).await?)
    }

    async fn get(&self, sector_id: &str) -> Result<Sector> {
        Ok(self.client.get(&["sectors", sector_id], &[]).await?)
    }

    async fn create(&self, request: &CreateSectorRequest) -> Result<CreateSectorResponse> {
        Ok(self.client.post(&["sectors"], request).await?)
    }
}
