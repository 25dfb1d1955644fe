//! Port interfaces for sectors

use async_trait::async_trait;
use baitulmal_domain::{
    CreateSectorRequest, CreateSectorResponse, PaginatedResponse, QueryParams, Result, Sector,
};

/// Backend `/sectors` endpoints
#[async_trait]
pub trait SectorGateway: Send + Sync {
    async fn list(&self, params: &QueryParams) -> Result<PaginatedResponse<Sector>>;

    async fn get(&self, sector_id: &str) -> Result<Sector>;

    async fn create(&self, request: &CreateSectorRequest) -> Result<CreateSectorResponse>;
}
