//! Port interfaces for donors

use async_trait::async_trait;
use baitulmal_domain::{Donor, PaginatedResponse, QueryParams, Result};

/// Backend `/donorinfo` endpoint
#[async_trait]
pub trait DonorGateway: Send + Sync {
    async fn list(&self, params: &QueryParams) -> Result<PaginatedResponse<Donor>>;
}
