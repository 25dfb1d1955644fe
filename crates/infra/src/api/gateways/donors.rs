use std::sync::Arc;

use async_trait::async_trait;
use baitulmal_core::DonorGateway;
use baitulmal_domain::{Donor, PaginatedResponse, QueryParams, Result};

use crate::api::ApiClient;

pub struct RestDonorGateway {
    client: Arc<ApiClient>,
}

impl RestDonorGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DonorGateway for RestDonorGateway {
    async fn list(&self, params: &QueryParams) -> Result<PaginatedResponse<Donor>> {
        Ok(self.client.get(&["donorinfo"], &params.to_query_pairs()).await?)
    }
}
