use std::sync::Arc;

use async_trait::async_trait;
use baitulmal_core::TransactionGateway;
use baitulmal_domain::{
    CreateTransactionRequest, PaginatedResponse, QueryParams, Result, Transaction,
};

use crate::api::ApiClient;

pub struct RestTransactionGateway {
    client: Arc<ApiClient>,
}

impl RestTransactionGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TransactionGateway for RestTransactionGateway {
    async fn list(&self, params: &QueryParams) -> Result<PaginatedResponse<Transaction>> {
        Ok(self.client.get(&["transactions"], &params.to_query_pairs()).await?)
    }

    async fn create(&self, request: &CreateTransactionRequest) -> Result<()> {
        Ok(self.client.post(&["transactions"], request).await?)
    }
}
