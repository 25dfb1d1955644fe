//! Port interfaces for transactions

use async_trait::async_trait;
use baitulmal_domain::{
    CreateTransactionRequest, PaginatedResponse, QueryParams, Result, Transaction,
};

/// Backend `/transaction` endpoints
#[async_trait]
pub trait TransactionGateway: Send + Sync {
    async fn list(&self, params: &QueryParams) -> Result<PaginatedResponse<Transaction>>;

    async fn create(&self, request: &CreateTransactionRequest) -> Result<()>;
}
