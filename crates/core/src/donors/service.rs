//! Donor service

use std::sync::Arc;

use async_trait::async_trait;
use baitulmal_domain::constants::{query_keys, DEFAULT_PAGE_NUMBER, DONOR_SUGGESTION_PAGE_SIZE};
use baitulmal_domain::{Donor, PaginatedResponse, QueryParams, Result};

use super::ports::DonorGateway;
use crate::query::{page_key, PageSource, QueryClient};

/// Donor service
pub struct DonorService {
    gateway: Arc<dyn DonorGateway>,
    query: QueryClient,
}

impl DonorService {
    pub fn new(gateway: Arc<dyn DonorGateway>, query: QueryClient) -> Self {
        Self { gateway, query }
    }

    pub async fn list(&self, params: &QueryParams) -> Result<PaginatedResponse<Donor>> {
        self.query
            .fetch(page_key(query_keys::DONOR_GET_ALL, params), || self.gateway.list(params))
            .await
    }

    /// First page of donors matching `term`, sized for a suggestion list
    pub async fn suggestions(&self, term: &str) -> Result<Vec<Donor>> {
        let params = suggestion_params(term);
        Ok(self.list(&params).await?.items)
    }
}

/// `SearchTerm = term`, page 1, five results
pub fn suggestion_params(term: &str) -> QueryParams {
    let mut params = QueryParams::new()
        .with_page(DEFAULT_PAGE_NUMBER)
        .with_page_size(DONOR_SUGGESTION_PAGE_SIZE);
    params.search_term = Some(term.to_string());
    params
}

#[async_trait]
impl PageSource<Donor> for DonorService {
    fn operation(&self) -> &'static str {
        query_keys::DONOR_GET_ALL
    }

    async fn fetch_page(&self, params: &QueryParams) -> Result<PaginatedResponse<Donor>> {
        self.gateway.list(params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_params_use_small_first_page() {
        let params = suggestion_params("amina@");
        assert_eq!(params.page_number, Some(1));
        assert_eq!(params.page_size, Some(5));
        assert_eq!(params.search_term.as_deref(), Some("amina@"));
    }
}
