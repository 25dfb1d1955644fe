//! Transaction service

use std::sync::Arc;

use async_trait::async_trait;
use baitulmal_domain::constants::{message_keys, query_keys};
use baitulmal_domain::{
    CreateTransactionRequest, PaginatedResponse, QueryParams, Result, Transaction,
};
use tracing::{debug, instrument, warn};

use super::ports::TransactionGateway;
use super::wizard::{DonorSearch, TransactionWizard};
use crate::donors::{DonorGateway, DonorService};
use crate::notifications::Toast;
use crate::query::{page_key, Mutation, PageSource, QueryClient};

/// How a wizard submission ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The draft failed validation; nothing was sent
    Invalid,
    Created,
    /// The backend refused; the wizard shows the routed message
    Rejected,
}

/// Transaction service
pub struct TransactionService {
    gateway: Arc<dyn TransactionGateway>,
    donors: DonorService,
    query: QueryClient,
}

impl TransactionService {
    pub fn new(
        gateway: Arc<dyn TransactionGateway>,
        donors: Arc<dyn DonorGateway>,
        query: QueryClient,
    ) -> Self {
        Self { gateway, donors: DonorService::new(donors, query.clone()), query }
    }

    pub async fn list(&self, params: &QueryParams) -> Result<PaginatedResponse<Transaction>> {
        self.query
            .fetch(page_key(query_keys::TRANSACTION_GET_ALL, params), || {
                self.gateway.list(params)
            })
            .await
    }

    /// Record a transaction; the list is refetched afterwards
    #[instrument(skip_all, fields(currency = %request.currency_code))]
    pub async fn create(&self, request: &CreateTransactionRequest) -> Result<()> {
        let mutation = Mutation::new("create_transaction")
            .invalidates(query_keys::TRANSACTION_GET_ALL)
            .success_toast(Toast::success(message_keys::TRANSACTION_CREATED_SUCCESS));
        self.query.mutate(mutation, self.gateway.create(request)).await
    }

    /// Validate and send the wizard's draft, then feed the answer back
    pub async fn submit(&self, wizard: &mut TransactionWizard) -> SubmitOutcome {
        let Some(request) = wizard.begin_submit() else {
            debug!(errors = wizard.errors().error_count(), "transaction draft invalid");
            return SubmitOutcome::Invalid;
        };

        let result = self.create(&request).await;
        let outcome = match &result {
            Ok(()) => SubmitOutcome::Created,
            Err(err) => {
                warn!(error = %err, "transaction rejected");
                SubmitOutcome::Rejected
            }
        };
        wizard.finish_submit(&result);
        outcome
    }

    /// Refresh the donor suggestions under the email or phone input
    ///
    /// Does nothing while a donor is selected or the input is empty.
    pub async fn search_donors(
        &self,
        wizard: &mut TransactionWizard,
        search: DonorSearch,
    ) -> Result<()> {
        if !wizard.wants_matches(search) {
            return Ok(());
        }
        let term = wizard.search_term(search).to_string();
        let donors = self.donors.suggestions(&term).await?;
        wizard.set_matches(search, &term, donors);
        Ok(())
    }
}

#[async_trait]
impl PageSource<Transaction> for TransactionService {
    fn operation(&self) -> &'static str {
        query_keys::TRANSACTION_GET_ALL
    }

    async fn fetch_page(&self, params: &QueryParams) -> Result<PaginatedResponse<Transaction>> {
        self.gateway.list(params).await
    }
}
