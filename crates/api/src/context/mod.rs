//! Application context - dependency injection container

use std::sync::Arc;

use baitulmal_core::{
    AuthService, DonorService, OrganizationService, ProjectService, QueryClient, SectorService,
    SettingsService, TransactionService, UserService,
};
use baitulmal_domain::{BaitulMalError, Config, Result, UserRole};
use baitulmal_infra::api::{
    RestAuthGateway, RestDonorGateway, RestOrganizationGateway, RestProjectGateway,
    RestSectorGateway, RestTransactionGateway, RestUserGateway,
};
use baitulmal_infra::{config, ApiClient, ApiClientConfig, LocalStore};
use tracing::info;

use crate::adapters::ToastLog;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub store: Arc<LocalStore>,
    pub query: QueryClient,
    pub toasts: Arc<ToastLog>,

    pub auth: Arc<AuthService>,
    pub users: Arc<UserService>,
    pub sectors: Arc<SectorService>,
    pub projects: Arc<ProjectService>,
    pub donors: Arc<DonorService>,
    pub transactions: Arc<TransactionService>,
    pub organization: Arc<OrganizationService>,
    pub settings: Arc<SettingsService>,
}

impl AppContext {
    /// Build the context from the loaded configuration
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or the state file
    /// cannot be opened
    pub fn new() -> Result<Self> {
        Self::new_with_config(config::load()?)
    }

    /// Build the context from an explicit configuration
    ///
    /// # Errors
    /// Returns an error if the state file cannot be opened or the API base
    /// URL is invalid
    pub fn new_with_config(config: Config) -> Result<Self> {
        let store = Arc::new(LocalStore::open(&config.storage.path)?);
        let client = Arc::new(
            ApiClient::new(ApiClientConfig::from(&config.api), store.clone())
                .map_err(BaitulMalError::from)?,
        );

        let toasts = Arc::new(ToastLog::new());
        let query = QueryClient::new(toasts.clone());

        let auth = AuthService::new(
            Arc::new(RestAuthGateway::new(client.clone())),
            store.clone(),
            query.clone(),
        );
        let users = UserService::new(Arc::new(RestUserGateway::new(client.clone())), query.clone());
        let sectors =
            SectorService::new(Arc::new(RestSectorGateway::new(client.clone())), query.clone());
        let projects =
            ProjectService::new(Arc::new(RestProjectGateway::new(client.clone())), query.clone());
        let donor_gateway = Arc::new(RestDonorGateway::new(client.clone()));
        let donors = DonorService::new(donor_gateway.clone(), query.clone());
        let transactions = TransactionService::new(
            Arc::new(RestTransactionGateway::new(client.clone())),
            donor_gateway,
            query.clone(),
        );
        let organization =
            OrganizationService::new(Arc::new(RestOrganizationGateway::new(client)), query.clone());
        let settings = SettingsService::new(store.clone());

        info!(
            api = %config.api.base_url,
            state = %config.storage.path.display(),
            "application context ready"
        );

        Ok(Self {
            config,
            store,
            query,
            toasts,
            auth: Arc::new(auth),
            users: Arc::new(users),
            sectors: Arc::new(sectors),
            projects: Arc::new(projects),
            donors: Arc::new(donors),
            transactions: Arc::new(transactions),
            organization: Arc::new(organization),
            settings: Arc::new(settings),
        })
    }

    /// Role of the signed-in user, read from the stored session
    pub fn viewer_role(&self) -> Result<Option<UserRole>> {
        self.auth.current_role()
    }
}
