//! Organization service

use std::sync::Arc;

use baitulmal_common::cache::QueryKey;
use baitulmal_domain::constants::{message_keys, query_keys};
use baitulmal_domain::{
    AddCoordinatorsRequest, Coordinator, CoordinatorChanges, OrganizationInfo, Result,
};
use tracing::{debug, instrument};

use super::ports::OrganizationGateway;
use crate::notifications::Toast;
use crate::query::{Mutation, QueryClient};

/// Which kind of organization domain a coordinator change targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainKind {
    Sector,
    Project,
}

impl DomainKind {
    const fn detail_operation(self) -> &'static str {
        match self {
            Self::Sector => query_keys::SECTOR_GET_BY_ID,
            Self::Project => query_keys::PROJECT_GET_BY_ID,
        }
    }

    const fn list_operation(self) -> &'static str {
        match self {
            Self::Sector => query_keys::SECTOR_GET_ALL,
            Self::Project => query_keys::PROJECT_GET_ALL,
        }
    }
}

/// Organization service
pub struct OrganizationService {
    gateway: Arc<dyn OrganizationGateway>,
    query: QueryClient,
}

impl OrganizationService {
    pub fn new(gateway: Arc<dyn OrganizationGateway>, query: QueryClient) -> Self {
        Self { gateway, query }
    }

    pub async fn info(&self) -> Result<OrganizationInfo> {
        self.query
            .fetch(QueryKey::new(query_keys::GET_ORGANIZATION_INFO), || self.gateway.info())
            .await
    }

    /// Apply `changes` to the current coordinators of a sector or project.
    ///
    /// The backend receives the complete resulting list. Returns that list;
    /// nothing is sent when `changes` is empty.
    #[instrument(skip(self, current, changes))]
    pub async fn assign_coordinators(
        &self,
        kind: DomainKind,
        domain_id: &str,
        current: &[Coordinator],
        changes: &CoordinatorChanges,
    ) -> Result<Vec<String>> {
        let user_ids = changes.resolve(current);
        if changes.is_empty() {
            debug!("no coordinator changes");
            return Ok(user_ids);
        }

        let request = AddCoordinatorsRequest { user_ids };
        let mutation = Mutation::new("assign_coordinators")
            .invalidates_key(QueryKey::new(kind.detail_operation()).with_params(domain_id))
            .invalidates(kind.list_operation())
            .success_toast(Toast::success(message_keys::COORDINATORS_ADDED_SUCCESS));
        self.query.mutate(mutation, self.gateway.set_coordinators(domain_id, &request)).await?;
        Ok(request.user_ids)
    }
}
