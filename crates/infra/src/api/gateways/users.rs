use std::sync::Arc;

use async_trait::async_trait;
use baitulmal_core::UserGateway;
use baitulmal_domain::{
    CreateUserRequest, EditUserRequest, PaginatedResponse, QueryParams, Result,
    UpdateUserStatusRequest, User,
};

use crate::api::ApiClient;

/// `/users` resource
pub struct RestUserGateway {
    client: Arc<ApiClient>,
}

impl RestUserGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserGateway for RestUserGateway {
    async fn list(&self, params: &QueryParams) -> Result<PaginatedResponse<User>> {
        Ok(self.client.get(&["users"], &params.to_query_pairs()).await?)
    }

    async fn get(&self, user_id: &str) -> Result<User> {
        Ok(self.client.get(&["users", user_id], &[]).await?)
    }

    async fn create(&self, request: &CreateUserRequest) -> Result<User> {
        Ok(self.client.post(&["users"], request).await?)
    }

    async fn edit(&self, user_id: &str, request: &EditUserRequest) -> Result<User> {
        Ok(self.client.put(&["users", user_id], request).await?)
    }

    async fn update_status(
        &self,
        user_id: &str,
        request: &UpdateUserStatusRequest,
    ) -> Result<()> {
        Ok(self.client.put(&["users", user_id, "update-status"], request).await?)
    }
}
