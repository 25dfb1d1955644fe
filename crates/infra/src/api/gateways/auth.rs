use std::sync::Arc;

use async_trait::async_trait;
use baitulmal_core::AuthGateway;
use baitulmal_domain::{AuthSession, LoginRequest, Result};
use tracing::instrument;

use crate::api::ApiClient;

pub struct RestAuthGateway {
    client: Arc<ApiClient>,
}

impl RestAuthGateway {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for RestAuthGateway {
    #[instrument(skip_all, fields(email = %request.email))]
    async fn login(&self, request: &LoginRequest) -> Result<AuthSession> {
        Ok(self.client.post(&["auth", "login"], request).await?)
    }

    async fn me(&self) -> Result<AuthSession> {
        Ok(self.client.get(&["auth", "me"], &[]).await?)
    }
}
