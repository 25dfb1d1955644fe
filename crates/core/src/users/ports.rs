//! Port interfaces for user administration

use async_trait::async_trait;
use baitulmal_domain::{
    CreateUserRequest, EditUserRequest, PaginatedResponse, QueryParams, Result,
    UpdateUserStatusRequest, User,
};

/// Backend `/users` endpoints
#[async_trait]
pub trait UserGateway: Send + Sync {
    async fn list(&self, params: &QueryParams) -> Result<PaginatedResponse<User>>;

    async fn get(&self, user_id: &str) -> Result<User>;

    async fn create(&self, request: &CreateUserRequest) -> Result<User>;

    async fn edit(&self, user_id: &str, request: &EditUserRequest) -> Result<User>;

    /// Enable or disable an account (`PUT /users/{id}/update-status`)
    async fn update_status(&self, user_id: &str, request: &UpdateUserStatusRequest)
        -> Result<()>;
}
