//! User administration service

use std::sync::Arc;

use async_trait::async_trait;
use baitulmal_common::cache::QueryKey;
use baitulmal_domain::constants::{message_keys, query_keys};
use baitulmal_domain::{
    PaginatedResponse, QueryParams, Result, UpdateUserStatusRequest, User, UserStatus,
};
use tracing::instrument;

use super::ports::UserGateway;
use crate::forms::{rejected, EditProfileForm, ProfileForm};
use crate::notifications::Toast;
use crate::query::{fetch_all_pages, page_key, Mutation, PageSource, QueryClient};

/// User administration service
pub struct UserService {
    gateway: Arc<dyn UserGateway>,
    query: QueryClient,
}

impl UserService {
    pub fn new(gateway: Arc<dyn UserGateway>, query: QueryClient) -> Self {
        Self { gateway, query }
    }

    /// One page of users, cached per parameter set
    pub async fn list(&self, params: &QueryParams) -> Result<PaginatedResponse<User>> {
        self.query
            .fetch(page_key(query_keys::USER_GET_ALL, params), || self.gateway.list(params))
            .await
    }

    /// Every user, loaded `page_size` at a time
    pub async fn list_all(&self, params: &QueryParams, page_size: u32) -> Result<Vec<User>> {
        let pages = fetch_all_pages(&self.query, self, params, page_size).await?;
        Ok(pages.into_iter().flat_map(|page| page.items).collect())
    }

    pub async fn get(&self, user_id: &str) -> Result<User> {
        self.query
            .fetch(QueryKey::new(query_keys::user_get(user_id)), || self.gateway.get(user_id))
            .await
    }

    #[instrument(skip(self, form), fields(email = %form.email))]
    pub async fn create(&self, form: ProfileForm) -> Result<User> {
        let request = form.into_request().map_err(rejected)?;
        let mutation = Mutation::new("create_user")
            .invalidates(query_keys::USER_GET_ALL)
            .success_toast(Toast::success(message_keys::USER_CREATED_SUCCESS))
            .error_toast(Toast::failure(message_keys::USER_CREATED_ERROR));
        self.query.mutate(mutation, self.gateway.create(&request)).await
    }

    /// Update a profile; the signed-in user's cached profile is refreshed too
    #[instrument(skip(self, form))]
    pub async fn edit(&self, user_id: &str, form: EditProfileForm) -> Result<User> {
        let request = form.into_request().map_err(rejected)?;
        let mutation = Mutation::new("edit_user")
            .invalidates(query_keys::USER_GET_ALL)
            .invalidates(query_keys::ME)
            .invalidates(query_keys::user_get(user_id))
            .success_toast(Toast::success(message_keys::PROFILE_UPDATE_SUCCESS))
            .error_toast(Toast::failure(message_keys::PROFILE_UPDATE_ERROR));
        self.query.mutate(mutation, self.gateway.edit(user_id, &request)).await
    }

    /// Enable or disable an account
    #[instrument(skip(self))]
    pub async fn update_status(&self, user_id: &str, status: UserStatus) -> Result<()> {
        let (success, failure) = match status {
            UserStatus::Enabled => {
                (message_keys::USER_ACTIVATE_SUCCESS, message_keys::USER_ACTIVATE_ERROR)
            }
            UserStatus::Disabled => {
                (message_keys::USER_DEACTIVATE_SUCCESS, message_keys::USER_DEACTIVATE_ERROR)
            }
        };
        let mutation = Mutation::new("update_user_status")
            .invalidates(query_keys::USER_GET_ALL)
            .invalidates(query_keys::user_get(user_id))
            .success_toast(Toast::success(success))
            .error_toast(Toast::failure(failure));
        let request = UpdateUserStatusRequest { status };
        self.query.mutate(mutation, self.gateway.update_status(user_id, &request)).await
    }
}

#[async_trait]
impl PageSource<User> for UserService {
    fn operation(&self) -> &'static str {
        query_keys::USER_GET_ALL
    }

    async fn fetch_page(&self, params: &QueryParams) -> Result<PaginatedResponse<User>> {
        self.gateway.list(params).await
    }
}
