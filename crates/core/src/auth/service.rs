//! Authentication service - session lifecycle

use std::sync::Arc;

use baitulmal_common::cache::QueryKey;
use baitulmal_domain::constants::query_keys;
use baitulmal_domain::{AuthSession, BaitulMalError, LoginRequest, Result, UserRole};
use tracing::{info, warn};

use super::ports::{AuthGateway, SessionStore};
use crate::forms::{rejected, LoginForm};
use crate::query::{Mutation, QueryClient};

/// Result of checking the session against the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated(AuthSession),
    /// No usable session; the front end should show the login screen
    RedirectToLogin,
}

/// Authentication service
pub struct AuthService {
    gateway: Arc<dyn AuthGateway>,
    sessions: Arc<dyn SessionStore>,
    query: QueryClient,
}

impl AuthService {
    /// Create a new authentication service
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        sessions: Arc<dyn SessionStore>,
        query: QueryClient,
    ) -> Self {
        Self { gateway, sessions, query }
    }

    /// Validate credentials, sign in and persist the session
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let form = LoginForm { email: email.to_string(), password: password.to_string() };
        form.validate().map_err(rejected)?;

        let request = LoginRequest { email: form.email, password: form.password };
        let session =
            self.query.mutate(Mutation::new("login"), self.gateway.login(&request)).await?;

        self.sessions.save(&session)?;
        self.query.clear();
        self.query.set(QueryKey::new(query_keys::ME), &session);
        info!(user_id = %session.id, role = %session.role, "signed in");
        Ok(session)
    }

    /// Forget the session and every cached query
    pub fn logout(&self) -> Result<()> {
        self.sessions.clear()?;
        self.query.clear();
        info!("signed out");
        Ok(())
    }

    /// Session persisted from the last sign-in
    pub fn current_user(&self) -> Result<Option<AuthSession>> {
        self.sessions.load()
    }

    /// Role of the signed-in user, if any
    pub fn current_role(&self) -> Result<Option<UserRole>> {
        Ok(self.current_user()?.map(|session| session.role))
    }

    /// Reload `/auth/me` and refresh the stored profile.
    ///
    /// The stored token is kept; `/auth/me` does not return one. An
    /// unauthorized answer clears the session.
    pub async fn refresh_me(&self) -> Result<AuthOutcome> {
        let Some(stored) = self.sessions.load()? else {
            return Ok(AuthOutcome::RedirectToLogin);
        };

        self.query.invalidate(query_keys::ME);
        let fetched =
            self.query.fetch(QueryKey::new(query_keys::ME), || self.gateway.me()).await;

        match fetched {
            Ok(mut session) => {
                if session.jwt.is_empty() {
                    session.jwt = stored.jwt;
                }
                self.sessions.save(&session)?;
                Ok(AuthOutcome::Authenticated(session))
            }
            Err(err) => match self.handle_unauthorized(&err)? {
                Some(outcome) => Ok(outcome),
                None => Err(err),
            },
        }
    }

    /// Clear the session when `err` is an authorization failure
    ///
    /// Returns the redirect signal in that case, `None` otherwise.
    pub fn handle_unauthorized(&self, err: &BaitulMalError) -> Result<Option<AuthOutcome>> {
        if !err.is_unauthorized() {
            return Ok(None);
        }
        warn!(error = %err, "session rejected by backend");
        self.logout()?;
        Ok(Some(AuthOutcome::RedirectToLogin))
    }
}
