//! Port interfaces for authentication
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for sign-in and session storage.

use async_trait::async_trait;
use baitulmal_domain::{AuthSession, LoginRequest, Result};

/// Backend authentication endpoints
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a session (`POST /auth/login`)
    async fn login(&self, request: &LoginRequest) -> Result<AuthSession>;

    /// Current user as seen by the backend (`GET /auth/me`)
    async fn me(&self) -> Result<AuthSession>;
}

/// Persisted session, the client's only credential store
///
/// Synchronous: implementations are small local files or in-memory maps.
pub trait SessionStore: Send + Sync {
    /// Load the stored session, if any
    fn load(&self) -> Result<Option<AuthSession>>;

    /// Replace the stored session
    fn save(&self, session: &AuthSession) -> Result<()>;

    /// Forget the stored session
    fn clear(&self) -> Result<()>;
}
