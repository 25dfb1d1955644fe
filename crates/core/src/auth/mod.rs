//! Sign-in, session persistence and the current user

pub mod ports;
pub mod service;

pub use ports::{AuthGateway, SessionStore};
pub use service::{AuthOutcome, AuthService};
