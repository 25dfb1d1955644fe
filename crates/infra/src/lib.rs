//! # Baitul Mal Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP client and the REST gateways of the backend API
//! - File-backed store for the session and preferences
//! - Configuration loading from files and the environment
//!
//! ## Architecture
//! - Implements traits defined in `baitulmal-core`
//! - Depends on `baitulmal-domain` and `baitulmal-core`
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod storage;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientConfig, ApiError};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use storage::LocalStore;
