//! # Baitul Mal Domain
//!
//! Business domain types for the Baitul Mal fund-management admin client.
//!
//! This crate contains:
//! - Wire and domain types (users, sectors, projects, donors, transactions)
//! - Pagination and query parameter contracts shared with the REST backend
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (query keys, storage keys, defaults)
//!
//! ## Architecture
//! - No dependencies on other Baitul Mal crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::currency::format_currency;
