//! # Baitul Mal App
//!
//! Command-line front end over the core services.
//!
//! This crate contains:
//! - The clap command tree
//! - Commands (terminal front end over the core services)
//! - Application context (dependency injection)
//! - Logging setup and the toast sink
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires the REST gateways and local storage into the core services

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

pub use cli::{Cli, Command};
pub use commands::OutputFormat;
pub use context::*;
