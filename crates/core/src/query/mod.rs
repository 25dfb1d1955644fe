//! Server-state query layer
//!
//! [`QueryClient`] is an injectable cache of backend responses keyed by
//! operation name and canonical parameters. Reads go through
//! [`QueryClient::fetch`]; writes go through [`QueryClient::mutate`], which
//! invalidates the named entries and raises the configured toasts.

pub mod client;
pub mod mutation;
pub mod paging;

pub use client::QueryClient;
pub use mutation::{Invalidation, Mutation};
pub use paging::{fetch_all_pages, page_key, PageSource};
