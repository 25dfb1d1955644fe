//! Backend API access
//!
//! [`ApiClient`] speaks HTTP to the Baitul Mal backend; the gateways in
//! [`gateways`] implement the core ports on top of it.

pub mod client;
pub mod errors;
pub mod gateways;

pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use errors::{ApiError, ApiErrorCategory};
pub use gateways::{
    RestAuthGateway, RestDonorGateway, RestOrganizationGateway, RestProjectGateway,
    RestSectorGateway, RestTransactionGateway, RestUserGateway,
};
