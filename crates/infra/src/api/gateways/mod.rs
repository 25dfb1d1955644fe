//! REST implementations of the core gateway ports
//!
//! Each gateway borrows the shared [`ApiClient`](super::ApiClient) and maps
//! one backend resource.

mod auth;
mod donors;
mod organization;
mod projects;
mod sectors;
mod transactions;
mod users;

pub use auth::RestAuthGateway;
pub use donors::RestDonorGateway;
pub use organization::RestOrganizationGateway;
pub use projects::RestProjectGateway;
pub use sectors::RestSectorGateway;
pub use transactions::RestTransactionGateway;
pub use users::RestUserGateway;
