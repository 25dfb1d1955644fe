//! Organization profile and coordinator assignment

pub mod ports;
pub mod service;

pub use ports::OrganizationGateway;
pub use service::{DomainKind, OrganizationService};
