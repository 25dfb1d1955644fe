//! Donor registry

pub mod ports;
pub mod service;

pub use ports::DonorGateway;
pub use service::DonorService;
