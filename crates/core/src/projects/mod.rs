//! Projects within sectors

pub mod ports;
pub mod service;

pub use ports::ProjectGateway;
pub use service::ProjectService;
