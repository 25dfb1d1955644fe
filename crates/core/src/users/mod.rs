//! User administration

pub mod ports;
pub mod service;

pub use ports::UserGateway;
pub use service::UserService;
