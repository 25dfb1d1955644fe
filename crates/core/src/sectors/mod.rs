//! Sectors: top-level fund domains grouping projects

pub mod ports;
pub mod service;

pub use ports::SectorGateway;
pub use service::SectorService;
