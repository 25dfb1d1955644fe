//! Helpers shared by the domain types

pub mod currency;
pub mod serde;
