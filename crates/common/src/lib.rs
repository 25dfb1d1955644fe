//! Shared building blocks for the Baitul Mal admin client crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: field validation framework and the clock abstraction
//! - `runtime`: keyed query cache and the cancellable debouncer (tokio)

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod clock;
#[cfg(feature = "foundation")]
pub mod validation;

// Runtime tier
// --------------------------------------------------------------------
#[cfg(feature = "runtime")]
pub mod cache;
#[cfg(feature = "runtime")]
pub mod debounce;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "runtime")]
pub use cache::{Cache, CacheConfig, CacheStats, EvictionPolicy, QueryKey};
#[cfg(feature = "foundation")]
pub use clock::{Clock, MockClock, SystemClock};
#[cfg(feature = "runtime")]
pub use debounce::Debouncer;
#[cfg(feature = "foundation")]
pub use validation::{
    CustomValidator, DecimalPlacesValidator, EmailValidator, FieldError, FieldValidator,
    RangeValidator, StringValidator, ValidationError, ValidationResult, Validator,
};
