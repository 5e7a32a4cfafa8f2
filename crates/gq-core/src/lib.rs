//! gq-core: stable foundation for gasquality.
//!
//! Contains:
//! - units (uom SI types + constructors + physical constants)
//! - numeric (Real, tolerances, residual and rounding helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{GqError, GqResult};
pub use numeric::*;
pub use units::*;
