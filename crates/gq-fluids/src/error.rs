//! Fluid data errors.

use gq_core::GqError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors raised while building compositions and state points.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative fraction, pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// The same component listed twice in one composition.
    #[error("Component listed more than once: {component}")]
    DuplicateComponent { component: &'static str },

    /// Name that does not map to a supported component.
    #[error("Unknown component: {name}")]
    UnknownComponent { name: String },
}

/// Every fluid error rejects caller input.
impl From<FluidError> for GqError {
    fn from(err: FluidError) -> Self {
        GqError::InvalidArg {
            what: err.to_string(),
        }
    }
}
