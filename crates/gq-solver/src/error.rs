//! Error types for density solving and property evaluation.

use crate::density::SigmaStep;
use gq_core::error::GqError;
use gq_fluids::FluidError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: String },

    /// The iteration cap was reached, or σ / π_calc became non-finite.
    /// `trace` holds every step taken.
    #[error("Density iteration did not converge after {iterations} steps, residual = {residual:e}")]
    DidNotConverge {
        iterations: usize,
        residual: f64,
        trace: Vec<SigmaStep>,
    },

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for GqError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::InvalidConfig { what } => GqError::InvalidArg { what },
            SolverError::DidNotConverge { residual, .. } if !residual.is_finite() => {
                GqError::NonFinite {
                    what: "density residual",
                    value: residual,
                }
            }
            SolverError::DidNotConverge { iterations, .. } => GqError::Invariant {
                what: format!("density did not converge in {iterations} steps"),
            },
            SolverError::Fluid(err) => err.into(),
        }
    }
}
