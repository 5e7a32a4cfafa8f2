//! Equation-of-state errors.

use gq_fluids::FluidError;
use thiserror::Error;

pub type EosResult<T> = Result<T, EosError>;

#[derive(Error, Debug)]
pub enum EosError {
    #[error("Invalid excess viscosity table: {what}")]
    Table { what: String },

    #[error("Failed to parse excess viscosity table: {0}")]
    TableJson(#[from] serde_json::Error),

    #[error("Failed to parse excess viscosity table: {0}")]
    TableYaml(#[from] serde_yaml::Error),

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),
}
