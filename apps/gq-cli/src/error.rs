//! CLI errors.

use gq_eos::EosError;
use gq_fluids::FluidError;
use gq_solver::SolverError;
use std::path::PathBuf;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Line {line}: {what}")]
    Parse { line: usize, what: String },

    #[error("Missing input value: {what}")]
    Missing { what: &'static str },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),

    #[error("{0}")]
    Eos(#[from] EosError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
