//! Density solver and property evaluation for natural-gas mixtures.
//!
//! The equation of state in `gq-eos` is explicit in density; this crate
//! inverts it for a given (p, T) with a scalar Newton iteration on the
//! reduced density, then assembles the full property report. Grids of state
//! points are evaluated in parallel by [`sweep`].

pub mod density;
pub mod error;
pub mod evaluate;
pub mod sweep;

pub use density::{DensityConfig, DensitySolution, SigmaStep, initial_sigma, solve_density};
pub use error::{SolverError, SolverResult};
pub use evaluate::{GasReport, evaluate, evaluate_with_viscosity};
pub use sweep::{GridPoint, SweepDefinition, SweepType, run_grid};
