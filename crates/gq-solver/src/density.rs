//! Newton iteration on the reduced density σ.

use crate::error::{SolverError, SolverResult};
use gq_core::numeric::relative_residual;
use gq_core::units::constants::GAS_CONSTANT;
use gq_eos::helmholtz::{a0, a1};
use gq_eos::{CoefficientVectors, MixtureParameters, reduced_pressure, reduced_temperature};
use serde::Serialize;

/// Density solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityConfig {
    /// Maximum Newton steps
    pub max_iterations: usize,
    /// Relative tolerance on the reduced pressure, |π_calc − π| / π
    pub rel_tol: f64,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            rel_tol: 1e-6,
        }
    }
}

impl DensityConfig {
    pub fn validate(&self) -> SolverResult<()> {
        if self.max_iterations == 0 {
            return Err(SolverError::InvalidConfig {
                what: "max_iterations must be at least 1".to_string(),
            });
        }
        if !(self.rel_tol.is_finite() && self.rel_tol > 0.0) {
            return Err(SolverError::InvalidConfig {
                what: format!("rel_tol must be positive, got {}", self.rel_tol),
            });
        }
        Ok(())
    }
}

/// One recorded Newton step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SigmaStep {
    /// Increment applied in this step
    pub delta: f64,
    /// σ after the increment
    pub sigma: f64,
    /// Reduced pressure recomputed at the new σ
    pub pi_calc: f64,
}

/// Converged reduced density and the path that led to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensitySolution {
    pub initial_sigma: f64,
    pub reduced_pressure: f64,
    pub reduced_temperature: f64,
    pub sigma: f64,
    pub residual: f64,
    pub steps: Vec<SigmaStep>,
}

/// Ideal-gas starting point `σ0 = 1000 p Kx³ / (R T)`.
pub fn initial_sigma(pressure_mpa: f64, temperature_k: f64, kx: f64) -> f64 {
    1e3 * pressure_mpa * kx.powi(3) / (GAS_CONSTANT * temperature_k)
}

/// Solve `π = σ τ (1 + A0(σ, τ))` for σ.
///
/// Every step is recorded, including the one that meets the tolerance.
/// Running out of steps, or producing a non-finite σ, returns
/// [`SolverError::DidNotConverge`] carrying the full trace.
pub fn solve_density(
    params: &MixtureParameters,
    cv: &CoefficientVectors,
    pressure_mpa: f64,
    temperature_k: f64,
    config: &DensityConfig,
) -> SolverResult<DensitySolution> {
    config.validate()?;

    let pi = reduced_pressure(pressure_mpa, params.reference_pressure);
    let tau = reduced_temperature(temperature_k);
    let sigma0 = initial_sigma(pressure_mpa, temperature_k, params.kx);

    let mut sigma = sigma0;
    let mut residual = f64::INFINITY;
    let mut steps = Vec::new();

    for iter in 0..config.max_iterations {
        let delta = (pi / tau - (1.0 + a0(sigma, tau, cv)) * sigma) / (1.0 + a1(sigma, tau, cv));
        sigma += delta;
        let pi_calc = sigma * tau * (1.0 + a0(sigma, tau, cv));
        residual = relative_residual(pi_calc, pi);
        steps.push(SigmaStep {
            delta,
            sigma,
            pi_calc,
        });

        tracing::debug!(iter, delta, sigma, pi_calc, residual, "sigma step");

        if !residual.is_finite() {
            break;
        }
        if residual < config.rel_tol {
            return Ok(DensitySolution {
                initial_sigma: sigma0,
                reduced_pressure: pi,
                reduced_temperature: tau,
                sigma,
                residual,
                steps,
            });
        }
    }

    tracing::warn!(
        iterations = steps.len(),
        residual,
        pressure_mpa,
        temperature_k,
        "density iteration did not converge"
    );
    Err(SolverError::DidNotConverge {
        iterations: steps.len(),
        residual,
        trace: steps,
    })
}
