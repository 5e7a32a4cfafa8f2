//! Pressure × temperature grids evaluated in parallel.
//!
//! Every grid point reuses the already-folded composition of the base context
//! and runs its own density solve, so points are independent and the output
//! order is fixed regardless of scheduling.

use crate::density::DensityConfig;
use crate::error::{SolverError, SolverResult};
use crate::evaluate::{GasReport, evaluate};
use gq_fluids::{MixtureContext, StatePoint};
use rayon::prelude::*;
use std::fmt;

/// Spacing of sweep points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepType {
    Linear,
    Logarithmic,
}

/// One swept variable: bounds in MPa or K, point count and spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    pub fn new(start: f64, end: f64, num_points: usize, sweep_type: SweepType) -> SolverResult<Self> {
        if !(start.is_finite() && end.is_finite()) {
            return Err(SolverError::InvalidConfig {
                what: "sweep bounds must be finite".to_string(),
            });
        }
        if num_points == 0 {
            return Err(SolverError::InvalidConfig {
                what: "sweep must have at least 1 point".to_string(),
            });
        }
        if num_points > 1 && start == end {
            return Err(SolverError::InvalidConfig {
                what: "start and end values must be different".to_string(),
            });
        }
        if sweep_type == SweepType::Logarithmic && (start <= 0.0 || end <= 0.0) {
            return Err(SolverError::InvalidConfig {
                what: "logarithmic sweep needs positive bounds".to_string(),
            });
        }
        Ok(Self {
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    /// Single-valued sweep.
    pub fn fixed(value: f64) -> Self {
        Self {
            start: value,
            end: value,
            num_points: 1,
            sweep_type: SweepType::Linear,
        }
    }

    pub fn generate_points(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }
        let last = (self.num_points - 1) as f64;
        let mut points: Vec<f64> = match self.sweep_type {
            SweepType::Linear => {
                let delta = (self.end - self.start) / last;
                (0..self.num_points)
                    .map(|i| self.start + i as f64 * delta)
                    .collect()
            }
            SweepType::Logarithmic => {
                let (lo, hi) = (self.start.ln(), self.end.ln());
                let delta = (hi - lo) / last;
                (0..self.num_points)
                    .map(|i| (lo + i as f64 * delta).exp())
                    .collect()
            }
        };
        // Ensure exact endpoints
        points[0] = self.start;
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Logarithmic => write!(f, "logarithmic"),
        }
    }
}

/// Result at one grid node.
#[derive(Debug)]
pub struct GridPoint {
    pub pressure_mpa: f64,
    pub temperature_k: f64,
    pub result: SolverResult<GasReport>,
}

/// Evaluate every (p, T) combination, pressure-major.
pub fn run_grid(
    base: &MixtureContext<'_>,
    pressures: &SweepDefinition,
    temperatures: &SweepDefinition,
    config: &DensityConfig,
) -> Vec<GridPoint> {
    let ps = pressures.generate_points();
    let ts = temperatures.generate_points();
    let nodes: Vec<(f64, f64)> = ps
        .iter()
        .flat_map(|&p| ts.iter().map(move |&t| (p, t)))
        .collect();

    tracing::info!(
        points = nodes.len(),
        pressures = ps.len(),
        temperatures = ts.len(),
        "running state grid"
    );

    let points: Vec<GridPoint> = nodes
        .into_par_iter()
        .map(|(p, t)| GridPoint {
            pressure_mpa: p,
            temperature_k: t,
            result: StatePoint::from_mpa_k(p, t)
                .map_err(SolverError::from)
                .and_then(|state| evaluate(&base.with_state(state), config)),
        })
        .collect();

    let failed = points.iter().filter(|pt| pt.result.is_err()).count();
    if failed > 0 {
        tracing::warn!(failed, total = points.len(), "grid points failed");
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_points() {
        let sweep = SweepDefinition::new(250.0, 350.0, 5, SweepType::Linear).unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], 250.0);
        assert!((points[2] - 300.0).abs() < 1e-9);
        assert_eq!(points[4], 350.0);
    }

    #[test]
    fn logarithmic_points() {
        let sweep = SweepDefinition::new(0.1, 10.0, 3, SweepType::Logarithmic).unwrap();
        let points = sweep.generate_points();
        assert!((points[1] - 1.0).abs() < 1e-12);
        assert_eq!(points[2], 10.0);
    }

    #[test]
    fn fixed_sweep_is_single_point() {
        assert_eq!(SweepDefinition::fixed(5.0).generate_points(), vec![5.0]);
    }

    #[test]
    fn invalid_definitions() {
        assert!(SweepDefinition::new(1.0, 1.0, 3, SweepType::Linear).is_err());
        assert!(SweepDefinition::new(1.0, 2.0, 0, SweepType::Linear).is_err());
        assert!(SweepDefinition::new(0.0, 2.0, 3, SweepType::Logarithmic).is_err());
        assert!(SweepDefinition::new(f64::NAN, 2.0, 3, SweepType::Linear).is_err());
    }
}
