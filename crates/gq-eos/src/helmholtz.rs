//! Reduced Helmholtz-energy derivative sums A0..A3.
//!
//! All four are stateless sums over the 58 rows at a given reduced density σ
//! and reduced temperature τ. The density solver only needs A0 and A1, so
//! those are also available on their own.

use crate::table::{TERM_TABLE, TermRow};
use crate::terms::CoefficientVectors;
use gq_core::units::constants::REFERENCE_TEMPERATURE_K;
use serde::Serialize;

/// Row-local factors shared by every sum.
struct RowFactors {
    /// a σ^b τ^{-u}
    t: f64,
    /// exp(-c σ^k)
    e: f64,
    /// b - c k σ^k
    h: f64,
    /// σ^k
    sk: f64,
}

#[inline]
fn factors(row: &TermRow, sigma: f64, tau: f64) -> RowFactors {
    let sk = sigma.powf(row.k);
    RowFactors {
        t: row.a * sigma.powf(row.b) * tau.powf(-row.u),
        e: (-row.c * sk).exp(),
        h: row.b - row.c * row.k * sk,
        sk,
    }
}

fn rows<'a>(
    cv: &'a CoefficientVectors,
    sigma: f64,
    tau: f64,
) -> impl Iterator<Item = (&'static TermRow, RowFactors, f64, f64)> + 'a {
    TERM_TABLE
        .iter()
        .enumerate()
        .map(move |(n, row)| (row, factors(row, sigma, tau), cv.d[n], cv.u[n]))
}

/// `A0 = Σ t (b D + h U e)`; Z = 1 + A0.
pub fn a0(sigma: f64, tau: f64, cv: &CoefficientVectors) -> f64 {
    rows(cv, sigma, tau)
        .map(|(row, r, d, u)| r.t * (row.b * d + r.h * u * r.e))
        .sum()
}

/// `A1 = Σ t ((b+1) b D + (h (h+1) − c k² σ^k) U e)`.
pub fn a1(sigma: f64, tau: f64, cv: &CoefficientVectors) -> f64 {
    rows(cv, sigma, tau)
        .map(|(row, r, d, u)| {
            r.t * ((row.b + 1.0) * row.b * d
                + (r.h * (r.h + 1.0) - row.c * row.k.powi(2) * r.sk) * u * r.e)
        })
        .sum()
}

/// `A2 = Σ t (1 − u)(b D + h U e)`.
pub fn a2(sigma: f64, tau: f64, cv: &CoefficientVectors) -> f64 {
    rows(cv, sigma, tau)
        .map(|(row, r, d, u)| r.t * (1.0 - row.u) * (row.b * d + r.h * u * r.e))
        .sum()
}

/// `A3 = Σ t u (1 − u)(D + U e)`.
pub fn a3(sigma: f64, tau: f64, cv: &CoefficientVectors) -> f64 {
    rows(cv, sigma, tau)
        .map(|(row, r, d, u)| r.t * row.u * (1.0 - row.u) * (d + u * r.e))
        .sum()
}

/// All four derivative sums at one (σ, τ).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HelmholtzSums {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub a3: f64,
}

impl HelmholtzSums {
    pub fn evaluate(sigma: f64, tau: f64, cv: &CoefficientVectors) -> Self {
        Self {
            a0: a0(sigma, tau, cv),
            a1: a1(sigma, tau, cv),
            a2: a2(sigma, tau, cv),
            a3: a3(sigma, tau, cv),
        }
    }
}

/// τ = T / L_T
pub fn reduced_temperature(temperature_k: f64) -> f64 {
    temperature_k / REFERENCE_TEMPERATURE_K
}

/// π = p / p0m, both in MPa.
pub fn reduced_pressure(pressure_mpa: f64, reference_pressure_mpa: f64) -> f64 {
    pressure_mpa / reference_pressure_mpa
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mixing::MixtureParameters;
    use crate::table::TERM_COUNT;
    use gq_fluids::{Component, ComponentDatabase, Composition, MixtureContext, StatePoint};

    fn methane_vectors() -> CoefficientVectors {
        let ctx = MixtureContext::new(
            ComponentDatabase::standard(),
            Composition::pure(Component::Methane),
            StatePoint::from_mpa_k(1.0, 300.0).unwrap(),
        );
        let params = MixtureParameters::compute(&ctx);
        CoefficientVectors::expand(&ctx, &params)
    }

    #[test]
    fn sums_vanish_at_zero_density() {
        let cv = methane_vectors();
        let sums = HelmholtzSums::evaluate(0.0, 300.0, &cv);
        assert_eq!(sums.a0, 0.0);
        assert_eq!(sums.a1, 0.0);
        assert_eq!(sums.a2, 0.0);
        assert_eq!(sums.a3, 0.0);
    }

    #[test]
    fn a1_is_the_density_derivative_of_sigma_times_z() {
        // A1 = d(σ(1 + A0))/dσ − 1
        let cv = methane_vectors();
        let (sigma, tau) = (2.0, 300.0);
        let step = 1e-6;
        let f = |s: f64| s * (1.0 + a0(s, tau, &cv));
        let numeric = (f(sigma + step) - f(sigma - step)) / (2.0 * step) - 1.0;
        assert!((a1(sigma, tau, &cv) - numeric).abs() < 1e-6);
    }

    #[test]
    fn a2_is_the_temperature_derivative_of_z() {
        // τ ∂t/∂τ = −u t, so A2 = A0 + τ ∂A0/∂τ.
        let cv = methane_vectors();
        let (sigma, tau) = (2.0, 300.0);
        let step = 1e-4;
        let da0 = (a0(sigma, tau + step, &cv) - a0(sigma, tau - step, &cv)) / (2.0 * step);
        let expected = a0(sigma, tau, &cv) + tau * da0;
        assert!((a2(sigma, tau, &cv) - expected).abs() < 1e-8);
    }

    #[test]
    fn empty_vectors_give_ideal_gas() {
        let cv = CoefficientVectors {
            d: [0.0; TERM_COUNT],
            u: [0.0; TERM_COUNT],
        };
        assert_eq!(HelmholtzSums::evaluate(3.0, 250.0, &cv).a0, 0.0);
    }

    #[test]
    fn reduced_variables() {
        assert_eq!(reduced_temperature(288.15), 288.15);
        assert!((reduced_pressure(5.0, 0.0845) - 5.0 / 0.0845).abs() < 1e-12);
    }
}
