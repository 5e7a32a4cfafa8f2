//! One-fluid mixing rules.
//!
//! Cross terms enumerate each unordered pair once (i < j, in listing order)
//! and double the contribution where the rule calls for it. Size and volume
//! factors are looked up in that (i, j) direction.

use gq_core::units::constants::{GAS_CONSTANT, REFERENCE_TEMPERATURE_K};
use gq_fluids::MixtureContext;
use serde::Serialize;

/// Unordered index pairs (i, j) with i < j.
pub(crate) fn upper_pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
}

/// Fraction-weighted sum of a per-component quantity.
fn weighted(ctx: &MixtureContext<'_>, value: impl Fn(usize) -> f64) -> f64 {
    (0..ctx.len()).map(|i| ctx.fraction(i) * value(i)).sum()
}

/// `Σ_{i<j} x_i x_j (K*_ij^5 − 1)(K_i K_j)^{5/2}`
pub(crate) fn size_cross_sum(ctx: &MixtureContext<'_>) -> f64 {
    upper_pairs(ctx.len())
        .map(|(i, j)| {
            ctx.fraction(i)
                * ctx.fraction(j)
                * (ctx.size_factor(i, j).powi(5) - 1.0)
                * (ctx.record(i).size * ctx.record(j).size).powf(2.5)
        })
        .sum()
}

/// Mixture size parameter Kx [(m³/kmol)^1/3].
///
/// `Kx^5 = (Σ x_i K_i^{5/2})² + 2 Σ_{i<j} x_i x_j (K*_ij^5 − 1)(K_i K_j)^{5/2}`
pub fn size_parameter(ctx: &MixtureContext<'_>) -> f64 {
    let linear = weighted(ctx, |i| ctx.record(i).size.powf(2.5));
    (linear.powi(2) + 2.0 * size_cross_sum(ctx)).powf(0.2)
}

/// Reference pressure p0m [MPa] for a size parameter.
pub fn reference_pressure(kx: f64) -> f64 {
    1e-3 * kx.powi(-3) * GAS_CONSTANT * REFERENCE_TEMPERATURE_K
}

/// Molar mass [kg/kmol].
pub fn molar_mass(ctx: &MixtureContext<'_>) -> f64 {
    weighted(ctx, |i| ctx.record(i).molar_mass)
}

/// Orientation parameter `G = Σ x_i G_i + Σ_{i<j} x_i x_j (G*_ij − 1)(G_i + G_j)`.
pub fn orientation(ctx: &MixtureContext<'_>) -> f64 {
    let linear = weighted(ctx, |i| ctx.record(i).orientation);
    let cross: f64 = upper_pairs(ctx.len())
        .map(|(i, j)| {
            ctx.fraction(i)
                * ctx.fraction(j)
                * (ctx.orientation_factor(i, j) - 1.0)
                * (ctx.record(i).orientation + ctx.record(j).orientation)
        })
        .sum();
    linear + cross
}

/// Quadrupole parameter `Q = Σ x_i Q_i`; the expansion uses `Q²`.
pub fn quadrupole(ctx: &MixtureContext<'_>) -> f64 {
    weighted(ctx, |i| ctx.record(i).quadrupole)
}

/// High-temperature parameter `F = Σ x_i² F_i`.
pub fn high_temperature(ctx: &MixtureContext<'_>) -> f64 {
    (0..ctx.len())
        .map(|i| ctx.fraction(i).powi(2) * ctx.record(i).high_temperature)
        .sum()
}

/// Mixture energy parameter V [K].
///
/// `V^5 = (Σ x_i E_i^{5/2})² + 2 Σ_{i<j} x_i x_j (U*_ij^5 − 1)(E_i E_j)^{5/2}`
pub fn energy(ctx: &MixtureContext<'_>) -> f64 {
    let linear = weighted(ctx, |i| ctx.record(i).energy.powf(2.5));
    let cross: f64 = upper_pairs(ctx.len())
        .map(|(i, j)| {
            ctx.fraction(i)
                * ctx.fraction(j)
                * (ctx.volume_factor(i, j).powi(5) - 1.0)
                * (ctx.record(i).energy * ctx.record(j).energy).powf(2.5)
        })
        .sum();
    (linear.powi(2) + 2.0 * cross).powf(0.2)
}

/// Scalar mixture parameters; independent of the state point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MixtureParameters {
    /// Size parameter Kx [(m³/kmol)^1/3]
    pub kx: f64,
    /// Reference pressure p0m [MPa]
    pub reference_pressure: f64,
    /// Molar mass [kg/kmol]
    pub molar_mass: f64,
    /// Orientation parameter G
    pub orientation: f64,
    /// Quadrupole parameter Q
    pub quadrupole: f64,
    /// High-temperature parameter F
    pub high_temperature: f64,
    /// Energy parameter V [K]
    pub energy: f64,
}

impl MixtureParameters {
    pub fn compute(ctx: &MixtureContext<'_>) -> Self {
        let kx = size_parameter(ctx);
        let params = Self {
            kx,
            reference_pressure: reference_pressure(kx),
            molar_mass: molar_mass(ctx),
            orientation: orientation(ctx),
            quadrupole: quadrupole(ctx),
            high_temperature: high_temperature(ctx),
            energy: energy(ctx),
        };
        tracing::debug!(
            kx = params.kx,
            p0m = params.reference_pressure,
            molar_mass = params.molar_mass,
            "mixture parameters"
        );
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gq_fluids::{Component, ComponentDatabase, Composition, StatePoint};

    fn context(items: Vec<(Component, f64)>) -> MixtureContext<'static> {
        MixtureContext::new(
            ComponentDatabase::standard(),
            Composition::new(items).unwrap(),
            StatePoint::from_mpa_k(1.0, 300.0).unwrap(),
        )
    }

    #[test]
    fn pure_component_reduces_to_its_own_parameters() {
        let ctx = context(vec![(Component::Methane, 1.0)]);
        let rec = ComponentDatabase::standard().record(Component::Methane);
        let p = MixtureParameters::compute(&ctx);
        assert!((p.kx - rec.size).abs() < 1e-12);
        assert!((p.energy - rec.energy).abs() < 1e-9);
        assert!((p.molar_mass - rec.molar_mass).abs() < 1e-12);
        assert_eq!(p.orientation, 0.0);
    }

    #[test]
    fn reference_pressure_scales_with_inverse_volume() {
        let kx = 0.5;
        let expected = 1e-3 * GAS_CONSTANT / 0.125;
        assert!((reference_pressure(kx) - expected).abs() < 1e-15);
    }

    #[test]
    fn neutral_pairs_give_plain_mean() {
        // Methane/ethane has no listed pair: Kx^{5/2} is the linear mean.
        let ctx = context(vec![(Component::Methane, 0.7), (Component::Ethane, 0.3)]);
        let db = ComponentDatabase::standard();
        let mean = 0.7 * db.record(Component::Methane).size.powf(2.5)
            + 0.3 * db.record(Component::Ethane).size.powf(2.5);
        assert_eq!(size_cross_sum(&ctx), 0.0);
        assert!((size_parameter(&ctx).powf(2.5) - mean).abs() < 1e-12);
    }

    #[test]
    fn quadrupole_and_high_temperature_weighting() {
        let ctx = context(vec![
            (Component::Methane, 0.5),
            (Component::CarbonDioxide, 0.5),
        ]);
        assert!((quadrupole(&ctx) - 0.5 * 0.69).abs() < 1e-12);
        assert_eq!(high_temperature(&ctx), 0.0);
    }

    #[test]
    fn orientation_cross_term_uses_both_directions() {
        let forward = context(vec![
            (Component::Methane, 0.5),
            (Component::CarbonDioxide, 0.5),
        ]);
        let reverse = context(vec![
            (Component::CarbonDioxide, 0.5),
            (Component::Methane, 0.5),
        ]);
        let expected = 0.5 * 0.189065 + 0.25 * (0.807653 - 1.0) * 0.189065;
        assert!((orientation(&forward) - expected).abs() < 1e-12);
        assert!((orientation(&reverse) - expected).abs() < 1e-12);
    }

    #[test]
    fn upper_pairs_enumerates_each_pair_once() {
        let pairs: Vec<_> = upper_pairs(4).collect();
        assert_eq!(pairs.len(), 6);
        assert_eq!(pairs[0], (0, 1));
        assert_eq!(pairs[5], (2, 3));
        assert!(upper_pairs(1).next().is_none());
    }
}
