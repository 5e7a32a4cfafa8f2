//! Engineering properties at a converged reduced density.

use crate::helmholtz::HelmholtzSums;
use crate::ideal_gas::reduced_ideal_heat_capacity;
use gq_core::units::constants::GAS_CONSTANT;
use gq_core::units::{Density, Velocity, kg_m3, mps};
use gq_fluids::MixtureContext;
use serde::Serialize;

/// Compressibility factor Z = 1 + A0.
#[inline]
pub fn compressibility(a0: f64) -> f64 {
    1.0 + a0
}

/// Mass density ρ = M · Kx⁻³ · σ.
pub fn mass_density(molar_mass: f64, kx: f64, sigma: f64) -> Density {
    kg_m3(molar_mass * kx.powi(-3) * sigma)
}

/// Caloric and acoustic properties of the real gas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoundProperties {
    /// Ideal-gas cp0 / R
    pub cp0r: f64,
    /// Isentropic exponent κ
    pub adiabatic_exponent: f64,
    pub speed_of_sound: Velocity,
}

impl SoundProperties {
    pub fn compute(ctx: &MixtureContext<'_>, sums: &HelmholtzSums, molar_mass: f64) -> Self {
        let cp0r = reduced_ideal_heat_capacity(ctx);
        // w² M / (R T) = κ Z
        let kappa_z = 1.0 + sums.a1 + (1.0 + sums.a2).powi(2) / (cp0r - 1.0 + sums.a3);
        let t = ctx.temperature_k();
        Self {
            cp0r,
            adiabatic_exponent: kappa_z / compressibility(sums.a0),
            speed_of_sound: mps((1000.0 * GAS_CONSTANT / molar_mass * t * kappa_z).sqrt()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gq_fluids::{Component, ComponentDatabase, Composition, StatePoint};
    use uom::si::mass_density::kilogram_per_cubic_meter;
    use uom::si::velocity::meter_per_second;

    fn value(d: Density) -> f64 {
        d.get::<kilogram_per_cubic_meter>()
    }

    #[test]
    fn density_scales_with_sigma() {
        let kx: f64 = 0.5;
        assert!((value(mass_density(16.0, kx, 0.25)) - 32.0).abs() < 1e-12);
        assert_eq!(value(mass_density(16.0, kx, 0.0)), 0.0);
    }

    #[test]
    fn ideal_limit_matches_kinetic_theory() {
        let ctx = MixtureContext::new(
            ComponentDatabase::standard(),
            Composition::pure(Component::Helium),
            StatePoint::from_mpa_k(0.1, 300.0).unwrap(),
        );
        let ideal = HelmholtzSums {
            a0: 0.0,
            a1: 0.0,
            a2: 0.0,
            a3: 0.0,
        };
        let m = ComponentDatabase::standard().record(Component::Helium).molar_mass;
        let sound = SoundProperties::compute(&ctx, &ideal, m);
        // Monatomic ideal gas: κ = 5/3
        assert!((sound.adiabatic_exponent - 5.0 / 3.0).abs() < 1e-12);
        let expected = (5.0 / 3.0 * 1000.0 * GAS_CONSTANT * 300.0 / m).sqrt();
        assert!((sound.speed_of_sound.get::<meter_per_second>() - expected).abs() < 1e-9);
    }

    #[test]
    fn compressibility_offsets_a0() {
        assert_eq!(compressibility(0.0), 1.0);
        assert_eq!(compressibility(-0.1), 0.9);
    }
}
