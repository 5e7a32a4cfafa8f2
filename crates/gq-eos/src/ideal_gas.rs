//! Ideal-gas isobaric heat capacity of the mixture, reduced by R.

use gq_fluids::{HeatCapacityCoefficients, MixtureContext};

/// `x / sinh(x)`, continuous at 0.
#[inline]
fn over_sinh(x: f64) -> f64 {
    if x == 0.0 { 1.0 } else { x / x.sinh() }
}

#[inline]
fn over_cosh(x: f64) -> f64 {
    x / x.cosh()
}

/// Ratio `scale / T`, or 0 when the coefficient carries no term.
#[inline]
fn ratio(scale: f64, temperature_k: f64) -> f64 {
    if scale == 0.0 { 0.0 } else { scale / temperature_k }
}

/// cp0/R of one component at temperature T [K].
pub fn component_heat_capacity(cp: &HeatCapacityCoefficients, temperature_k: f64) -> f64 {
    let t = temperature_k;
    cp.b + cp.c * over_sinh(ratio(cp.d, t)).powi(2)
        + cp.e * over_cosh(ratio(cp.f, t)).powi(2)
        + cp.g * over_sinh(ratio(cp.h, t)).powi(2)
        + cp.i * over_cosh(ratio(cp.j, t)).powi(2)
}

/// cp0r = Σ x_i cp0_i/R at the context temperature.
pub fn reduced_ideal_heat_capacity(ctx: &MixtureContext<'_>) -> f64 {
    let t = ctx.temperature_k();
    (0..ctx.len())
        .map(|i| ctx.fraction(i) * component_heat_capacity(&ctx.record(i).cp0, t))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gq_fluids::{Component, ComponentDatabase, Composition, StatePoint};

    fn at(component: Component, t: f64) -> f64 {
        let ctx = MixtureContext::new(
            ComponentDatabase::standard(),
            Composition::pure(component),
            StatePoint::from_mpa_k(0.1, t).unwrap(),
        );
        reduced_ideal_heat_capacity(&ctx)
    }

    #[test]
    fn helium_is_monatomic() {
        assert_eq!(at(Component::Helium, 300.0), 2.5);
        assert_eq!(at(Component::Helium, 1000.0), 2.5);
    }

    #[test]
    fn methane_near_ambient() {
        // cp0 of methane at 300 K is about 35.7 J/(mol·K), i.e. ~4.3 R.
        let cp = at(Component::Methane, 300.0);
        assert!((4.2..4.4).contains(&cp), "cp0r = {cp}");
    }

    #[test]
    fn heat_capacity_grows_with_temperature() {
        assert!(at(Component::Ethane, 350.0) > at(Component::Ethane, 250.0));
    }

    #[test]
    fn limits() {
        assert_eq!(over_sinh(0.0), 1.0);
        assert!((over_sinh(1e-8) - 1.0).abs() < 1e-12);
        assert_eq!(over_cosh(0.0), 0.0);
        assert_eq!(ratio(0.0, 300.0), 0.0);
    }
}
