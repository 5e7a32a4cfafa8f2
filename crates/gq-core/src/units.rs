//! SI quantity aliases and the constructors used at crate boundaries.

use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity, MassDensity as UomMassDensity,
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
    Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type DynVisc = UomDynamicViscosity;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;

#[inline]
pub fn mpa(v: f64) -> Pressure {
    use uom::si::pressure::megapascal;
    Pressure::new::<megapascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn kg_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn micro_pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::micropascal_second;
    DynVisc::new::<micropascal_second>(v)
}

#[inline]
pub fn to_mpa(p: Pressure) -> f64 {
    use uom::si::pressure::megapascal;
    p.get::<megapascal>()
}

#[inline]
pub fn to_k(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

pub mod constants {
    /// Universal gas constant [kJ/(kmol·K)].
    pub const GAS_CONSTANT: f64 = 8.31451;

    /// Reducing temperature of the equation of state [K].
    pub const REFERENCE_TEMPERATURE_K: f64 = 1.0;

    /// Fold threshold for helium and hydrogen (mole fraction).
    pub const TRACE_FRACTION: f64 = 0.0005;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn megapascal_round_trip() {
        use uom::si::pressure::pascal;
        assert!((to_mpa(mpa(5.0)) - 5.0).abs() < 1e-12);
        assert!((mpa(0.101_325).get::<pascal>() - 101_325.0).abs() < 1e-6);
    }

    #[test]
    fn derived_quantities_keep_their_units() {
        use uom::si::dynamic_viscosity::micropascal_second;
        use uom::si::mass_density::kilogram_per_cubic_meter;
        use uom::si::velocity::meter_per_second;
        assert_eq!(kg_m3(36.9).get::<kilogram_per_cubic_meter>(), 36.9);
        assert_eq!(mps(430.0).get::<meter_per_second>(), 430.0);
        assert!((micro_pa_s(11.1).get::<micropascal_second>() - 11.1).abs() < 1e-12);
    }

    #[test]
    fn celsius_is_offset_kelvin() {
        assert!((to_k(celsius(26.85)) - 300.0).abs() < 1e-9);
    }
}
