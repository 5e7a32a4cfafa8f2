//! Thermodynamic state point definitions.

use crate::error::{FluidError, FluidResult};
use gq_core::units::{Pressure, Temperature, celsius, k, mpa, to_k, to_mpa};

/// Pressure and temperature at which a mixture is evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatePoint {
    p: Pressure,
    t: Temperature,
}

impl StatePoint {
    /// Create a state point from pressure and temperature.
    ///
    /// Validates that pressure and temperature are positive and finite.
    pub fn new(p: Pressure, t: Temperature) -> FluidResult<Self> {
        let p_val = to_mpa(p);
        if !p_val.is_finite() || p_val <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }

        let t_val = to_k(t);
        if !t_val.is_finite() || t_val <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }

        Ok(Self { p, t })
    }

    /// Absolute pressure in MPa and temperature in K.
    pub fn from_mpa_k(p_mpa: f64, t_k: f64) -> FluidResult<Self> {
        Self::new(mpa(p_mpa), k(t_k))
    }

    /// Absolute pressure in MPa and temperature in °C.
    pub fn from_mpa_celsius(p_mpa: f64, t_c: f64) -> FluidResult<Self> {
        Self::new(mpa(p_mpa), celsius(t_c))
    }

    pub fn pressure(&self) -> Pressure {
        self.p
    }

    pub fn temperature(&self) -> Temperature {
        self.t
    }

    pub fn pressure_mpa(&self) -> f64 {
        to_mpa(self.p)
    }

    pub fn temperature_k(&self) -> f64 {
        to_k(self.t)
    }
}
