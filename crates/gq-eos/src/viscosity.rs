//! Dynamic viscosity of the real gas: dilute-gas mixture plus an excess term
//! in pseudocritical reduced coordinates.
//!
//! The eight-row excess correlation (c, r, t) is reference data loaded by the
//! caller, see [`ExcessViscosityTable`].

use crate::error::{EosError, EosResult};
use gq_core::units::constants::GAS_CONSTANT;
use gq_core::units::{Density, DynVisc, micro_pa_s};
use gq_fluids::MixtureContext;
use serde::{Deserialize, Serialize};
use uom::si::mass_density::kilogram_per_cubic_meter;

pub const EXCESS_ROWS: usize = 8;

/// Offsets σ°_k of the transform parameters φ_k.
const PHI_OFFSET: [f64; 6] = [1.0, 1.0, 0.0, 1.0, 0.0, 1.0];

/// Coefficients of `Δμ = Σ c_n (φ0 ω^φ1 τ^φ2)^r_n (φ3 ω^φ4 τ^φ5)^(−t_n)`.
///
/// ```
/// use gq_eos::ExcessViscosityTable;
///
/// let table = ExcessViscosityTable::from_yaml_str(
///     "c: [0.1, 0, 0, 0, 0, 0, 0, 0]\n\
///      r: [1, 0, 0, 0, 0, 0, 0, 0]\n\
///      t: [0, 0, 0, 0, 0, 0, 0, 0]\n",
/// )
/// .unwrap();
/// assert_eq!(table.c[0], 0.1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcessViscosityTable {
    pub c: [f64; EXCESS_ROWS],
    pub r: [f64; EXCESS_ROWS],
    pub t: [f64; EXCESS_ROWS],
}

impl ExcessViscosityTable {
    pub fn from_json_str(text: &str) -> EosResult<Self> {
        let table: Self = serde_json::from_str(text)?;
        table.validate()?;
        Ok(table)
    }

    pub fn from_yaml_str(text: &str) -> EosResult<Self> {
        let table: Self = serde_yaml::from_str(text)?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> EosResult<()> {
        for (name, column) in [("c", &self.c), ("r", &self.r), ("t", &self.t)] {
            if let Some(n) = column.iter().position(|v| !v.is_finite()) {
                return Err(EosError::Table {
                    what: format!("{name}[{n}] is not finite"),
                });
            }
        }
        Ok(())
    }

    /// Excess term Δμ at reduced density ω and reduced temperature τ.
    pub fn excess(&self, phi: &[f64; 6], omega: f64, tau: f64) -> f64 {
        let first = phi[0] * omega.powf(phi[1]) * tau.powf(phi[2]);
        let second = phi[3] * omega.powf(phi[4]) * tau.powf(phi[5]);
        (0..EXCESS_ROWS)
            .map(|n| self.c[n] * first.powf(self.r[n]) * second.powf(-self.t[n]))
            .sum()
    }
}

/// `(V_i^{1/3} + V_j^{1/3})³` for every ordered pair, `V = M / ρc` [m³/kmol].
fn covolumes(ctx: &MixtureContext<'_>) -> Vec<f64> {
    let n = ctx.len();
    let roots: Vec<f64> = (0..n)
        .map(|i| {
            let rec = ctx.record(i);
            (rec.molar_mass / rec.critical_density).cbrt()
        })
        .collect();
    let mut out = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            out.push((roots[i] + roots[j]).powi(3));
        }
    }
    out
}

/// Pseudocritical molar density [kmol/m³].
pub fn pseudocritical_density(ctx: &MixtureContext<'_>) -> f64 {
    let n = ctx.len();
    let cov = covolumes(ctx);
    let mut sum = 0.0;
    for i in 0..n {
        for j in 0..n {
            sum += ctx.fraction(i) * ctx.fraction(j) * cov[i * n + j];
        }
    }
    1.0 / (0.125 * sum)
}

/// Pseudocritical temperature [K].
pub fn pseudocritical_temperature(ctx: &MixtureContext<'_>, rho_pc: f64) -> f64 {
    let n = ctx.len();
    let cov = covolumes(ctx);
    let mut sum = 0.0;
    for i in 0..n {
        let tci = ctx.record(i).critical_temperature;
        for j in 0..n {
            let tcj = ctx.record(j).critical_temperature;
            sum += ctx.fraction(i) * ctx.fraction(j) * cov[i * n + j] * (tci * tcj).sqrt();
        }
    }
    0.125 * rho_pc * sum
}

/// Pseudocritical pressure [MPa].
pub fn pseudocritical_pressure(ctx: &MixtureContext<'_>, rho_pc: f64, t_pc: f64) -> f64 {
    let acentric: f64 = (0..ctx.len())
        .map(|i| ctx.fraction(i) * ctx.record(i).pitzer)
        .sum();
    1e-3 * GAS_CONSTANT * rho_pc * t_pc * (0.291 - 0.08 * acentric)
}

/// Transform parameters φ_k = σ°_k + Σ x_i d_ik.
pub fn transform_parameters(ctx: &MixtureContext<'_>) -> [f64; 6] {
    let mut phi = PHI_OFFSET;
    for i in 0..ctx.len() {
        let d = &ctx.record(i).transform;
        for (k, p) in phi.iter_mut().enumerate() {
            *p += ctx.fraction(i) * d[k];
        }
    }
    phi
}

/// Dilute-gas viscosity of each component [µPa·s], cubic in T/100.
pub fn dilute_component_viscosities(ctx: &MixtureContext<'_>) -> Vec<f64> {
    let reduced = ctx.temperature_k() / 100.0;
    (0..ctx.len())
        .map(|i| {
            ctx.record(i)
                .dilute_viscosity
                .iter()
                .rev()
                .fold(0.0, |acc, a| acc * reduced + a)
        })
        .collect()
}

/// Wilke mixing of the component dilute-gas viscosities [µPa·s].
pub fn dilute_mixture_viscosity(ctx: &MixtureContext<'_>, mu0: &[f64]) -> f64 {
    let n = ctx.len();
    let mut total = 0.0;
    for i in 0..n {
        let xi = ctx.fraction(i);
        if xi == 0.0 {
            continue;
        }
        let mi = ctx.record(i).molar_mass;
        let mut denominator = 0.0;
        for j in 0..n {
            let mj = ctx.record(j).molar_mass;
            let num = (1.0 + (mu0[i] / mu0[j]).sqrt() * (mj / mi).powf(0.25)).powi(2);
            denominator += ctx.fraction(j) * num / (8.0 * (1.0 + mi / mj)).sqrt();
        }
        total += xi * mu0[i] / denominator;
    }
    total
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViscosityReport {
    /// ρ_pc [kmol/m³]
    pub pseudocritical_density: f64,
    /// T_pc [K]
    pub pseudocritical_temperature: f64,
    /// p_pc [MPa]
    pub pseudocritical_pressure: f64,
    /// ω_m
    pub reduced_density: f64,
    /// τ_m
    pub reduced_temperature: f64,
    pub transform: [f64; 6],
    /// Per-component dilute-gas viscosity [µPa·s], in listing order
    pub dilute_components: Vec<f64>,
    /// Mixture dilute-gas viscosity μ0 [µPa·s]
    pub dilute: f64,
    /// Dimensionless excess Δμ
    pub excess: f64,
    pub viscosity: DynVisc,
}

impl ViscosityReport {
    pub fn compute(
        ctx: &MixtureContext<'_>,
        molar_mass: f64,
        density: Density,
        table: &ExcessViscosityTable,
    ) -> Self {
        let rho_pc = pseudocritical_density(ctx);
        let t_pc = pseudocritical_temperature(ctx, rho_pc);
        let p_pc = pseudocritical_pressure(ctx, rho_pc, t_pc);

        let molar_density = density.get::<kilogram_per_cubic_meter>() / molar_mass;
        let omega = molar_density / rho_pc;
        let tau = ctx.temperature_k() / t_pc;
        let phi = transform_parameters(ctx);

        let dilute_components = dilute_component_viscosities(ctx);
        let dilute = dilute_mixture_viscosity(ctx, &dilute_components);
        let excess = table.excess(&phi, omega, tau);
        let mu = dilute
            + 2.63094 * molar_mass.sqrt() * p_pc.powf(2.0 / 3.0) * t_pc.powf(-1.0 / 6.0) * excess;

        tracing::debug!(rho_pc, t_pc, p_pc, mu0 = dilute, delta_mu = excess, "viscosity");

        Self {
            pseudocritical_density: rho_pc,
            pseudocritical_temperature: t_pc,
            pseudocritical_pressure: p_pc,
            reduced_density: omega,
            reduced_temperature: tau,
            transform: phi,
            dilute_components,
            dilute,
            excess,
            viscosity: micro_pa_s(mu),
        }
    }
}
