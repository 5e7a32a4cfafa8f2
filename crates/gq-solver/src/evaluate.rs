//! Full property evaluation for one mixture at one state point.

use crate::density::{DensityConfig, SigmaStep, solve_density};
use crate::error::SolverResult;
use gq_core::units::Density;
use gq_eos::{
    CoefficientVectors, ExcessViscosityTable, HelmholtzSums, MixtureParameters, SoundProperties,
    ViscosityReport, compressibility, mass_density,
};
use gq_fluids::{Component, MixtureContext};
use serde::Serialize;

/// Everything computed for one state point, intermediate results included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GasReport {
    pub pressure_mpa: f64,
    pub temperature_k: f64,
    /// Composition after the trace fold, in listing order
    pub composition: Vec<(Component, f64)>,
    pub kx: f64,
    pub reference_pressure_mpa: f64,
    /// Molar mass [kg/kmol]
    pub molar_mass: f64,
    pub coefficients: CoefficientVectors,
    pub initial_sigma: f64,
    pub reduced_pressure: f64,
    pub reduced_temperature: f64,
    pub iterations: Vec<SigmaStep>,
    pub sigma: f64,
    pub helmholtz: HelmholtzSums,
    pub density: Density,
    pub compressibility: f64,
    pub sound: SoundProperties,
    pub viscosity: Option<ViscosityReport>,
}

impl GasReport {
    pub fn density_kg_m3(&self) -> f64 {
        use uom::si::mass_density::kilogram_per_cubic_meter;
        self.density.get::<kilogram_per_cubic_meter>()
    }
}

/// Solve for density and derive every property except viscosity.
pub fn evaluate(ctx: &MixtureContext<'_>, config: &DensityConfig) -> SolverResult<GasReport> {
    let params = MixtureParameters::compute(ctx);
    let coefficients = CoefficientVectors::expand(ctx, &params);
    let solution = solve_density(
        &params,
        &coefficients,
        ctx.pressure_mpa(),
        ctx.temperature_k(),
        config,
    )?;

    let helmholtz =
        HelmholtzSums::evaluate(solution.sigma, solution.reduced_temperature, &coefficients);
    let sound = SoundProperties::compute(ctx, &helmholtz, params.molar_mass);

    Ok(GasReport {
        pressure_mpa: ctx.pressure_mpa(),
        temperature_k: ctx.temperature_k(),
        composition: ctx.composition().iter().collect(),
        kx: params.kx,
        reference_pressure_mpa: params.reference_pressure,
        molar_mass: params.molar_mass,
        coefficients,
        initial_sigma: solution.initial_sigma,
        reduced_pressure: solution.reduced_pressure,
        reduced_temperature: solution.reduced_temperature,
        iterations: solution.steps,
        sigma: solution.sigma,
        helmholtz,
        density: mass_density(params.molar_mass, params.kx, solution.sigma),
        compressibility: compressibility(helmholtz.a0),
        sound,
        viscosity: None,
    })
}

/// [`evaluate`], then the viscosity path with the given excess table.
pub fn evaluate_with_viscosity(
    ctx: &MixtureContext<'_>,
    config: &DensityConfig,
    table: &ExcessViscosityTable,
) -> SolverResult<GasReport> {
    let mut report = evaluate(ctx, config)?;
    report.viscosity = Some(ViscosityReport::compute(
        ctx,
        report.molar_mass,
        report.density,
        table,
    ));
    Ok(report)
}
