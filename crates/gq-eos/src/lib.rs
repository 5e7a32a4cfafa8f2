//! gq-eos: the AGA8-DC92 style equation of state for natural gas.
//!
//! Data flow for one mixture:
//!
//! 1. [`mixing`] reduces the composition to scalar mixture parameters
//!    (size parameter Kx, reference pressure, molar mass, G, Q, F, V).
//! 2. [`terms`] expands them against the universal 58-row [`table`] into the
//!    mixture-specific coefficient vectors D and U.
//! 3. [`helmholtz`] evaluates the dimensionless sums A0..A3 at a reduced
//!    density and temperature; the density solver iterates on A0/A1.
//! 4. [`derived`], [`ideal_gas`] and [`viscosity`] turn a converged reduced
//!    density into engineering properties.
//!
//! Everything here is a pure function of a `MixtureContext` and the constant
//! tables. No iteration happens in this crate.

pub mod derived;
pub mod error;
pub mod helmholtz;
pub mod ideal_gas;
pub mod mixing;
pub mod table;
pub mod terms;
pub mod viscosity;

pub use derived::{SoundProperties, compressibility, mass_density};
pub use error::{EosError, EosResult};
pub use helmholtz::{HelmholtzSums, reduced_pressure, reduced_temperature};
pub use ideal_gas::reduced_ideal_heat_capacity;
pub use mixing::MixtureParameters;
pub use table::{TERM_COUNT, TERM_TABLE, TermRow};
pub use terms::CoefficientVectors;
pub use viscosity::{ExcessViscosityTable, ViscosityReport};
