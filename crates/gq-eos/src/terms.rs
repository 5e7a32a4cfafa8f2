//! Expansion of the mixture parameters into the coefficient vectors D and U.

use crate::mixing::MixtureParameters;
use crate::table::{MIXED_END, TERM_COUNT, TERM_TABLE, TermRow, VIRIAL_ONLY_END};
use gq_fluids::MixtureContext;
use serde::Serialize;

/// `(value + 1 − exponent)^exponent`, the switch pattern used by every property factor.
#[inline]
fn switched(value: f64, exponent: f64) -> f64 {
    (value + 1.0 - exponent).powf(exponent)
}

/// Mixture-specific coefficient vectors; computed once per composition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoefficientVectors {
    #[serde(with = "fixed")]
    pub d: [f64; TERM_COUNT],
    #[serde(with = "fixed")]
    pub u: [f64; TERM_COUNT],
}

// serde only derives for arrays up to 32 elements.
mod fixed {
    use super::TERM_COUNT;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(values: &[f64; TERM_COUNT], s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(values.iter())
    }
}

/// Per-pair quantities that do not depend on the row.
struct PairTable {
    n: usize,
    /// E_ij = E*_ij sqrt(E_i E_j)
    energy: Vec<f64>,
    /// G_ij = G*_ij (G_i + G_j) / 2
    orientation: Vec<f64>,
    /// x_i x_j (K_i K_j)^{3/2}
    weight: Vec<f64>,
}

impl PairTable {
    fn new(ctx: &MixtureContext<'_>) -> Self {
        let n = ctx.len();
        let mut energy = Vec::with_capacity(n * n);
        let mut orientation = Vec::with_capacity(n * n);
        let mut weight = Vec::with_capacity(n * n);
        for i in 0..n {
            let ri = ctx.record(i);
            for j in 0..n {
                let rj = ctx.record(j);
                energy.push(ctx.energy_factor(i, j) * (ri.energy * rj.energy).sqrt());
                orientation
                    .push(ctx.orientation_factor(i, j) * (ri.orientation + rj.orientation) / 2.0);
                weight.push(ctx.fraction(i) * ctx.fraction(j) * (ri.size * rj.size).powf(1.5));
            }
        }
        Self {
            n,
            energy,
            orientation,
            weight,
        }
    }
}

/// Pairwise row sum `b_n = Σ_i Σ_j x_i x_j B*_nij E_ij^u (K_i K_j)^{3/2}`.
fn pair_sum(ctx: &MixtureContext<'_>, pairs: &PairTable, row: &TermRow) -> f64 {
    let mut sum = 0.0;
    for i in 0..pairs.n {
        let ri = ctx.record(i);
        for j in 0..pairs.n {
            let rj = ctx.record(j);
            let at = i * pairs.n + j;
            let combination = switched(pairs.orientation[at], row.g)
                * switched(ri.quadrupole * rj.quadrupole, row.q)
                * switched((ri.high_temperature * rj.high_temperature).sqrt(), row.f)
                * switched(ri.dipole * rj.dipole, row.s)
                * switched(ri.association * rj.association, row.w);
            sum += pairs.weight[at] * combination * pairs.energy[at].powf(row.u);
        }
    }
    sum
}

/// Mixture-level row term `c_n = (G+1−g)^g (Q²+1−q)^q (F+1−f)^f V^u`.
fn mixture_term(params: &MixtureParameters, row: &TermRow) -> f64 {
    switched(params.orientation, row.g)
        * switched(params.quadrupole.powi(2), row.q)
        * switched(params.high_temperature, row.f)
        * params.energy.powf(row.u)
}

impl CoefficientVectors {
    pub fn expand(ctx: &MixtureContext<'_>, params: &MixtureParameters) -> Self {
        let pairs = PairTable::new(ctx);
        let inv_volume = params.kx.powi(-3);
        let mut d = [0.0; TERM_COUNT];
        let mut u = [0.0; TERM_COUNT];

        for (n, row) in TERM_TABLE.iter().enumerate() {
            let c = mixture_term(params, row);
            match n {
                0..=VIRIAL_ONLY_END => {
                    d[n] = pair_sum(ctx, &pairs, row) * inv_volume;
                    u[n] = 0.0;
                }
                _ if n <= MIXED_END => {
                    d[n] = pair_sum(ctx, &pairs, row) * inv_volume - c;
                    u[n] = c;
                }
                _ if n < TERM_COUNT => {
                    d[n] = 0.0;
                    u[n] = c;
                }
                _ => unreachable!("term row {n} outside 0..{TERM_COUNT}"),
            }
        }

        Self { d, u }
    }
}
