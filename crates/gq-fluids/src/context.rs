//! Mixture context: composition + state point + database handle.

use crate::catalog::{ComponentDatabase, ComponentRecord};
use crate::composition::Composition;
use crate::species::Component;
use crate::state::StatePoint;
use gq_core::units::{Pressure, Temperature};

/// Indexed view of a normalized composition at one state point.
///
/// The trace fold runs once in [`MixtureContext::new`]; every accessor after
/// that is a pure read. Binary factors are looked up by position so the
/// listing direction of the composition decides the direction of the lookup.
#[derive(Debug, Clone)]
pub struct MixtureContext<'db> {
    db: &'db ComponentDatabase,
    composition: Composition,
    state: StatePoint,
}

impl<'db> MixtureContext<'db> {
    pub fn new(db: &'db ComponentDatabase, mut composition: Composition, state: StatePoint) -> Self {
        let folded = composition.fold_trace_components();
        if !folded.is_empty() {
            tracing::warn!(?folded, "trace components folded into nitrogen");
        }
        Self {
            db,
            composition,
            state,
        }
    }

    /// Same (already normalized) mixture at another state point.
    pub fn with_state(&self, state: StatePoint) -> Self {
        Self {
            db: self.db,
            composition: self.composition.clone(),
            state,
        }
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn state(&self) -> StatePoint {
        self.state
    }

    pub fn pressure(&self) -> Pressure {
        self.state.pressure()
    }

    pub fn temperature(&self) -> Temperature {
        self.state.temperature()
    }

    pub fn pressure_mpa(&self) -> f64 {
        self.state.pressure_mpa()
    }

    pub fn temperature_k(&self) -> f64 {
        self.state.temperature_k()
    }

    pub fn len(&self) -> usize {
        self.composition.len()
    }

    pub fn is_empty(&self) -> bool {
        self.composition.is_empty()
    }

    pub fn fraction(&self, i: usize) -> f64 {
        self.composition.get(i).1
    }

    pub fn component(&self, i: usize) -> Component {
        self.composition.get(i).0
    }

    pub fn record(&self, i: usize) -> &'db ComponentRecord {
        self.db.record(self.component(i))
    }

    /// E*_ij; 1 on the diagonal, either listing direction otherwise.
    pub fn energy_factor(&self, i: usize, j: usize) -> f64 {
        if i == j {
            return 1.0;
        }
        self.db.energy(self.component(i), self.component(j))
    }

    /// G*_ij; 1 on the diagonal, either listing direction otherwise.
    pub fn orientation_factor(&self, i: usize, j: usize) -> f64 {
        if i == j {
            return 1.0;
        }
        self.db.orientation(self.component(i), self.component(j))
    }

    /// K*_ij in the direction (component i, component j) only.
    pub fn size_factor(&self, i: usize, j: usize) -> f64 {
        self.db.size(self.component(i), self.component(j))
    }

    /// U*_ij in the direction (component i, component j) only.
    pub fn volume_factor(&self, i: usize, j: usize) -> f64 {
        self.db.volume(self.component(i), self.component(j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(items: Vec<(Component, f64)>) -> MixtureContext<'static> {
        MixtureContext::new(
            ComponentDatabase::standard(),
            Composition::new(items).unwrap(),
            StatePoint::from_mpa_k(1.0, 300.0).unwrap(),
        )
    }

    #[test]
    fn construction_folds_trace_helium() {
        let ctx = context(vec![
            (Component::Methane, 0.9996),
            (Component::Helium, 0.0004),
        ]);
        assert_eq!(ctx.len(), 3);
        assert_eq!(ctx.component(2), Component::Nitrogen);
        assert_eq!(ctx.fraction(1), 0.0);
        assert_eq!(ctx.fraction(2), 0.0004);
    }

    #[test]
    fn with_state_does_not_fold_again() {
        let ctx = context(vec![
            (Component::Methane, 0.9996),
            (Component::Helium, 0.0004),
        ]);
        let other = ctx.with_state(StatePoint::from_mpa_k(5.0, 250.0).unwrap());
        assert_eq!(other.composition(), ctx.composition());
        assert!((other.pressure_mpa() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn diagonal_factors_are_one() {
        let ctx = context(vec![
            (Component::Methane, 0.9),
            (Component::CarbonDioxide, 0.1),
        ]);
        for i in 0..ctx.len() {
            assert_eq!(ctx.energy_factor(i, i), 1.0);
            assert_eq!(ctx.orientation_factor(i, i), 1.0);
            assert_eq!(ctx.size_factor(i, i), 1.0);
            assert_eq!(ctx.volume_factor(i, i), 1.0);
        }
    }

    #[test]
    fn listing_order_decides_size_direction() {
        let forward = context(vec![
            (Component::Methane, 0.9),
            (Component::Nitrogen, 0.1),
        ]);
        let reverse = context(vec![
            (Component::Nitrogen, 0.1),
            (Component::Methane, 0.9),
        ]);
        assert_eq!(forward.size_factor(0, 1), 1.003630);
        assert_eq!(reverse.size_factor(0, 1), 1.0);
        assert_eq!(forward.energy_factor(0, 1), reverse.energy_factor(0, 1));
        assert_eq!(forward.volume_factor(0, 1), 0.886106);
        assert_eq!(reverse.volume_factor(0, 1), 1.0);
    }
}
