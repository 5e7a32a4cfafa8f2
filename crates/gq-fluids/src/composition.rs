//! Natural-gas composition (ordered component / mole fraction pairs).

use crate::error::{FluidError, FluidResult};
use crate::species::Component;
use gq_core::numeric::{Tolerances, nearly_equal};
use gq_core::units::constants::TRACE_FRACTION;

/// Ordered list of components and their mole fractions.
///
/// Fractions are expected to sum to 1 but this is not enforced: callers that
/// need the guarantee check [`Composition::is_normalized`]. Order only decides
/// which direction a pair is enumerated in, which matters for the
/// direction-sensitive binary factors.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    items: Vec<(Component, f64)>,
}

impl Composition {
    /// Create a pure-component composition.
    pub fn pure(component: Component) -> Self {
        Self {
            items: vec![(component, 1.0)],
        }
    }

    /// Create a composition from mole fractions.
    ///
    /// Rejects empty input, non-finite or negative fractions and components
    /// listed twice. Fractions are kept as given.
    pub fn new(fractions: Vec<(Component, f64)>) -> FluidResult<Self> {
        if fractions.is_empty() {
            return Err(FluidError::InvalidArg {
                what: "empty composition",
            });
        }

        for (i, (component, frac)) in fractions.iter().enumerate() {
            if !frac.is_finite() {
                return Err(FluidError::NonPhysical {
                    what: "non-finite mole fraction",
                });
            }
            if *frac < 0.0 {
                return Err(FluidError::NonPhysical {
                    what: "negative mole fraction",
                });
            }
            if fractions[..i].iter().any(|(c, _)| c == component) {
                return Err(FluidError::DuplicateComponent {
                    component: component.display_name(),
                });
            }
        }

        Ok(Self { items: fractions })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Component and fraction at position `i`.
    pub fn get(&self, i: usize) -> (Component, f64) {
        self.items[i]
    }

    /// Get mole fraction of a component (0.0 if not present).
    pub fn mole_fraction(&self, component: Component) -> f64 {
        self.position(component)
            .map(|i| self.items[i].1)
            .unwrap_or(0.0)
    }

    fn position(&self, component: Component) -> Option<usize> {
        self.items.iter().position(|(c, _)| *c == component)
    }

    /// Iterate over components in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (Component, f64)> + '_ {
        self.items.iter().copied()
    }

    /// Sum of all fractions.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|(_, f)| f).sum()
    }

    pub fn is_normalized(&self, tol: Tolerances) -> bool {
        nearly_equal(self.total(), 1.0, tol)
    }

    /// Move trace helium, then trace hydrogen, into nitrogen.
    ///
    /// A component present with `0 < x <= 0.0005` has its fraction added to
    /// nitrogen (appended at the end when absent) and is left in place with a
    /// zero fraction. Returns the components that were folded. Total fraction
    /// is unchanged and a second call is a no-op.
    pub fn fold_trace_components(&mut self) -> Vec<Component> {
        let mut folded = Vec::new();
        for trace in [Component::Helium, Component::Hydrogen] {
            let Some(i) = self.position(trace) else {
                continue;
            };
            let frac = self.items[i].1;
            if frac == 0.0 || frac > TRACE_FRACTION {
                continue;
            }
            match self.position(Component::Nitrogen) {
                Some(n) => self.items[n].1 += frac,
                None => self.items.push((Component::Nitrogen, frac)),
            }
            self.items[i].1 = 0.0;
            folded.push(trace);
        }
        folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-12,
            rel: 1e-12,
        }
    }

    #[test]
    fn pure_composition() {
        let comp = Composition::pure(Component::Methane);
        assert_eq!(comp.len(), 1);
        assert_eq!(comp.mole_fraction(Component::Methane), 1.0);
        assert_eq!(comp.mole_fraction(Component::Nitrogen), 0.0);
    }

    #[test]
    fn fractions_are_kept_as_given() {
        let comp =
            Composition::new(vec![(Component::Methane, 0.6), (Component::Ethane, 0.3)]).unwrap();
        assert_eq!(comp.mole_fraction(Component::Methane), 0.6);
        assert!(!comp.is_normalized(tol()));
    }

    #[test]
    fn invalid_negative_fraction() {
        let result =
            Composition::new(vec![(Component::Methane, -0.5), (Component::Ethane, 1.5)]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_non_finite() {
        let result = Composition::new(vec![(Component::Methane, f64::NAN)]);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_empty() {
        assert!(Composition::new(vec![]).is_err());
    }

    #[test]
    fn invalid_duplicate() {
        let result = Composition::new(vec![
            (Component::Methane, 0.5),
            (Component::Ethane, 0.2),
            (Component::Methane, 0.3),
        ]);
        assert_eq!(
            result.unwrap_err(),
            FluidError::DuplicateComponent {
                component: "Methane"
            }
        );
    }

    #[test]
    fn trace_helium_folds_into_existing_nitrogen() {
        let mut comp = Composition::new(vec![
            (Component::Methane, 0.9945),
            (Component::Nitrogen, 0.005),
            (Component::Helium, 0.0005),
        ])
        .unwrap();
        let folded = comp.fold_trace_components();
        assert_eq!(folded, vec![Component::Helium]);
        assert_eq!(comp.len(), 3);
        assert_eq!(comp.mole_fraction(Component::Helium), 0.0);
        assert!(nearly_equal(comp.mole_fraction(Component::Nitrogen), 0.0055, tol()));
        assert!(comp.is_normalized(tol()));
    }

    #[test]
    fn trace_components_create_single_nitrogen_entry() {
        let mut comp = Composition::new(vec![
            (Component::Methane, 0.9993),
            (Component::Helium, 0.0003),
            (Component::Hydrogen, 0.0004),
        ])
        .unwrap();
        let folded = comp.fold_trace_components();
        assert_eq!(folded, vec![Component::Helium, Component::Hydrogen]);
        assert_eq!(comp.len(), 4);
        assert_eq!(comp.get(3).0, Component::Nitrogen);
        assert!(nearly_equal(comp.get(3).1, 0.0007, tol()));
        assert!(comp.is_normalized(tol()));
    }

    #[test]
    fn non_trace_amounts_are_untouched() {
        let mut comp = Composition::new(vec![
            (Component::Methane, 0.9),
            (Component::Helium, 0.005),
            (Component::Hydrogen, 0.095),
        ])
        .unwrap();
        let before = comp.clone();
        assert!(comp.fold_trace_components().is_empty());
        assert_eq!(comp, before);
    }

    #[test]
    fn fold_is_idempotent() {
        let mut comp = Composition::new(vec![
            (Component::Methane, 0.9992),
            (Component::Helium, 0.0004),
            (Component::Hydrogen, 0.0004),
        ])
        .unwrap();
        comp.fold_trace_components();
        let once = comp.clone();
        assert!(comp.fold_trace_components().is_empty());
        assert_eq!(comp, once);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fold_preserves_total_and_is_idempotent(
            methane in 0.5_f64..1.0,
            nitrogen in prop::option::of(0.0_f64..0.05),
            helium in prop::option::of(0.0_f64..0.001),
            hydrogen in prop::option::of(0.0_f64..0.001),
        ) {
            let mut items = vec![(Component::Methane, methane)];
            if let Some(x) = helium {
                items.push((Component::Helium, x));
            }
            if let Some(x) = nitrogen {
                items.push((Component::Nitrogen, x));
            }
            if let Some(x) = hydrogen {
                items.push((Component::Hydrogen, x));
            }
            let mut comp = Composition::new(items).unwrap();
            let total = comp.total();

            comp.fold_trace_components();
            let tol = Tolerances { abs: 1e-12, rel: 1e-12 };
            prop_assert!(nearly_equal(comp.total(), total, tol));
            prop_assert!(comp.mole_fraction(Component::Helium) == 0.0
                || comp.mole_fraction(Component::Helium) > TRACE_FRACTION);
            prop_assert!(comp.mole_fraction(Component::Hydrogen) == 0.0
                || comp.mole_fraction(Component::Hydrogen) > TRACE_FRACTION);

            let once = comp.clone();
            prop_assert!(comp.fold_trace_components().is_empty());
            prop_assert_eq!(comp, once);
        }
    }
}
