//! gq-fluids: natural-gas component data and mixture handling for gasquality.
//!
//! Provides:
//! - Component identifiers for the twelve supported natural-gas components
//! - The read-only component database (physical constants + binary interaction factors)
//! - Composition handling and the one-time trace component fold
//! - `MixtureContext`, the indexed view the equation of state works against
//!
//! # Example
//!
//! ```
//! use gq_fluids::{Component, ComponentDatabase, Composition, MixtureContext, StatePoint};
//!
//! let comp = Composition::new(vec![
//!     (Component::Methane, 0.97),
//!     (Component::Ethane, 0.02),
//!     (Component::Nitrogen, 0.01),
//! ])
//! .unwrap();
//! let state = StatePoint::from_mpa_k(5.0, 300.0).unwrap();
//! let ctx = MixtureContext::new(ComponentDatabase::standard(), comp, state);
//! assert_eq!(ctx.len(), 3);
//! ```

pub mod catalog;
pub mod composition;
pub mod context;
pub mod error;
pub mod species;
pub mod state;

// Re-exports for ergonomics
pub use catalog::{
    BinaryInteraction, ComponentDatabase, ComponentRecord, HeatCapacityCoefficients,
};
pub use composition::Composition;
pub use context::MixtureContext;
pub use error::{FluidError, FluidResult};
pub use species::Component;
pub use state::StatePoint;
