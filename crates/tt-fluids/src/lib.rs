//! tt-fluids: thermodynamic state access for thermotransport.
//!
//! Provides:
//! - Composition handling (pure, pseudo-pure, mixtures)
//! - The [`FluidState`] / [`UpdatableState`] traits that transport correlations read from
//! - A reduced Helmholtz-energy equation of state ([`HelmholtzFluid`], [`HelmholtzState`])
//! - Ready-made fluids (methane, ethane, nitrogen) for tests and demos
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tt_fluids::{Composition, FluidState, HelmholtzFluid, HelmholtzState, IdealHelmholtz,
//!     ReducingState, ResidualTerm, ValidityLimits};
//!
//! let fluid = HelmholtzFluid {
//!     name: "Toy".into(),
//!     composition: Composition::pure("Toy"),
//!     molar_mass: 0.016,
//!     gas_constant: 8.314472,
//!     reducing: ReducingState { temperature: 190.0, molar_density: 10_000.0, pressure: 4.6e6 },
//!     critical_temperature: 190.0,
//!     critical_molar_density: 10_000.0,
//!     residual: vec![ResidualTerm::power(-0.5, 1.0, 1.0)],
//!     ideal: IdealHelmholtz::constant_cp(4.0),
//!     limits: ValidityLimits::default(),
//! };
//! let state = HelmholtzState::new(Arc::new(fluid), 100.0, 300.0).unwrap();
//! assert!(state.compressibility_factor() < 1.0);
//! ```

pub mod composition;
pub mod error;
pub mod helmholtz;
mod model;
pub mod state;

pub mod fixtures;

pub use composition::Composition;
pub use error::{FluidError, FluidResult};
pub use helmholtz::{HelmholtzFluid, HelmholtzState, IdealHelmholtz, ResidualTerm, ValidityLimits};
pub use state::{FluidState, ReducingState, UpdatableState};
