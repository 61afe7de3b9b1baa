//! Transport properties for thermotransport.
//!
//! Viscosity and thermal conductivity of pure and pseudo-pure fluids from a
//! [`FluidState`](tt_fluids::FluidState):
//! - Correlation library, selected per fluid by serde-tagged enums
//!   ([`ViscosityModel`], [`ConductivityModel`])
//! - Extended corresponding states onto a caller-owned reference fluid ([`ecs`])
//! - Dispatch and typed summaries ([`TransportModel`])
//! - Parallel evaluation over many states ([`evaluate_batch`])

pub mod batch;
pub mod conductivity;
pub mod data;
pub mod ecs;
pub mod error;
pub mod model;
pub mod viscosity;

pub use batch::{BatchReference, evaluate_batch};
pub use conductivity::{
    ConductivityCorrelation, ConductivityCritical, ConductivityDilute, ConductivityEcs,
    ConductivityModel, ConductivityResidual, HardcodedConductivity, OlchowySengersData,
};
pub use data::TransportData;
pub use ecs::{EcsConductivity, EcsVariables, EcsViscosity};
pub use error::{TransportError, TransportResult, require_pure};
pub use model::{ReferenceFluid, TransportModel, TransportProperties};
pub use viscosity::{
    HardcodedViscosity, ViscosityCorrelation, ViscosityDilute, ViscosityEcs,
    ViscosityHigherOrder, ViscosityInitialDensity, ViscosityModel,
};
