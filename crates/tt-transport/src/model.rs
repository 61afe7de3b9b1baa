//! Model dispatch: from a fluid's [`TransportData`] and a state to viscosity
//! and thermal conductivity.

use serde::{Deserialize, Serialize};
use tracing::debug;
use tt_core::units::{
    Density, DynVisc, Pressure, Temperature, ThermalCond, k, kg_m3, pa, pa_s, w_per_m_k,
};
use tt_fluids::{FluidState, UpdatableState};
use tt_solver::NewtonConfig;

use crate::conductivity::critical::olchowy_sengers;
use crate::conductivity::{
    ConductivityCorrelation, ConductivityEcs, ConductivityModel,
    hardcoded as hardcoded_conductivity,
};
use crate::data::TransportData;
use crate::ecs::{self, EcsConductivity, EcsViscosity};
use crate::error::{TransportError, TransportResult, ensure_finite, require_pure};
use crate::viscosity::dilute::kinetic_theory;
use crate::viscosity::{
    ViscosityCorrelation, ViscosityEcs, ViscosityModel, hardcoded as hardcoded_viscosity,
};

/// Caller-owned scratch reference fluid for ECS models.
///
/// The state is moved during every ECS evaluation; it must not be shared
/// between concurrent evaluations.
pub struct ReferenceFluid<'r> {
    pub state: &'r mut dyn UpdatableState,
    pub data: &'r TransportData,
}

/// Typed summary of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportProperties {
    pub temperature: Temperature,
    pub density: Density,
    pub pressure: Pressure,
    /// `None` when the fluid has no viscosity model
    pub viscosity: Option<DynVisc>,
    pub conductivity: Option<ThermalCond>,
}

pub struct TransportModel<'a> {
    data: &'a TransportData,
    reference: Option<ReferenceFluid<'a>>,
    solver: NewtonConfig,
}

impl<'a> TransportModel<'a> {
    pub fn new(data: &'a TransportData) -> Self {
        Self {
            data,
            reference: None,
            solver: NewtonConfig::default(),
        }
    }

    /// Reference fluid used by ECS models.
    pub fn with_reference(mut self, reference: ReferenceFluid<'a>) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Conformal-state solver settings used by ECS models.
    pub fn with_solver_config(mut self, config: NewtonConfig) -> Self {
        self.solver = config;
        self
    }

    pub fn data(&self) -> &'a TransportData {
        self.data
    }

    fn viscosity_model(&self) -> TransportResult<&'a ViscosityModel> {
        self.data
            .viscosity
            .as_ref()
            .ok_or(TransportError::MissingData { what: "viscosity model" })
    }

    fn conductivity_model(&self) -> TransportResult<&'a ConductivityModel> {
        self.data
            .conductivity
            .as_ref()
            .ok_or(TransportError::MissingData { what: "conductivity model" })
    }

    /// Total viscosity [Pa·s].
    pub fn viscosity(&mut self, state: &dyn FluidState) -> TransportResult<f64> {
        require_pure(state, "viscosity")?;
        let data = self.data;
        let eta = match self.viscosity_model()? {
            ViscosityModel::Hardcoded { fluid } => hardcoded_viscosity::evaluate(*fluid, state)?,
            ViscosityModel::Correlated(c) => {
                let dilute = c.dilute(state, data)?;
                dilute + c.background(state, data, dilute)?
            }
            ViscosityModel::Ecs(e) => self.solve_viscosity_ecs(state, e)?.total,
        };
        ensure_finite(eta, "viscosity")
    }

    /// Dilute-gas viscosity [Pa·s].
    pub fn viscosity_dilute(&self, state: &dyn FluidState) -> TransportResult<f64> {
        require_pure(state, "viscosity_dilute")?;
        let data = self.data;
        match self.viscosity_model()? {
            ViscosityModel::Correlated(c) => c.dilute(state, data),
            ViscosityModel::Ecs(_) => kinetic_theory(state, data.epsilon_over_k, data.sigma_eta),
            ViscosityModel::Hardcoded { fluid } => Err(TransportError::UnsupportedConfiguration {
                what: format!("hardcoded {fluid:?} viscosity has no separate dilute term"),
            }),
        }
    }

    /// Viscosity minus its dilute-gas part [Pa·s].
    pub fn viscosity_background(&mut self, state: &dyn FluidState) -> TransportResult<f64> {
        require_pure(state, "viscosity_background")?;
        let data = self.data;
        match self.viscosity_model()? {
            ViscosityModel::Correlated(c) => {
                let dilute = c.dilute(state, data)?;
                c.background(state, data, dilute)
            }
            ViscosityModel::Ecs(e) => Ok(self.solve_viscosity_ecs(state, e)?.background()),
            ViscosityModel::Hardcoded { fluid } => Err(TransportError::UnsupportedConfiguration {
                what: format!("hardcoded {fluid:?} viscosity has no separate background term"),
            }),
        }
    }

    /// Full ECS breakdown of the viscosity.
    pub fn viscosity_ecs(&mut self, state: &dyn FluidState) -> TransportResult<EcsViscosity> {
        require_pure(state, "viscosity_ECS")?;
        match self.viscosity_model()? {
            ViscosityModel::Ecs(e) => self.solve_viscosity_ecs(state, e),
            _ => Err(TransportError::UnsupportedConfiguration {
                what: "viscosity model is not ECS".to_string(),
            }),
        }
    }

    fn solve_viscosity_ecs(
        &mut self,
        state: &dyn FluidState,
        ecs: &ViscosityEcs,
    ) -> TransportResult<EcsViscosity> {
        let Some(reference) = self.reference.as_mut() else {
            return Err(missing_reference("viscosity"));
        };
        let reference_data = reference.data;
        let correlation = reference_viscosity(reference_data)?;
        ecs::viscosity(
            state,
            self.data,
            ecs,
            &mut *reference.state,
            |r| {
                let dilute = correlation.dilute(r, reference_data)?;
                correlation.background(r, reference_data, dilute)
            },
            &self.solver,
        )
    }

    /// Total thermal conductivity [W/(m·K)].
    pub fn conductivity(&mut self, state: &dyn FluidState) -> TransportResult<f64> {
        require_pure(state, "conductivity")?;
        let lambda = match self.conductivity_model()? {
            ConductivityModel::Hardcoded { fluid } => {
                hardcoded_conductivity::evaluate(*fluid, state, || self.viscosity(state))?
            }
            ConductivityModel::Correlated(c) => {
                let dilute = c.dilute.evaluate(state, || self.viscosity_dilute(state))?;
                let residual = c.background(state)?;
                let critical = c.critical(state, || self.viscosity(state))?;
                dilute + residual + critical
            }
            ConductivityModel::Ecs(e) => self.solve_conductivity_ecs(state, e)?.total,
        };
        ensure_finite(lambda, "conductivity")
    }

    /// Conductivity minus its dilute and critical parts [W/(m·K)].
    pub fn conductivity_background(&mut self, state: &dyn FluidState) -> TransportResult<f64> {
        require_pure(state, "conductivity_background")?;
        match self.conductivity_model()? {
            ConductivityModel::Correlated(c) => c.background(state),
            ConductivityModel::Ecs(e) => {
                let Some(reference) = self.reference.as_mut() else {
                    return Err(missing_reference("conductivity"));
                };
                let correlation = reference_conductivity(reference.data)?;
                let r = ecs::conductivity(
                    state,
                    self.data,
                    e,
                    &mut *reference.state,
                    |r| correlation.background(r),
                    &self.solver,
                )?;
                Ok(r.background())
            }
            ConductivityModel::Hardcoded { fluid } => Err(TransportError::UnsupportedConfiguration {
                what: format!("hardcoded {fluid:?} conductivity has no separate background term"),
            }),
        }
    }

    /// Critical enhancement [W/(m·K)].
    pub fn conductivity_critical(&mut self, state: &dyn FluidState) -> TransportResult<f64> {
        require_pure(state, "conductivity_critical")?;
        match self.conductivity_model()? {
            ConductivityModel::Correlated(c) => c.critical(state, || self.viscosity(state)),
            ConductivityModel::Ecs(e) => {
                olchowy_sengers(state, &e.critical, || self.viscosity(state))
            }
            ConductivityModel::Hardcoded { fluid } => Err(TransportError::UnsupportedConfiguration {
                what: format!("hardcoded {fluid:?} conductivity has no separate critical term"),
            }),
        }
    }

    /// Full ECS breakdown of the conductivity, critical term included.
    pub fn conductivity_ecs(&mut self, state: &dyn FluidState) -> TransportResult<EcsConductivity> {
        require_pure(state, "conductivity_ECS")?;
        match self.conductivity_model()? {
            ConductivityModel::Ecs(e) => self.solve_conductivity_ecs(state, e),
            _ => Err(TransportError::UnsupportedConfiguration {
                what: "conductivity model is not ECS".to_string(),
            }),
        }
    }

    fn solve_conductivity_ecs(
        &mut self,
        state: &dyn FluidState,
        ecs: &ConductivityEcs,
    ) -> TransportResult<EcsConductivity> {
        let mut result = {
            let Some(reference) = self.reference.as_mut() else {
                return Err(missing_reference("conductivity"));
            };
            let correlation = reference_conductivity(reference.data)?;
            ecs::conductivity(
                state,
                self.data,
                ecs,
                &mut *reference.state,
                |r| correlation.background(r),
                &self.solver,
            )?
        };
        // Needs the fluid's own viscosity, which may move the reference again.
        result.critical = olchowy_sengers(state, &ecs.critical, || self.viscosity(state))?;
        result.total = ensure_finite(result.total + result.critical, "ECS conductivity")?;
        Ok(result)
    }

    /// Temperature, pressure and whichever properties the fluid has models for.
    pub fn evaluate(&mut self, state: &dyn FluidState) -> TransportResult<TransportProperties> {
        require_pure(state, "evaluate")?;
        let viscosity = match self.data.viscosity {
            Some(_) => Some(self.viscosity(state)?),
            None => None,
        };
        let conductivity = match self.data.conductivity {
            Some(_) => Some(self.conductivity(state)?),
            None => None,
        };
        debug!(
            fluid = state.name(),
            t = state.temperature(),
            rhomolar = state.molar_density(),
            ?viscosity,
            ?conductivity,
            "transport properties"
        );
        Ok(TransportProperties {
            temperature: k(state.temperature()),
            density: kg_m3(state.mass_density()),
            pressure: pa(state.pressure()),
            viscosity: viscosity.map(pa_s),
            conductivity: conductivity.map(w_per_m_k),
        })
    }
}

fn missing_reference(property: &str) -> TransportError {
    TransportError::UnsupportedConfiguration {
        what: format!("ECS {property} needs a reference fluid"),
    }
}

/// Correlation providing the reference fluid's background viscosity.
fn reference_viscosity(data: &TransportData) -> TransportResult<&ViscosityCorrelation> {
    match &data.viscosity {
        Some(ViscosityModel::Correlated(c)) => Ok(c),
        Some(ViscosityModel::Ecs(_)) => Err(TransportError::UnsupportedConfiguration {
            what: "reference fluid viscosity cannot itself be ECS".to_string(),
        }),
        Some(ViscosityModel::Hardcoded { fluid }) => Err(TransportError::UnsupportedConfiguration {
            what: format!("hardcoded {fluid:?} viscosity cannot serve as ECS reference"),
        }),
        None => Err(TransportError::MissingData {
            what: "reference viscosity model",
        }),
    }
}

fn reference_conductivity(data: &TransportData) -> TransportResult<&ConductivityCorrelation> {
    match &data.conductivity {
        Some(ConductivityModel::Correlated(c)) => Ok(c),
        Some(ConductivityModel::Ecs(_)) => Err(TransportError::UnsupportedConfiguration {
            what: "reference fluid conductivity cannot itself be ECS".to_string(),
        }),
        Some(ConductivityModel::Hardcoded { fluid }) => {
            Err(TransportError::UnsupportedConfiguration {
                what: format!("hardcoded {fluid:?} conductivity cannot serve as ECS reference"),
            })
        }
        None => Err(TransportError::MissingData {
            what: "reference conductivity model",
        }),
    }
}
