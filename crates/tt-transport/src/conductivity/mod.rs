//! Thermal conductivity correlations and their discriminators.
//!
//! A correlated conductivity is dilute + residual + critical. Several terms
//! depend on the fluid's own viscosity; those are handed a closure so the
//! viscosity is only computed when a term actually reads it.

pub mod critical;
pub mod dilute;
pub mod hardcoded;
pub mod residual;

use serde::{Deserialize, Serialize};
use tt_fluids::FluidState;

use crate::error::TransportResult;

pub use critical::OlchowySengersData;
pub use dilute::{Eta0AndPolyData, RatioOfPolynomialsData};
pub use hardcoded::HardcodedConductivity;
pub use residual::{ResidualPolynomialAndExponentialData, ResidualPolynomialData};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConductivityDilute {
    RatioOfPolynomials(RatioOfPolynomialsData),
    Eta0AndPoly(Eta0AndPolyData),
    Co2,
    Ethane,
}

impl ConductivityDilute {
    /// `eta_dilute` yields the fluid's dilute-gas viscosity [Pa·s].
    pub fn evaluate<D>(&self, state: &dyn FluidState, eta_dilute: D) -> TransportResult<f64>
    where
        D: FnOnce() -> TransportResult<f64>,
    {
        match self {
            Self::RatioOfPolynomials(c) => dilute::ratio_of_polynomials(state, c),
            Self::Eta0AndPoly(c) => dilute::eta0_and_poly(state, c, eta_dilute()?),
            Self::Co2 => dilute::co2(state),
            Self::Ethane => dilute::ethane(state, eta_dilute()?),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConductivityResidual {
    Polynomial(ResidualPolynomialData),
    PolynomialAndExponential(ResidualPolynomialAndExponentialData),
}

impl ConductivityResidual {
    pub fn evaluate(&self, state: &dyn FluidState) -> TransportResult<f64> {
        match self {
            Self::Polynomial(c) => residual::polynomial(state, c),
            Self::PolynomialAndExponential(c) => residual::polynomial_and_exponential(state, c),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConductivityCritical {
    SimplifiedOlchowySengers(OlchowySengersData),
    R123,
    #[serde(rename = "co2_scalabrin_2006")]
    Co2Scalabrin2006,
    Ammonia,
}

impl ConductivityCritical {
    /// `viscosity` yields the fluid's total viscosity [Pa·s].
    pub fn evaluate<V>(&self, state: &dyn FluidState, viscosity: V) -> TransportResult<f64>
    where
        V: FnOnce() -> TransportResult<f64>,
    {
        match self {
            Self::SimplifiedOlchowySengers(c) => critical::olchowy_sengers(state, c, viscosity),
            Self::R123 => critical::r123(state),
            Self::Co2Scalabrin2006 => critical::co2_scalabrin(state),
            Self::Ammonia => critical::ammonia(state),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConductivityCorrelation {
    pub dilute: ConductivityDilute,
    #[serde(default)]
    pub residual: Option<ConductivityResidual>,
    #[serde(default)]
    pub critical: Option<ConductivityCritical>,
}

impl ConductivityCorrelation {
    /// Residual contribution, zero when the record has none.
    pub fn background(&self, state: &dyn FluidState) -> TransportResult<f64> {
        match &self.residual {
            Some(term) => term.evaluate(state),
            None => Ok(0.0),
        }
    }

    pub fn critical<V>(&self, state: &dyn FluidState, viscosity: V) -> TransportResult<f64>
    where
        V: FnOnce() -> TransportResult<f64>,
    {
        match &self.critical {
            Some(term) => term.evaluate(state, viscosity),
            None => Ok(0.0),
        }
    }
}

/// Extended corresponding states parameters for conductivity.
///
/// ψ(ρ/ρ_red) = Σ aᵢ (ρ/ρ_red)^tᵢ corrects the conformal density and
/// f_int(T/T_red) = Σ aᵢ (T/T_red)^tᵢ scales the internal-energy contribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConductivityEcs {
    pub psi_a: Vec<f64>,
    pub psi_t: Vec<f64>,
    pub psi_rhomolar_reducing: f64,
    pub f_int_a: Vec<f64>,
    pub f_int_t: Vec<f64>,
    pub f_int_t_reducing: f64,
    /// Critical enhancement of the fluid of interest
    #[serde(default)]
    pub critical: OlchowySengersData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ConductivityModel {
    Hardcoded { fluid: HardcodedConductivity },
    Correlated(ConductivityCorrelation),
    Ecs(ConductivityEcs),
}
