//! Viscosity correlations and their discriminators.
//!
//! A correlated viscosity is the sum of a dilute-gas term, an optional initial
//! density term and an optional higher-order term. Whole-fluid formulas and
//! extended corresponding states are separate model kinds.

pub mod dilute;
pub mod hardcoded;
pub mod higher_order;
pub mod initial_density;

use serde::{Deserialize, Serialize};
use tt_fluids::FluidState;

use crate::data::TransportData;
use crate::error::TransportResult;

pub use dilute::{CollisionIntegralData, CollisionIntegralPowersOfTstarData, PowersOfTData};
pub use hardcoded::HardcodedViscosity;
pub use higher_order::{BatschinskiHildebrandData, FrictionTheoryData};
pub use initial_density::{EmpiricalInitialDensityData, RainwaterFriendData};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViscosityDilute {
    /// Neufeld collision integral with the record's ε/k and σ
    KineticTheory,
    CollisionIntegral(CollisionIntegralData),
    PowersOfT(PowersOfTData),
    CollisionIntegralPowersOfTstar(CollisionIntegralPowersOfTstarData),
    Ethane,
    Cyclohexane,
}

impl ViscosityDilute {
    pub fn evaluate(&self, state: &dyn FluidState, data: &TransportData) -> TransportResult<f64> {
        match self {
            Self::KineticTheory => {
                dilute::kinetic_theory(state, data.epsilon_over_k, data.sigma_eta)
            }
            Self::CollisionIntegral(c) => {
                dilute::collision_integral(state, data.epsilon_over_k, data.sigma_eta, c)
            }
            Self::PowersOfT(c) => dilute::powers_of_t(state, c),
            Self::CollisionIntegralPowersOfTstar(c) => {
                dilute::collision_integral_powers_of_tstar(state, c)
            }
            Self::Ethane => dilute::ethane(state),
            Self::Cyclohexane => dilute::cyclohexane(state),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViscosityInitialDensity {
    RainwaterFriend(RainwaterFriendData),
    Empirical(EmpiricalInitialDensityData),
}

impl ViscosityInitialDensity {
    /// Contribution [Pa·s], given the dilute viscosity `eta_dilute` [Pa·s].
    pub fn evaluate(
        &self,
        state: &dyn FluidState,
        data: &TransportData,
        eta_dilute: f64,
    ) -> TransportResult<f64> {
        match self {
            Self::RainwaterFriend(c) => initial_density::rainwater_friend(
                state,
                data.epsilon_over_k,
                data.sigma_eta,
                c,
                eta_dilute,
            ),
            Self::Empirical(c) => initial_density::empirical(state, c),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViscosityHigherOrder {
    ModifiedBatschinskiHildebrand(BatschinskiHildebrandData),
    FrictionTheory(FrictionTheoryData),
    Hydrogen,
    Hexane,
    Heptane,
    Ethane,
    Benzene,
}

impl ViscosityHigherOrder {
    pub fn evaluate(&self, state: &dyn FluidState) -> TransportResult<f64> {
        match self {
            Self::ModifiedBatschinskiHildebrand(c) => {
                higher_order::modified_batschinski_hildebrand(state, c)
            }
            Self::FrictionTheory(c) => higher_order::friction_theory(state, c),
            Self::Hydrogen => higher_order::hydrogen(state),
            Self::Hexane => higher_order::hexane(state),
            Self::Heptane => higher_order::heptane(state),
            Self::Ethane => higher_order::ethane(state),
            Self::Benzene => higher_order::benzene(state),
        }
    }
}

/// Sum of independently selected contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViscosityCorrelation {
    pub dilute: ViscosityDilute,
    #[serde(default)]
    pub initial_density: Option<ViscosityInitialDensity>,
    #[serde(default)]
    pub higher_order: Option<ViscosityHigherOrder>,
}

/// Extended corresponding states correction ψ(ρ/ρ_red) = Σ aᵢ (ρ/ρ_red)^tᵢ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViscosityEcs {
    pub psi_a: Vec<f64>,
    pub psi_t: Vec<f64>,
    pub psi_rhomolar_reducing: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum ViscosityModel {
    Hardcoded { fluid: HardcodedViscosity },
    Correlated(ViscosityCorrelation),
    Ecs(ViscosityEcs),
}

impl ViscosityCorrelation {
    pub fn dilute(&self, state: &dyn FluidState, data: &TransportData) -> TransportResult<f64> {
        self.dilute.evaluate(state, data)
    }

    /// Initial density plus higher-order terms, given the dilute part.
    pub fn background(
        &self,
        state: &dyn FluidState,
        data: &TransportData,
        eta_dilute: f64,
    ) -> TransportResult<f64> {
        let initial = match &self.initial_density {
            Some(term) => term.evaluate(state, data, eta_dilute)?,
            None => 0.0,
        };
        let residual = match &self.higher_order {
            Some(term) => term.evaluate(state)?,
            None => 0.0,
        };
        Ok(initial + residual)
    }
}
