//! Per-fluid transport coefficient record.

use serde::{Deserialize, Serialize};

use crate::conductivity::ConductivityModel;
use crate::viscosity::ViscosityModel;

/// Everything the correlations need about one fluid beyond its equation of state.
///
/// Loaded once per fluid and shared read-only by every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportData {
    /// Lennard-Jones well depth over Boltzmann's constant [K]
    pub epsilon_over_k: f64,
    /// Lennard-Jones collision diameter [m]
    pub sigma_eta: f64,
    #[serde(default)]
    pub viscosity: Option<ViscosityModel>,
    #[serde(default)]
    pub conductivity: Option<ConductivityModel>,
}

impl TransportData {
    pub fn new(epsilon_over_k: f64, sigma_eta: f64) -> Self {
        Self {
            epsilon_over_k,
            sigma_eta,
            viscosity: None,
            conductivity: None,
        }
    }

    pub fn with_viscosity(mut self, model: ViscosityModel) -> Self {
        self.viscosity = Some(model);
        self
    }

    pub fn with_conductivity(mut self, model: ConductivityModel) -> Self {
        self.conductivity = Some(model);
        self
    }
}
