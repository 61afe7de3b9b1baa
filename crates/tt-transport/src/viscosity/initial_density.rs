//! Initial density dependence of viscosity.

use serde::{Deserialize, Serialize};
use tt_core::numeric::power_sum;
use tt_core::units::constants::AVOGADRO;
use tt_fluids::FluidState;

use crate::error::{TransportResult, require_pure};

/// Reduced second viscosity virial coefficient B*η = Σ bᵢ T*^tᵢ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RainwaterFriendData {
    pub b: Vec<f64>,
    pub t: Vec<f64>,
}

impl RainwaterFriendData {
    /// Vogel et al. (Int. J. Thermophys. 21, 2000) universal coefficients.
    pub fn vogel() -> Self {
        Self {
            b: vec![
                -19.572881,
                219.73999,
                -1015.3226,
                2471.0125,
                -3375.1717,
                2491.6597,
                -787.26086,
                14.085455,
                -0.34664158,
            ],
            t: vec![0.0, -0.25, -0.5, -0.75, -1.0, -1.25, -1.5, -2.5, -5.5],
        }
    }
}

/// Σ nᵢ δ^dᵢ τ^tᵢ with its own reducing state, after Tariq et al. (JPCRD 43, 2014).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpiricalInitialDensityData {
    pub n: Vec<f64>,
    pub d: Vec<f64>,
    pub t: Vec<f64>,
    pub t_reducing: f64,
    pub rhomolar_reducing: f64,
}

/// Second viscosity virial coefficient B_η [m³/mol].
pub fn rainwater_friend_b(
    state: &dyn FluidState,
    epsilon_over_k: f64,
    sigma: f64,
    data: &RainwaterFriendData,
) -> TransportResult<f64> {
    require_pure(state, "viscosity_initial_density_dependence_Rainwater_Friend")?;
    let t_star = state.temperature() / epsilon_over_k;
    let b_eta_star = power_sum(&data.b, &data.t, t_star);
    Ok(AVOGADRO * sigma.powi(3) * b_eta_star)
}

/// η₀·B_η·ρ [Pa·s], given the dilute viscosity η₀ [Pa·s].
pub fn rainwater_friend(
    state: &dyn FluidState,
    epsilon_over_k: f64,
    sigma: f64,
    data: &RainwaterFriendData,
    eta_dilute: f64,
) -> TransportResult<f64> {
    let b_eta = rainwater_friend_b(state, epsilon_over_k, sigma, data)?;
    Ok(eta_dilute * b_eta * state.molar_density())
}

/// Initial density contribution [Pa·s].
pub fn empirical(
    state: &dyn FluidState,
    data: &EmpiricalInitialDensityData,
) -> TransportResult<f64> {
    require_pure(state, "viscosity_initial_density_dependence_empirical")?;
    let tau = data.t_reducing / state.temperature();
    let delta = state.molar_density() / data.rhomolar_reducing;
    Ok(data
        .n
        .iter()
        .zip(&data.d)
        .zip(&data.t)
        .map(|((n, d), t)| n * delta.powf(*d) * tau.powf(*t))
        .sum())
}
