//! Dilute-gas (zero-density) viscosity [Pa·s].

use serde::{Deserialize, Serialize};
use tt_core::numeric::power_sum;
use tt_fluids::FluidState;

use crate::error::{TransportError, TransportResult, require_pure};

/// Fit of the reduced collision integral S* = exp(Σ aᵢ (ln T*)^tᵢ).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionIntegralData {
    pub a: Vec<f64>,
    pub t: Vec<f64>,
    /// Leading constant, 26.692e-9 for the Chapman-Enskog form
    #[serde(rename = "C")]
    pub c: f64,
    /// Molar mass used by the fit [kg/mol]
    pub molar_mass: f64,
}

/// η₀ = Σ aᵢ T^tᵢ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowersOfTData {
    pub a: Vec<f64>,
    pub t: Vec<f64>,
}

/// η₀ = C √T / Σ aᵢ (T/T_red)^tᵢ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollisionIntegralPowersOfTstarData {
    pub a: Vec<f64>,
    pub t: Vec<f64>,
    #[serde(rename = "C")]
    pub c: f64,
    pub t_reducing: f64,
}

/// Neufeld, Janzen and Aziz (J. Chem. Phys. 57, 1972) empirical Ω(2,2)* for
/// the Lennard-Jones 12-6 potential.
pub fn neufeld_omega22(t_star: f64) -> f64 {
    1.16145 * t_star.powf(-0.14874)
        + 0.52487 * (-0.77320 * t_star).exp()
        + 2.16178 * (-2.43787 * t_star).exp()
}

fn check_lennard_jones(epsilon_over_k: f64, sigma: f64) -> TransportResult<()> {
    if epsilon_over_k > 0.0 && sigma > 0.0 {
        Ok(())
    } else {
        Err(TransportError::MissingData {
            what: "positive epsilon_over_k and sigma_eta",
        })
    }
}

/// Chapman-Enskog viscosity with the Neufeld collision integral.
///
/// `epsilon_over_k` in K, `sigma` in m.
pub fn kinetic_theory(
    state: &dyn FluidState,
    epsilon_over_k: f64,
    sigma: f64,
) -> TransportResult<f64> {
    require_pure(state, "viscosity_dilute_kinetic_theory")?;
    check_lennard_jones(epsilon_over_k, sigma)?;

    let t = state.temperature();
    let t_star = t / epsilon_over_k;
    let sigma_nm = sigma * 1e9;
    let molar_mass_kgkmol = state.molar_mass() * 1000.0;

    Ok(26.692e-9 * (molar_mass_kgkmol * t).sqrt()
        / (sigma_nm.powi(2) * neufeld_omega22(t_star)))
}

/// Chapman-Enskog form with a fluid-specific collision integral fit.
///
/// Ω(2,2) and S* share the same form, related by Ω(2,2) = (5/4) S*; the
/// constant `C` absorbs the difference.
pub fn collision_integral(
    state: &dyn FluidState,
    epsilon_over_k: f64,
    sigma: f64,
    data: &CollisionIntegralData,
) -> TransportResult<f64> {
    require_pure(state, "viscosity_dilute_collision_integral")?;
    check_lennard_jones(epsilon_over_k, sigma)?;

    let t = state.temperature();
    let ln_t_star = (t / epsilon_over_k).ln();
    let sigma_nm = sigma * 1e9;
    let molar_mass_kgkmol = data.molar_mass * 1000.0;

    let s = power_sum(&data.a, &data.t, ln_t_star).exp();
    Ok(data.c * (molar_mass_kgkmol * t).sqrt() / (sigma_nm.powi(2) * s))
}

pub fn powers_of_t(state: &dyn FluidState, data: &PowersOfTData) -> TransportResult<f64> {
    require_pure(state, "viscosity_dilute_powers_of_T")?;
    Ok(power_sum(&data.a, &data.t, state.temperature()))
}

pub fn collision_integral_powers_of_tstar(
    state: &dyn FluidState,
    data: &CollisionIntegralPowersOfTstarData,
) -> TransportResult<f64> {
    require_pure(state, "viscosity_dilute_collision_integral_powers_of_T")?;
    let t = state.temperature();
    let summer = power_sum(&data.a, &data.t, t / data.t_reducing);
    Ok(data.c * t.sqrt() / summer)
}

/// Ethane, Friend et al. (JPCRD 20, 1991).
pub fn ethane(state: &dyn FluidState) -> TransportResult<f64> {
    require_pure(state, "viscosity_dilute_ethane")?;
    const C: [f64; 9] = [
        -3.0328138281,
        16.918880086,
        -37.189364917,
        41.288861858,
        -24.615921140,
        8.9488430959,
        -1.8739245042,
        0.20966101390,
        -9.6570437074e-3,
    ];
    let t_star = state.temperature() / 245.0;
    let omega22: f64 = C
        .iter()
        .enumerate()
        .map(|(i, c)| c * t_star.powf(i as f64 / 3.0 - 1.0))
        .sum();
    Ok(12.0085 * t_star.sqrt() * omega22 / 1e6)
}

/// Cyclohexane, Tariq et al. (JPCRD 43, 2014).
pub fn cyclohexane(state: &dyn FluidState) -> TransportResult<f64> {
    require_pure(state, "viscosity_dilute_cyclohexane")?;
    let t = state.temperature();
    // [nm²]
    let s_eta = (-1.5093 + 364.87 / t - 39537.0 / t.powi(2)).exp();
    Ok(0.19592 * t.sqrt() / s_eta / 1e6)
}
