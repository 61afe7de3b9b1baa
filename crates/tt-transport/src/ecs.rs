//! Extended corresponding states.
//!
//! The fluid of interest is mapped onto a reference fluid through the
//! conformal state (T₀, ρ₀). Dilute and critical terms come from the fluid of
//! interest itself; only the reference fluid's background is scaled:
//!
//! ```text
//! η = η₀ + η_bg,ref(ψ·ρ₀, T₀) · √f · h^(−2/3) · √(M/M₀)
//! λ = λ_int + λ₀ + λ_bg,ref(ψ·ρ₀, T₀) · √f · h^(−2/3) · √(M₀/M) + λ_crit
//! ```
//!
//! with f = T/T₀ and h = ρ₀/ρ after the solve.

use serde::{Deserialize, Serialize};
use tracing::debug;
use tt_core::numeric::power_sum;
use tt_fluids::{FluidState, UpdatableState};
use tt_solver::{ConformalState, ConformalTarget, NewtonConfig, solve_conformal_state};

use crate::conductivity::ConductivityEcs;
use crate::data::TransportData;
use crate::error::{TransportResult, ensure_finite, require_pure};
use crate::viscosity::ViscosityEcs;
use crate::viscosity::dilute::kinetic_theory;

/// Equivalent-substance reducing ratios and the conformal state behind them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcsVariables {
    /// Shape factors; no shape-factor fit is performed, so both stay at 1.
    pub theta: f64,
    pub phi: f64,
    /// T/T₀
    pub f: f64,
    /// ρ₀/ρ, molar
    pub h: f64,
    pub conformal: ConformalState,
    /// Density correction ψ applied to ρ₀ before the reference background
    pub psi: f64,
    pub iterations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcsViscosity {
    pub variables: EcsVariables,
    /// Kinetic theory for the fluid of interest [Pa·s]
    pub dilute: f64,
    /// Background of the reference at (ψ·ρ₀, T₀) [Pa·s]
    pub reference_background: f64,
    /// F_η
    pub scaling: f64,
    pub total: f64,
}

impl EcsViscosity {
    /// Scaled reference background [Pa·s].
    pub fn background(&self) -> f64 {
        self.reference_background * self.scaling
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcsConductivity {
    pub variables: EcsVariables,
    pub f_int: f64,
    /// [W/(m·K)]
    pub internal: f64,
    pub dilute: f64,
    pub reference_background: f64,
    /// F_λ
    pub scaling: f64,
    pub critical: f64,
    pub total: f64,
}

impl EcsConductivity {
    pub fn background(&self) -> f64 {
        self.reference_background * self.scaling
    }
}

/// Solve for the conformal state and leave `reference` at (ψ·ρ₀, T₀).
fn map_onto_reference(
    state: &dyn FluidState,
    reference: &mut dyn UpdatableState,
    psi: f64,
    config: &NewtonConfig,
) -> TransportResult<EcsVariables> {
    let theta = 1.0;
    let phi = 1.0;

    let f = state.critical_temperature() / reference.critical_temperature() * theta;
    let h = reference.critical_molar_density() / state.critical_molar_density() * phi;
    let guess = ConformalState {
        temperature: state.temperature() / f,
        molar_density: state.molar_density() * h,
    };

    let solution = solve_conformal_state(ConformalTarget::of(state), reference, guess, config)?;
    let conformal = solution.state;
    reference.update_dmolar_t(psi * conformal.molar_density, conformal.temperature)?;

    Ok(EcsVariables {
        theta,
        phi,
        f: state.temperature() / conformal.temperature,
        h: conformal.molar_density / state.molar_density(),
        conformal,
        psi,
        iterations: solution.iterations,
    })
}

/// ECS viscosity of `state`.
///
/// `reference_background` is called once, with `reference` already moved to
/// (ψ·ρ₀, T₀), and returns the reference fluid's background viscosity [Pa·s].
pub fn viscosity<B>(
    state: &dyn FluidState,
    data: &TransportData,
    ecs: &ViscosityEcs,
    reference: &mut dyn UpdatableState,
    reference_background: B,
    config: &NewtonConfig,
) -> TransportResult<EcsViscosity>
where
    B: FnOnce(&dyn FluidState) -> TransportResult<f64>,
{
    require_pure(state, "viscosity_ECS")?;

    let psi = power_sum(
        &ecs.psi_a,
        &ecs.psi_t,
        state.molar_density() / ecs.psi_rhomolar_reducing,
    );
    let dilute = kinetic_theory(state, data.epsilon_over_k, data.sigma_eta)?;

    let variables = map_onto_reference(state, reference, psi, config)?;
    let reference_background = reference_background(&*reference)?;

    let scaling = variables.f.sqrt()
        * variables.h.powf(-2.0 / 3.0)
        * (state.molar_mass() / reference.molar_mass()).sqrt();
    let total = ensure_finite(dilute + reference_background * scaling, "ECS viscosity")?;

    debug!(
        fluid = state.name(),
        reference = reference.name(),
        f = variables.f,
        h = variables.h,
        psi,
        scaling,
        "ECS viscosity"
    );

    Ok(EcsViscosity {
        variables,
        dilute,
        reference_background,
        scaling,
        total,
    })
}

/// ECS thermal conductivity of `state`, without the critical enhancement.
///
/// The critical term belongs to the fluid of interest and needs its total
/// viscosity, so it is left at zero here and added by the caller.
pub fn conductivity<B>(
    state: &dyn FluidState,
    data: &TransportData,
    ecs: &ConductivityEcs,
    reference: &mut dyn UpdatableState,
    reference_background: B,
    config: &NewtonConfig,
) -> TransportResult<EcsConductivity>
where
    B: FnOnce(&dyn FluidState) -> TransportResult<f64>,
{
    require_pure(state, "conductivity_ECS")?;

    let m = state.molar_mass(); // [kg/mol]
    let r_u = state.gas_constant();
    let r = r_u / m; // [J/(kg·K)]
    let r_kj = r_u / (m * 1000.0); // [kJ/(kg·K)]

    let psi = power_sum(
        &ecs.psi_a,
        &ecs.psi_t,
        state.molar_density() / ecs.psi_rhomolar_reducing,
    );
    let f_int = power_sum(
        &ecs.f_int_a,
        &ecs.f_int_t,
        state.temperature() / ecs.f_int_t_reducing,
    );

    // [µPa·s]
    let eta_dilute = kinetic_theory(state, data.epsilon_over_k, data.sigma_eta)? * 1e6;
    let cp0 = state.cpmolar_idealgas() / m; // [J/(kg·K)]
    let internal = f_int * eta_dilute * (cp0 - 2.5 * r) / 1e3;
    let dilute = 15.0e-3 / 4.0 * r_kj * eta_dilute;

    let variables = map_onto_reference(state, reference, psi, config)?;
    let reference_background = reference_background(&*reference)?;

    let scaling = variables.f.sqrt()
        * variables.h.powf(-2.0 / 3.0)
        * (reference.molar_mass() / m).sqrt();
    let total = ensure_finite(
        internal + dilute + reference_background * scaling,
        "ECS conductivity",
    )?;

    debug!(
        fluid = state.name(),
        reference = reference.name(),
        f = variables.f,
        h = variables.h,
        psi,
        f_int,
        scaling,
        "ECS conductivity"
    );

    Ok(EcsConductivity {
        variables,
        f_int,
        internal,
        dilute,
        reference_background,
        scaling,
        critical: 0.0,
        total,
    })
}
