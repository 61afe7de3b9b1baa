//! Conformal-state solver.
//!
//! Finds the reference-fluid state (T₀, ρ₀) whose residual Helmholtz energy and
//! compressibility factor equal those of the fluid of interest:
//!
//! ```text
//! r(T₀, ρ₀) = (α_r,ref(T₀, ρ₀) − α_r, Z_ref(T₀, ρ₀) − Z)
//! ```
//!
//! The Jacobian is analytic in the reference fluid's own reduced variables,
//! with dτ/dT₀ = −T_red,ref/T₀² and dδ/dρ₀ = 1/ρ_red,ref. The reference state
//! is moved on every residual evaluation; on success it is left at the
//! solution, on failure at whatever was tried last.

use crate::error::{SolverError, SolverResult};
use crate::newton::{NewtonConfig, NewtonSystem, newton_solve};
use nalgebra::{DMatrix, DVector};
use tracing::debug;
use tt_fluids::{FluidState, UpdatableState};

/// Values the reference fluid has to reproduce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConformalTarget {
    pub alphar: f64,
    pub z: f64,
}

impl ConformalTarget {
    /// α_r and Z of `state` at its cached (τ, δ).
    pub fn of(state: &dyn FluidState) -> Self {
        Self {
            alphar: state.alphar(),
            z: state.compressibility_factor(),
        }
    }
}

/// A reference-fluid temperature / molar density pair.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConformalState {
    /// [K]
    pub temperature: f64,
    /// [mol/m³]
    pub molar_density: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConformalSolution {
    pub state: ConformalState,
    pub iterations: usize,
    pub residual_norm: f64,
}

struct ConformalSystem<'a> {
    target: ConformalTarget,
    reference: &'a mut dyn UpdatableState,
}

impl NewtonSystem for ConformalSystem<'_> {
    fn residual(&mut self, x: &DVector<f64>) -> SolverResult<DVector<f64>> {
        self.reference.update_dmolar_t(x[1], x[0])?;
        Ok(DVector::from_vec(vec![
            self.reference.alphar() - self.target.alphar,
            self.reference.compressibility_factor() - self.target.z,
        ]))
    }

    fn jacobian(&mut self, x: &DVector<f64>) -> SolverResult<DMatrix<f64>> {
        Ok(conformal_jacobian(&*self.reference, x[0], x[1]))
    }
}

/// Analytic ∂r/∂(T₀, ρ₀), from no-cache derivatives of `reference`.
pub fn conformal_jacobian(reference: &dyn FluidState, t0: f64, rho0: f64) -> DMatrix<f64> {
    let red = reference.reducing();
    let tau = red.temperature / t0;
    let delta = rho0 / red.molar_density;
    let dtau_dt = -red.temperature / (t0 * t0);
    let ddelta_drho = 1.0 / red.molar_density;

    let ar_t = reference.alphar_deriv_at(1, 0, tau, delta);
    let ar_d = reference.alphar_deriv_at(0, 1, tau, delta);
    let ar_dd = reference.alphar_deriv_at(0, 2, tau, delta);
    let ar_dt = reference.alphar_deriv_at(1, 1, tau, delta);

    DMatrix::from_row_slice(
        2,
        2,
        &[
            ar_t * dtau_dt,
            ar_d * ddelta_drho,
            delta * ar_dt * dtau_dt,
            (delta * ar_dd + ar_d) * ddelta_drho,
        ],
    )
}

/// Move `reference` to the state conformal with `target`, starting at `guess`.
pub fn solve_conformal_state(
    target: ConformalTarget,
    reference: &mut dyn UpdatableState,
    guess: ConformalState,
    config: &NewtonConfig,
) -> SolverResult<ConformalSolution> {
    if !(guess.temperature > 0.0 && guess.molar_density > 0.0)
        || !guess.temperature.is_finite()
        || !guess.molar_density.is_finite()
    {
        return Err(SolverError::InvalidState {
            what: format!(
                "conformal guess T0 = {}, rho0 = {}",
                guess.temperature, guess.molar_density
            ),
        });
    }
    if !(target.alphar.is_finite() && target.z.is_finite()) {
        return Err(SolverError::InvalidState {
            what: format!("conformal target {target:?}"),
        });
    }

    let x0 = DVector::from_vec(vec![guess.temperature, guess.molar_density]);
    let result = {
        let mut system = ConformalSystem {
            target,
            reference: &mut *reference,
        };
        newton_solve(&mut system, x0, config)?
    };

    let state = ConformalState {
        temperature: result.x[0],
        molar_density: result.x[1],
    };
    // The last evaluated trial is the accepted one; make it explicit.
    reference.update_dmolar_t(state.molar_density, state.temperature)?;

    debug!(
        reference = reference.name(),
        t0 = state.temperature,
        rho0 = state.molar_density,
        iterations = result.iterations,
        "conformal state found"
    );

    Ok(ConformalSolution {
        state,
        iterations: result.iterations,
        residual_norm: result.residual_norm,
    })
}
