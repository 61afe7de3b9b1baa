//! Damped Newton-Raphson with a halving line search.

use crate::error::{SolverError, SolverResult};
use crate::jacobian::finite_difference_jacobian;
use nalgebra::{DMatrix, DVector};
use tracing::{debug, trace, warn};

/// Newton solver configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NewtonConfig {
    /// Maximum number of Newton steps
    pub max_iterations: usize,
    /// Absolute tolerance on the residual 2-norm
    pub abs_tol: f64,
    /// First step fraction tried by the line search
    pub initial_step: f64,
    /// Line search backtracking factor
    pub line_search_beta: f64,
    /// Smallest step fraction tried before giving up
    pub min_step: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            abs_tol: 1e-9,
            initial_step: 1.0,
            line_search_beta: 0.5,
            min_step: 1.0 / 1024.0,
        }
    }
}

impl NewtonConfig {
    /// Reject tolerances and step fractions the line search cannot use.
    pub fn validate(&self) -> SolverResult<()> {
        if !(self.abs_tol > 0.0) {
            return Err(SolverError::InvalidConfig {
                what: "abs_tol must be positive",
            });
        }
        if !(self.line_search_beta > 0.0 && self.line_search_beta < 1.0) {
            return Err(SolverError::InvalidConfig {
                what: "line_search_beta must lie in (0, 1)",
            });
        }
        if !(self.min_step > 0.0 && self.min_step <= self.initial_step) {
            return Err(SolverError::InvalidConfig {
                what: "min_step must lie in (0, initial_step]",
            });
        }
        Ok(())
    }
}

/// Newton iteration result.
#[derive(Clone, Debug)]
pub struct NewtonResult {
    /// Solution vector
    pub x: DVector<f64>,
    /// Final residual norm
    pub residual_norm: f64,
    /// Number of accepted steps
    pub iterations: usize,
}

/// A square nonlinear system F(x) = 0.
///
/// Both methods take `&mut self` so implementations may move a cached state
/// while evaluating.
pub trait NewtonSystem {
    fn residual(&mut self, x: &DVector<f64>) -> SolverResult<DVector<f64>>;

    /// Jacobian of [`residual`](Self::residual) at `x`. Forward differences by default.
    fn jacobian(&mut self, x: &DVector<f64>) -> SolverResult<DMatrix<f64>> {
        finite_difference_jacobian(x, |xp| self.residual(xp), 1e-7)
    }
}

/// Solve `system` from `x0`.
///
/// Each iteration checks convergence (‖r‖ < `abs_tol`), solves J·v = −r and
/// tries x + s·v for s = `initial_step`, `initial_step`·β, … down to
/// `min_step`. The first trial whose residual norm does not exceed the current
/// one is accepted. Trials whose evaluation fails or is non-finite are
/// rejected like any other.
pub fn newton_solve<S>(
    system: &mut S,
    x0: DVector<f64>,
    config: &NewtonConfig,
) -> SolverResult<NewtonResult>
where
    S: NewtonSystem + ?Sized,
{
    config.validate()?;

    let mut x = x0;
    let mut r = system.residual(&x)?;
    let mut r_norm = r.norm();
    if !r_norm.is_finite() {
        return Err(SolverError::InvalidState {
            what: format!("non-finite initial residual at x = {:?}", x.as_slice()),
        });
    }

    for iter in 0..=config.max_iterations {
        if r_norm < config.abs_tol {
            debug!(iterations = iter, residual = r_norm, "newton converged");
            return Ok(NewtonResult {
                x,
                residual_norm: r_norm,
                iterations: iter,
            });
        }
        if iter == config.max_iterations {
            break;
        }

        let jac = system.jacobian(&x)?;
        let v = jac
            .lu()
            .solve(&(-&r))
            .ok_or_else(|| SolverError::Numeric {
                what: format!("singular Jacobian at iteration {iter}"),
            })?;

        let mut accepted = None;
        let mut step = config.initial_step;
        while step >= config.min_step {
            let x_trial = &x + step * &v;
            match system.residual(&x_trial) {
                Ok(r_trial) => {
                    let trial_norm = r_trial.norm();
                    if trial_norm.is_finite() && trial_norm <= r_norm {
                        accepted = Some((x_trial, r_trial, trial_norm));
                        break;
                    }
                    trace!(iteration = iter, step, residual = trial_norm, "step rejected");
                }
                Err(err) => {
                    trace!(iteration = iter, step, error = %err, "trial evaluation failed");
                }
            }
            step *= config.line_search_beta;
        }

        let Some((x_new, r_new, norm_new)) = accepted else {
            warn!(iteration = iter, residual = r_norm, "line search found no acceptable step");
            return Err(SolverError::NoAcceptableStep {
                iteration: iter,
                residual: r_norm,
            });
        };

        debug!(iteration = iter, step, residual = norm_new, "newton step");
        x = x_new;
        r = r_new;
        r_norm = norm_new;
    }

    warn!(
        iterations = config.max_iterations,
        residual = r_norm,
        "newton did not converge"
    );
    Err(SolverError::ConvergenceFailed {
        iterations: config.max_iterations,
        residual: r_norm,
    })
}
