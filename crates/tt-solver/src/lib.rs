//! Nonlinear solvers for thermotransport.
//!
//! A generic damped Newton-Raphson ([`newton_solve`]) over any [`NewtonSystem`],
//! finite-difference Jacobians, and the conformal-state solver used by
//! extended corresponding states models.

pub mod conformal;
pub mod error;
pub mod jacobian;
pub mod newton;

pub use conformal::{
    ConformalSolution, ConformalState, ConformalTarget, conformal_jacobian, solve_conformal_state,
};
pub use error::{SolverError, SolverResult};
pub use newton::{NewtonConfig, NewtonResult, NewtonSystem, newton_solve};
