//! Error types for solver operations.

use thiserror::Error;
use tt_core::error::TtError;
use tt_fluids::FluidError;

/// Errors that can occur during a Newton solve.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Convergence failed after {iterations} iterations, residual = {residual:e}")]
    ConvergenceFailed { iterations: usize, residual: f64 },

    #[error("No acceptable line-search step at iteration {iteration}, residual = {residual:e}")]
    NoAcceptableStep { iteration: usize, residual: f64 },

    #[error("Numeric error: {what}")]
    Numeric { what: String },

    #[error("Invalid state: {what}")]
    InvalidState { what: String },

    #[error("Invalid solver configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Fluid error: {0}")]
    Fluid(#[from] FluidError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for TtError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::ConvergenceFailed { .. } | SolverError::NoAcceptableStep { .. } => {
                TtError::Convergence {
                    what: e.to_string(),
                }
            }
            SolverError::Numeric { what } | SolverError::InvalidState { what } => {
                TtError::Invariant { what }
            }
            SolverError::InvalidConfig { what } => TtError::InvalidArg { what },
            SolverError::Fluid(err) => err.into(),
        }
    }
}
