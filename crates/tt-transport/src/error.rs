//! Error types for transport property evaluation.

use thiserror::Error;
use tt_core::error::TtError;
use tt_fluids::{FluidError, FluidState};
use tt_solver::SolverError;

/// Errors that can occur while evaluating a transport property.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// A pure-fluid routine was asked to evaluate a mixture, or the model
    /// combination cannot be evaluated.
    #[error("Unsupported configuration: {what}")]
    UnsupportedConfiguration { what: String },

    #[error("Conformal state solver failed: {0}")]
    ConvergenceFailure(#[from] SolverError),

    #[error("State evaluation failed: {0}")]
    DomainEvaluation(#[from] FluidError),

    /// Singular or non-finite intermediate result.
    #[error("Degenerate evaluation: {what}")]
    Degenerate { what: String },

    #[error("Missing transport data: {what}")]
    MissingData { what: &'static str },
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Fail with `UnsupportedConfiguration` unless `state` is a pure or pseudo-pure fluid.
pub fn require_pure(state: &dyn FluidState, routine: &'static str) -> TransportResult<()> {
    if state.is_pure_or_pseudo_pure() {
        Ok(())
    } else {
        Err(TransportError::UnsupportedConfiguration {
            what: format!("{routine} is only for pure and pseudo-pure fluids"),
        })
    }
}

pub(crate) fn ensure_finite(value: f64, what: &'static str) -> TransportResult<f64> {
    tt_core::numeric::ensure_finite(value, what).map_err(|e| TransportError::Degenerate {
        what: e.to_string(),
    })
}

impl From<TransportError> for TtError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::UnsupportedConfiguration { what } => TtError::Unsupported { what },
            TransportError::ConvergenceFailure(err) => err.into(),
            TransportError::DomainEvaluation(err) => err.into(),
            TransportError::Degenerate { what } => TtError::Invariant { what },
            TransportError::MissingData { what } => TtError::InvalidArg { what },
        }
    }
}
