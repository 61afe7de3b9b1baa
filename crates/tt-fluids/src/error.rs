//! Fluid state errors.

use tt_core::TtError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while building or updating a thermodynamic state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative density, temperature, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Value outside the validity range of the equation of state.
    #[error("Value out of range for {what}: {value}")]
    OutOfRange { what: &'static str, value: f64 },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Operation not supported (e.g., mixtures).
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },
}

impl From<FluidError> for TtError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::NonPhysical { what } => TtError::Invariant {
                what: format!("Non-physical fluid value: {}", what),
            },
            FluidError::OutOfRange { what, value } => TtError::Invariant {
                what: format!("Fluid value out of range: {} = {}", what, value),
            },
            FluidError::InvalidArg { what } => TtError::InvalidArg { what },
            FluidError::NotSupported { what } => TtError::Unsupported {
                what: what.to_string(),
            },
        }
    }
}
