use thiserror::Error;

pub type TtResult<T> = Result<T, TtError>;

#[derive(Error, Debug)]
pub enum TtError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Unsupported configuration: {what}")]
    Unsupported { what: String },

    #[error("Convergence failed: {what}")]
    Convergence { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
