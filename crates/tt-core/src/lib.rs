//! tt-core: stable foundation for thermotransport.
//!
//! Contains:
//! - units (uom SI types + constructors, physical constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TtError, TtResult};
pub use numeric::*;
pub use units::*;
