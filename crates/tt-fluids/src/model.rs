//! Validation helpers for state inputs.

/// Validation helpers for fluid properties.
pub(crate) mod validation {
    use crate::error::{FluidError, FluidResult};

    /// Ensure temperature is positive and finite.
    pub fn validate_temperature(t: f64) -> FluidResult<()> {
        if !t.is_finite() || t <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure molar density is positive and finite.
    pub fn validate_molar_density(rhomolar: f64) -> FluidResult<()> {
        if !rhomolar.is_finite() || rhomolar <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "molar density must be positive and finite",
            });
        }
        Ok(())
    }
}
