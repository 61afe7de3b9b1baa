//! Thermodynamic state accessor.
//!
//! Transport correlations never solve the equation of state themselves; they
//! read everything they need through [`FluidState`]. Reduced variables are
//! always formed with the reducing parameters of the fluid being evaluated.

use crate::composition::Composition;
use crate::error::FluidResult;

/// Reducing (usually critical) point of a fluid's equation of state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReducingState {
    /// Reducing temperature [K]
    pub temperature: f64,
    /// Reducing molar density [mol/m³]
    pub molar_density: f64,
    /// Pressure at the reducing point [Pa]
    pub pressure: f64,
}

/// Read-only view of a cached thermodynamic state of one fluid.
///
/// Implementations must be thread-safe (Send + Sync) so a state of the fluid of
/// interest can be shared between parallel evaluations.
///
/// Helmholtz derivatives are `∂^(i_tau+i_delta) α / ∂τ^i_tau ∂δ^i_delta`.
pub trait FluidState: Send + Sync {
    /// Fluid name (for logging).
    fn name(&self) -> &str;

    fn composition(&self) -> &Composition;

    /// Temperature [K].
    fn temperature(&self) -> f64;

    /// Molar density [mol/m³].
    fn molar_density(&self) -> f64;

    /// Molar mass [kg/mol].
    fn molar_mass(&self) -> f64;

    /// Molar gas constant used by the equation of state [J/(mol·K)].
    fn gas_constant(&self) -> f64;

    fn reducing(&self) -> ReducingState;

    /// Residual Helmholtz derivative at an arbitrary (τ, δ), without touching the cache.
    fn alphar_deriv_at(&self, i_tau: usize, i_delta: usize, tau: f64, delta: f64) -> f64;

    /// Ideal-gas Helmholtz derivative at an arbitrary (τ, δ).
    fn alpha0_deriv_at(&self, i_tau: usize, i_delta: usize, tau: f64, delta: f64) -> f64;

    fn is_pure_or_pseudo_pure(&self) -> bool {
        self.composition().is_pure_or_pseudo_pure()
    }

    /// Critical temperature [K]; equal to the reducing temperature unless overridden.
    fn critical_temperature(&self) -> f64 {
        self.reducing().temperature
    }

    /// Critical molar density [mol/m³].
    fn critical_molar_density(&self) -> f64 {
        self.reducing().molar_density
    }

    /// Mass density [kg/m³].
    fn mass_density(&self) -> f64 {
        self.molar_density() * self.molar_mass()
    }

    /// δ = ρ/ρ_reducing
    fn delta(&self) -> f64 {
        self.molar_density() / self.reducing().molar_density
    }

    /// τ = T_reducing/T
    fn tau(&self) -> f64 {
        self.reducing().temperature / self.temperature()
    }

    fn alphar_deriv(&self, i_tau: usize, i_delta: usize) -> f64 {
        self.alphar_deriv_at(i_tau, i_delta, self.tau(), self.delta())
    }

    fn alpha0_deriv(&self, i_tau: usize, i_delta: usize) -> f64 {
        self.alpha0_deriv_at(i_tau, i_delta, self.tau(), self.delta())
    }

    fn alphar(&self) -> f64 {
        self.alphar_deriv(0, 0)
    }

    /// Z = 1 + δ·∂α_r/∂δ
    fn compressibility_factor(&self) -> f64 {
        1.0 + self.delta() * self.alphar_deriv(0, 1)
    }

    /// Pressure [Pa].
    fn pressure(&self) -> f64 {
        self.molar_density()
            * self.gas_constant()
            * self.temperature()
            * self.compressibility_factor()
    }

    /// (∂p/∂ρ)_T [Pa·m³/mol].
    fn dp_drho_constant_t(&self) -> f64 {
        let delta = self.delta();
        self.gas_constant()
            * self.temperature()
            * (1.0
                + 2.0 * delta * self.alphar_deriv(0, 1)
                + delta * delta * self.alphar_deriv(0, 2))
    }

    /// (∂p/∂T)_ρ [Pa/K].
    fn dp_dt_constant_rho(&self) -> f64 {
        let delta = self.delta();
        let tau = self.tau();
        self.molar_density()
            * self.gas_constant()
            * (1.0 + delta * self.alphar_deriv(0, 1) - delta * tau * self.alphar_deriv(1, 1))
    }

    /// Isothermal compressibility [1/Pa].
    fn isothermal_compressibility(&self) -> f64 {
        1.0 / (self.molar_density() * self.dp_drho_constant_t())
    }

    /// Molar isochoric heat capacity [J/(mol·K)].
    fn cvmolar(&self) -> f64 {
        let tau = self.tau();
        -self.gas_constant() * tau * tau * (self.alpha0_deriv(2, 0) + self.alphar_deriv(2, 0))
    }

    /// Molar isobaric heat capacity [J/(mol·K)].
    fn cpmolar(&self) -> f64 {
        let delta = self.delta();
        let tau = self.tau();
        let numer = 1.0 + delta * self.alphar_deriv(0, 1) - delta * tau * self.alphar_deriv(1, 1);
        let denom = 1.0
            + 2.0 * delta * self.alphar_deriv(0, 1)
            + delta * delta * self.alphar_deriv(0, 2);
        self.cvmolar() + self.gas_constant() * numer * numer / denom
    }

    /// Ideal-gas molar isobaric heat capacity [J/(mol·K)].
    fn cpmolar_idealgas(&self) -> f64 {
        let tau = self.tau();
        self.gas_constant() * (1.0 - tau * tau * self.alpha0_deriv(2, 0))
    }

    /// Mass isobaric heat capacity [J/(kg·K)].
    fn cpmass(&self) -> f64 {
        self.cpmolar() / self.molar_mass()
    }

    /// Mass isochoric heat capacity [J/(kg·K)].
    fn cvmass(&self) -> f64 {
        self.cvmolar() / self.molar_mass()
    }
}

/// A state that can be moved to a new (ρ, T), used for the scratch reference
/// fluid of corresponding-states models.
pub trait UpdatableState: FluidState {
    /// Move the state to molar density `rhomolar` [mol/m³] and temperature `t` [K].
    ///
    /// On error the previous state is kept.
    fn update_dmolar_t(&mut self, rhomolar: f64, t: f64) -> FluidResult<()>;
}
