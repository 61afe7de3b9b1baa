//! Multiparameter Helmholtz-energy equation of state.
//!
//! A compact implementation of [`FluidState`] / [`UpdatableState`] in reduced
//! Helmholtz form:
//!
//! ```text
//! α_r(τ, δ) = Σ nᵢ δ^dᵢ τ^tᵢ exp(−cᵢ δ^lᵢ)
//! α_0(τ, δ) = ln δ + a₁ + a₂τ + a_log ln τ + Σ nᵢ τ^tᵢ + Σ vᵢ ln(1 − exp(−θᵢτ))
//! ```
//!
//! Residual derivatives are analytic to any order. Ideal-gas derivatives are
//! supported up to third order in τ and any order in δ.

use std::sync::Arc;

use crate::composition::Composition;
use crate::error::{FluidError, FluidResult};
use crate::model::validation;
use crate::state::{FluidState, ReducingState, UpdatableState};

/// One residual term `n δ^d τ^t exp(−c δ^l)`. A term with `l == 0` or `c == 0`
/// is a plain power term.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResidualTerm {
    pub n: f64,
    pub d: f64,
    pub t: f64,
    pub l: f64,
    pub c: f64,
}

impl ResidualTerm {
    pub const fn power(n: f64, d: f64, t: f64) -> Self {
        Self {
            n,
            d,
            t,
            l: 0.0,
            c: 0.0,
        }
    }

    pub const fn exponential(n: f64, d: f64, t: f64, l: f64) -> Self {
        Self {
            n,
            d,
            t,
            l,
            c: 1.0,
        }
    }

    fn deriv(&self, i_tau: usize, i_delta: usize, tau: f64, delta: f64) -> f64 {
        self.n * tau_power_deriv(self.t, i_tau, tau) * self.delta_deriv(i_delta, delta)
    }

    /// i-th derivative of δ^d exp(−c δ^l).
    ///
    /// Each differentiation maps a·δ^m·E onto a·m·δ^(m−1)·E − a·c·l·δ^(m+l−1)·E,
    /// so the derivative stays a short sum of monomials times the exponential.
    fn delta_deriv(&self, order: usize, delta: f64) -> f64 {
        let exponential = self.l != 0.0 && self.c != 0.0;
        let mut monomials = vec![(1.0, self.d)];
        for _ in 0..order {
            let mut next = Vec::with_capacity(monomials.len() * 2);
            for (a, m) in monomials {
                if m != 0.0 {
                    next.push((a * m, m - 1.0));
                }
                if exponential {
                    next.push((-a * self.c * self.l, m + self.l - 1.0));
                }
            }
            monomials = next;
        }
        let poly: f64 = monomials.iter().map(|(a, m)| a * delta.powf(*m)).sum();
        if exponential {
            poly * (-self.c * delta.powf(self.l)).exp()
        } else {
            poly
        }
    }
}

/// k-th derivative of τ^t.
fn tau_power_deriv(t: f64, order: usize, tau: f64) -> f64 {
    let falling: f64 = (0..order).map(|j| t - j as f64).product();
    if falling == 0.0 {
        return 0.0;
    }
    falling * tau.powf(t - order as f64)
}

/// Ideal-gas part of the reduced Helmholtz energy.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdealHelmholtz {
    pub a1: f64,
    pub a2: f64,
    /// Coefficient of ln τ; c_v⁰/R for a constant heat capacity.
    pub a_log: f64,
    /// (n, t) pairs of `n τ^t`
    pub power: Vec<(f64, f64)>,
    /// (v, θ) pairs of `v ln(1 − exp(−θτ))`
    pub planck_einstein: Vec<(f64, f64)>,
}

impl IdealHelmholtz {
    /// Constant ideal-gas heat capacity `cp0_over_r`·R.
    pub fn constant_cp(cp0_over_r: f64) -> Self {
        Self {
            a_log: cp0_over_r - 1.0,
            ..Self::default()
        }
    }

    fn deriv(&self, i_tau: usize, i_delta: usize, tau: f64, delta: f64) -> f64 {
        match (i_tau, i_delta) {
            (0, 0) => {
                let pe: f64 = self
                    .planck_einstein
                    .iter()
                    .map(|(v, theta)| v * (1.0 - (-theta * tau).exp()).ln())
                    .sum();
                let pw: f64 = self.power.iter().map(|(n, t)| n * tau.powf(*t)).sum();
                delta.ln() + self.a1 + self.a2 * tau + self.a_log * tau.ln() + pw + pe
            }
            (0, k) => {
                // d^k/dδ^k ln δ = (−1)^(k−1) (k−1)! / δ^k
                let factorial: f64 = (1..k).map(|j| j as f64).product();
                let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
                sign * factorial / delta.powi(k as i32)
            }
            (k, 0) => self.tau_deriv(k, tau),
            _ => 0.0,
        }
    }

    fn tau_deriv(&self, order: usize, tau: f64) -> f64 {
        let pw: f64 = self
            .power
            .iter()
            .map(|(n, t)| n * tau_power_deriv(*t, order, tau))
            .sum();
        let pe: f64 = self
            .planck_einstein
            .iter()
            .map(|(v, theta)| {
                let e = (theta * tau).exp();
                match order {
                    1 => v * theta / (e - 1.0),
                    2 => -v * theta * theta * e / ((e - 1.0) * (e - 1.0)),
                    3 => v * theta.powi(3) * e * (e + 1.0) / (e - 1.0).powi(3),
                    _ => f64::NAN,
                }
            })
            .sum();
        let lead = match order {
            1 => self.a2 + self.a_log / tau,
            2 => -self.a_log / (tau * tau),
            3 => 2.0 * self.a_log / tau.powi(3),
            _ => f64::NAN,
        };
        lead + pw + pe
    }
}

/// Region in which updates are accepted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidityLimits {
    pub t_min: f64,
    pub t_max: f64,
    pub rhomolar_max: f64,
}

impl Default for ValidityLimits {
    fn default() -> Self {
        Self {
            t_min: 0.0,
            t_max: f64::INFINITY,
            rhomolar_max: f64::INFINITY,
        }
    }
}

/// Static description of one fluid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HelmholtzFluid {
    pub name: String,
    pub composition: Composition,
    /// Molar mass [kg/mol]
    pub molar_mass: f64,
    /// Molar gas constant [J/(mol·K)]
    pub gas_constant: f64,
    pub reducing: ReducingState,
    /// Critical temperature [K]
    pub critical_temperature: f64,
    /// Critical molar density [mol/m³]
    pub critical_molar_density: f64,
    pub residual: Vec<ResidualTerm>,
    pub ideal: IdealHelmholtz,
    pub limits: ValidityLimits,
}

impl HelmholtzFluid {
    pub fn alphar_deriv(&self, i_tau: usize, i_delta: usize, tau: f64, delta: f64) -> f64 {
        self.residual
            .iter()
            .map(|term| term.deriv(i_tau, i_delta, tau, delta))
            .sum()
    }

    pub fn alpha0_deriv(&self, i_tau: usize, i_delta: usize, tau: f64, delta: f64) -> f64 {
        self.ideal.deriv(i_tau, i_delta, tau, delta)
    }

    fn check_limits(&self, rhomolar: f64, t: f64) -> FluidResult<()> {
        validation::validate_temperature(t)?;
        validation::validate_molar_density(rhomolar)?;
        if t < self.limits.t_min || t > self.limits.t_max {
            return Err(FluidError::OutOfRange {
                what: "temperature",
                value: t,
            });
        }
        if rhomolar > self.limits.rhomolar_max {
            return Err(FluidError::OutOfRange {
                what: "molar density",
                value: rhomolar,
            });
        }
        Ok(())
    }
}

/// Cached (T, ρ) state of a [`HelmholtzFluid`].
///
/// Cloning is cheap: the static fluid data is shared.
#[derive(Debug, Clone)]
pub struct HelmholtzState {
    fluid: Arc<HelmholtzFluid>,
    t: f64,
    rhomolar: f64,
}

impl HelmholtzState {
    /// Create a state at molar density `rhomolar` [mol/m³] and temperature `t` [K].
    pub fn new(fluid: Arc<HelmholtzFluid>, rhomolar: f64, t: f64) -> FluidResult<Self> {
        fluid.check_limits(rhomolar, t)?;
        Ok(Self { fluid, t, rhomolar })
    }

    pub fn fluid(&self) -> &HelmholtzFluid {
        &self.fluid
    }
}

impl FluidState for HelmholtzState {
    fn name(&self) -> &str {
        &self.fluid.name
    }

    fn composition(&self) -> &Composition {
        &self.fluid.composition
    }

    fn temperature(&self) -> f64 {
        self.t
    }

    fn molar_density(&self) -> f64 {
        self.rhomolar
    }

    fn molar_mass(&self) -> f64 {
        self.fluid.molar_mass
    }

    fn gas_constant(&self) -> f64 {
        self.fluid.gas_constant
    }

    fn reducing(&self) -> ReducingState {
        self.fluid.reducing
    }

    fn critical_temperature(&self) -> f64 {
        self.fluid.critical_temperature
    }

    fn critical_molar_density(&self) -> f64 {
        self.fluid.critical_molar_density
    }

    fn alphar_deriv_at(&self, i_tau: usize, i_delta: usize, tau: f64, delta: f64) -> f64 {
        self.fluid.alphar_deriv(i_tau, i_delta, tau, delta)
    }

    fn alpha0_deriv_at(&self, i_tau: usize, i_delta: usize, tau: f64, delta: f64) -> f64 {
        self.fluid.alpha0_deriv(i_tau, i_delta, tau, delta)
    }
}

impl UpdatableState for HelmholtzState {
    fn update_dmolar_t(&mut self, rhomolar: f64, t: f64) -> FluidResult<()> {
        self.fluid.check_limits(rhomolar, t)?;
        self.t = t;
        self.rhomolar = rhomolar;
        Ok(())
    }
}
