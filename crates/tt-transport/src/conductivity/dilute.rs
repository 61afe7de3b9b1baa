//! Dilute-gas thermal conductivity [W/(m·K)].

use serde::{Deserialize, Serialize};
use tt_core::numeric::power_sum;
use tt_fluids::FluidState;

use crate::error::{TransportResult, require_pure};

/// λ₀ = Σ Aᵢ Tr^nᵢ / Σ Bᵢ Tr^mᵢ, Tr = T/T_red
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatioOfPolynomialsData {
    #[serde(rename = "A")]
    pub a: Vec<f64>,
    pub n: Vec<f64>,
    #[serde(rename = "B")]
    pub b: Vec<f64>,
    pub m: Vec<f64>,
    pub t_reducing: f64,
}

/// λ₀ = A₀·η₀[µPa·s] + Σ_{i≥1} Aᵢ τ^tᵢ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eta0AndPolyData {
    #[serde(rename = "A")]
    pub a: Vec<f64>,
    pub t: Vec<f64>,
}

pub fn ratio_of_polynomials(
    state: &dyn FluidState,
    data: &RatioOfPolynomialsData,
) -> TransportResult<f64> {
    require_pure(state, "conductivity_dilute_ratio_polynomials")?;
    let tr = state.temperature() / data.t_reducing;
    Ok(power_sum(&data.a, &data.n, tr) / power_sum(&data.b, &data.m, tr))
}

/// `eta_dilute` is the fluid's own dilute viscosity [Pa·s].
pub fn eta0_and_poly(
    state: &dyn FluidState,
    data: &Eta0AndPolyData,
    eta_dilute: f64,
) -> TransportResult<f64> {
    require_pure(state, "conductivity_dilute_eta0_and_poly")?;
    let Some(a0) = data.a.first() else {
        return Ok(0.0);
    };
    let tau = state.tau();
    let poly: f64 = data
        .a
        .iter()
        .zip(&data.t)
        .skip(1)
        .map(|(a, t)| a * tau.powf(*t))
        .sum();
    Ok(a0 * eta_dilute * 1e6 + poly)
}

/// Carbon dioxide, Vesovic et al. (JPCRD 19, 1990).
pub fn co2(state: &dyn FluidState) -> TransportResult<f64> {
    require_pure(state, "conductivity_dilute_hardcoded_CO2")?;

    let e_k = 251.196;
    let b = [
        0.4226159, 0.6280115, -0.5387661, 0.6735941, 0.0, 0.0, -0.4362677, 0.2255388,
    ];
    let c = [0.0, 2.387869e-2, 4.350794, -10.33404, 7.981590, -1.940558];
    let t = state.temperature();

    // Eq. 31
    let summer: f64 = (1..=5).map(|i| c[i] * (t / 100.0).powi(2 - i as i32)).sum();
    let cint_k = 1.0 + (-183.5 / t).exp() * summer;

    // Eq. 12
    let r = (2.0 / 5.0 * cint_k).sqrt();

    // Eq. 30
    let t_star = t / e_k;
    let g_star_lambda: f64 = b.iter().enumerate().map(|(i, bi)| bi / t_star.powi(i as i32)).sum();

    // Eq. 29
    Ok(0.475598e-3 * t.sqrt() * (1.0 + r * r) / g_star_lambda)
}

/// Ethane, Friend et al. (JPCRD 20, 1991). `eta_dilute` in Pa·s.
pub fn ethane(state: &dyn FluidState, eta_dilute: f64) -> TransportResult<f64> {
    require_pure(state, "conductivity_dilute_hardcoded_ethane")?;
    let t = state.temperature();
    let tau = 305.33 / t;
    let t_star = t / 245.0;
    let fint = 1.7104147 - 0.6936482 / t_star;
    Ok(0.276505e-3
        * (eta_dilute * 1e6)
        * (3.75 - fint * (tau * tau * state.alpha0_deriv(2, 0) + 1.5)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tt_core::numeric::{Tolerances, nearly_equal};
    use tt_fluids::fixtures::{as_mixture, ethane as ethane_fluid, methane, state};

    #[test]
    fn ratio_of_polynomials_simple() {
        let data = RatioOfPolynomialsData {
            a: vec![0.02, 0.01],
            n: vec![0.0, 1.0],
            b: vec![1.0],
            m: vec![0.0],
            t_reducing: 100.0,
        };
        let s = state(methane(), 10.0, 200.0).unwrap();
        let v = ratio_of_polynomials(&s, &data).unwrap();
        assert!(nearly_equal(v, 0.04, Tolerances::default()));
    }

    #[test]
    fn eta0_and_poly_uses_micro_pascal_seconds() {
        let data = Eta0AndPolyData {
            a: vec![1e-3, 2e-3],
            t: vec![0.0, 1.0],
        };
        let s = state(methane(), 10.0, 190.564).unwrap();
        let v = eta0_and_poly(&s, &data, 10e-6).unwrap();
        assert!(nearly_equal(v, 1e-3 * 10.0 + 2e-3, Tolerances::default()));
    }

    #[test]
    fn co2_dilute_near_literature() {
        // Vesovic et al. give 16.77 mW/(m·K) at 300 K.
        let s = state(methane(), 1.0, 300.0).unwrap();
        let v = co2(&s).unwrap();
        assert!((v - 16.77e-3).abs() < 0.2e-3, "{v}");
    }

    #[test]
    fn ethane_dilute_positive() {
        let s = state(ethane_fluid(), 1.0, 300.0).unwrap();
        let v = ethane(&s, 9.4e-6).unwrap();
        assert!(v > 0.01 && v < 0.03, "{v}");
    }

    #[test]
    fn mixtures_rejected() {
        let s = state(as_mixture(methane()), 10.0, 300.0).unwrap();
        assert!(co2(&s).is_err());
        assert!(ethane(&s, 1e-5).is_err());
    }
}
