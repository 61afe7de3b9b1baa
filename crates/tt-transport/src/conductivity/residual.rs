//! Residual (background) thermal conductivity [W/(m·K)].

use serde::{Deserialize, Serialize};
use tt_fluids::FluidState;

use crate::error::{TransportResult, require_pure};

/// Σ Bᵢ τ^tᵢ δ^dᵢ with τ = T_red/T and δ = ρ_mass/ρ_mass,red.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidualPolynomialData {
    #[serde(rename = "B")]
    pub b: Vec<f64>,
    pub t: Vec<f64>,
    pub d: Vec<f64>,
    pub t_reducing: f64,
    pub rhomass_reducing: f64,
}

/// Σ Aᵢ τ^tᵢ δ^dᵢ exp(−γᵢ δ^lᵢ) in the equation of state's own τ, δ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidualPolynomialAndExponentialData {
    #[serde(rename = "A")]
    pub a: Vec<f64>,
    pub t: Vec<f64>,
    pub d: Vec<f64>,
    pub gamma: Vec<f64>,
    pub l: Vec<f64>,
}

pub fn polynomial(state: &dyn FluidState, data: &ResidualPolynomialData) -> TransportResult<f64> {
    require_pure(state, "conductivity_residual_polynomial")?;
    let tau = data.t_reducing / state.temperature();
    let delta = state.mass_density() / data.rhomass_reducing;
    Ok(data
        .b
        .iter()
        .zip(&data.t)
        .zip(&data.d)
        .map(|((b, t), d)| b * tau.powf(*t) * delta.powf(*d))
        .sum())
}

pub fn polynomial_and_exponential(
    state: &dyn FluidState,
    data: &ResidualPolynomialAndExponentialData,
) -> TransportResult<f64> {
    require_pure(state, "conductivity_residual_polynomial_and_exponential")?;
    let tau = state.tau();
    let delta = state.delta();
    Ok(data
        .a
        .iter()
        .zip(&data.t)
        .zip(&data.d)
        .zip(data.gamma.iter().zip(&data.l))
        .map(|(((a, t), d), (gamma, l))| {
            a * tau.powf(*t) * delta.powf(*d) * (-gamma * delta.powf(*l)).exp()
        })
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tt_core::numeric::{Tolerances, nearly_equal};
    use tt_fluids::fixtures::{as_mixture, methane, state};

    #[test]
    fn polynomial_uses_mass_density() {
        let data = ResidualPolynomialData {
            b: vec![0.01],
            t: vec![0.0],
            d: vec![1.0],
            t_reducing: 190.564,
            rhomass_reducing: 162.66,
        };
        let s = state(methane(), 5000.0, 300.0).unwrap();
        let v = polynomial(&s, &data).unwrap();
        assert!(nearly_equal(v, 0.01 * s.mass_density() / 162.66, Tolerances::default()));
    }

    #[test]
    fn polynomial_and_exponential_at_reducing_point() {
        let data = ResidualPolynomialAndExponentialData {
            a: vec![0.02, 0.01],
            t: vec![1.0, 0.0],
            d: vec![1.0, 2.0],
            gamma: vec![0.0, 1.0],
            l: vec![0.0, 2.0],
        };
        let s = state(methane(), 10_139.342_719, 190.564).unwrap();
        let v = polynomial_and_exponential(&s, &data).unwrap();
        let expected = 0.02 + 0.01 * (-1.0_f64).exp();
        assert!(nearly_equal(v, expected, Tolerances::relative(1e-12)));
    }

    #[test]
    fn mixtures_rejected() {
        let s = state(as_mixture(methane()), 10.0, 300.0).unwrap();
        let data = ResidualPolynomialAndExponentialData {
            a: vec![],
            t: vec![],
            d: vec![],
            gamma: vec![],
            l: vec![],
        };
        assert!(polynomial_and_exponential(&s, &data).is_err());
    }
}
