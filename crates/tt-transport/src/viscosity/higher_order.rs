//! Higher-order (residual) viscosity contributions [Pa·s].

use serde::{Deserialize, Serialize};
use tt_core::numeric::power_sum;
use tt_fluids::FluidState;

use crate::error::{TransportError, TransportResult, require_pure};

/// Modified Batschinski-Hildebrand form
///
/// ```text
/// Δη = Σ aᵢ δ^d1ᵢ τ^t1ᵢ exp(γᵢ δ^lᵢ) + F(δ, τ)·(1/(δ₀ − δ) − 1/δ₀)
/// F  = Σ fᵢ δ^d2ᵢ τ^t2ᵢ
/// δ₀ = Σ gᵢ τ^hᵢ / Σ pᵢ τ^qᵢ
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatschinskiHildebrandData {
    pub a: Vec<f64>,
    pub d1: Vec<f64>,
    pub t1: Vec<f64>,
    pub gamma: Vec<f64>,
    pub l: Vec<f64>,
    pub f: Vec<f64>,
    pub d2: Vec<f64>,
    pub t2: Vec<f64>,
    pub g: Vec<f64>,
    pub h: Vec<f64>,
    pub p: Vec<f64>,
    pub q: Vec<f64>,
    pub t_reducing: f64,
    pub rhomolar_reducing: f64,
}

/// Friction theory coefficients (Quiñones-Cisneros and Deiters).
///
/// Each friction coefficient is k = (A₀ + A₁ψ₁ + A₂ψ₂)·τ^N with
/// ψ₁ = exp(τ) − c₁ and ψ₂ = exp(τ²) − c₂.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrictionTheoryData {
    pub c1: f64,
    pub c2: f64,
    pub t_reducing: f64,
    #[serde(rename = "Ai")]
    pub a_i: [f64; 3],
    #[serde(rename = "Aa")]
    pub a_a: [f64; 3],
    #[serde(rename = "Ar")]
    pub a_r: [f64; 3],
    #[serde(rename = "Aaa")]
    pub a_aa: [f64; 3],
    /// Second-order repulsive term in p_r²; when absent the Δp_r² form is used.
    #[serde(rename = "Arr", default)]
    pub a_rr: Option<[f64; 3]>,
    #[serde(rename = "Adrdr", default)]
    pub a_drdr: Option<[f64; 3]>,
    /// Third-order terms, used only when all three are present.
    #[serde(rename = "Aii", default)]
    pub a_ii: Option<[f64; 3]>,
    #[serde(rename = "Arrr", default)]
    pub a_rrr: Option<[f64; 3]>,
    #[serde(rename = "Aaaa", default)]
    pub a_aaa: Option<[f64; 3]>,
    #[serde(rename = "Na", default)]
    pub n_a: f64,
    #[serde(rename = "Nr", default)]
    pub n_r: f64,
    #[serde(rename = "Naa", default)]
    pub n_aa: f64,
    #[serde(rename = "Nrr", default)]
    pub n_rr: f64,
    #[serde(rename = "Nii", default)]
    pub n_ii: f64,
    #[serde(rename = "Nrrr", default)]
    pub n_rrr: f64,
    #[serde(rename = "Naaa", default)]
    pub n_aaa: f64,
}

pub fn modified_batschinski_hildebrand(
    state: &dyn FluidState,
    data: &BatschinskiHildebrandData,
) -> TransportResult<f64> {
    require_pure(state, "viscosity_higher_order_modified_Batschinski_Hildebrand")?;

    let delta = state.molar_density() / data.rhomolar_reducing;
    let tau = data.t_reducing / state.temperature();

    let s: f64 = data
        .a
        .iter()
        .zip(&data.d1)
        .zip(&data.t1)
        .zip(data.gamma.iter().zip(&data.l))
        .map(|(((a, d1), t1), (gamma, l))| {
            a * delta.powf(*d1) * tau.powf(*t1) * (gamma * delta.powf(*l)).exp()
        })
        .sum();

    let f: f64 = data
        .f
        .iter()
        .zip(&data.d2)
        .zip(&data.t2)
        .map(|((f, d2), t2)| f * delta.powf(*d2) * tau.powf(*t2))
        .sum();

    let delta0 = power_sum(&data.g, &data.h, tau) / power_sum(&data.p, &data.q, tau);
    if delta0 == 0.0 || !delta0.is_finite() || delta0 == delta {
        return Err(TransportError::Degenerate {
            what: format!(
                "Batschinski-Hildebrand singular point: delta = {delta}, delta0 = {delta0}"
            ),
        });
    }

    Ok(s + f * (1.0 / (delta0 - delta) - 1.0 / delta0))
}

fn friction_coefficient(a: &[f64; 3], psi1: f64, psi2: f64, tau: f64, n: f64) -> f64 {
    (a[0] + a[1] * psi1 + a[2] * psi2) * tau.powf(n)
}

pub fn friction_theory(state: &dyn FluidState, data: &FrictionTheoryData) -> TransportResult<f64> {
    require_pure(state, "viscosity_higher_order_friction_theory")?;

    let t = state.temperature();
    let tau = data.t_reducing / t;
    let psi1 = tau.exp() - data.c1;
    let psi2 = tau.powi(2).exp() - data.c2;
    let k = |a: &[f64; 3], n: f64| friction_coefficient(a, psi1, psi2, tau, n);

    let ki = k(&data.a_i, 1.0);
    let ka = k(&data.a_a, data.n_a);
    let kr = k(&data.a_r, data.n_r);
    let kaa = k(&data.a_aa, data.n_aa);

    let (krr, kdrdr) = match (&data.a_rr, &data.a_drdr) {
        (Some(a_rr), _) => (k(a_rr, data.n_rr), 0.0),
        (None, Some(a_drdr)) => (0.0, k(a_drdr, data.n_rr)),
        (None, None) => {
            return Err(TransportError::MissingData {
                what: "friction theory needs Arr or Adrdr",
            });
        }
    };

    let (kii, krrr, kaaa) = match (&data.a_ii, &data.a_rrr, &data.a_aaa) {
        (Some(a_ii), Some(a_rrr), Some(a_aaa)) => (
            k(a_ii, data.n_ii),
            k(a_rrr, data.n_rrr),
            k(a_aaa, data.n_aaa),
        ),
        _ => (0.0, 0.0, 0.0),
    };

    // Pressures in bar
    let p = state.pressure() / 1e5;
    let pr = t * state.dp_dt_constant_rho() / 1e5;
    let pa = p - pr;
    let pid = state.molar_density() * state.gas_constant() * t / 1e5;
    let delta_pr = pr - pid;

    Ok(ka * pa
        + kr * delta_pr
        + ki * pid
        + kaa * pa * pa
        + kdrdr * delta_pr * delta_pr
        + krr * pr * pr
        + kii * pid * pid
        + krrr * pr * pr * pr
        + kaaa * pa * pa * pa)
}

/// Normal hydrogen, Muzny et al. (JCED 58, 2013).
pub fn hydrogen(state: &dyn FluidState) -> TransportResult<f64> {
    require_pure(state, "viscosity_hydrogen_higher_order_hardcoded")?;
    let tr = state.temperature() / 33.145;
    let rhor = state.mass_density() * 0.011;
    let c = [
        0.0,
        6.43449673e-6,
        4.56334068e-2,
        2.32797868e-1,
        9.58326120e-1,
        1.27941189e-1,
        3.63576595e-1,
    ];
    Ok(c[1]
        * rhor.powi(2)
        * (c[2] * tr + c[3] / tr + c[4] * rhor.powi(2) / (c[5] + tr) + c[6] * rhor.powi(6)).exp())
}

/// Benzene, Avgeri et al. (JPCRD 43, 2014).
pub fn benzene(state: &dyn FluidState) -> TransportResult<f64> {
    require_pure(state, "viscosity_benzene_higher_order_hardcoded")?;
    let tr = state.temperature() / 562.02;
    let rhor = state.mass_density() / 304.792;
    let c = [
        -9.98945, 86.06260, 2.74872, 1.11130, -1.0, -134.1330, -352.473, 6.60989, 88.4174,
    ];
    Ok(1e-6
        * rhor.powf(2.0 / 3.0)
        * tr.sqrt()
        * (c[0] * rhor.powi(2)
            + c[1] * rhor / (c[2] + c[3] * tr + c[4] * rhor)
            + (c[5] * rhor + c[6] * rhor.powi(2)) / (c[7] + c[8] * rhor.powi(2))))
}

/// n-Hexane, Michailidou et al. (JPCRD 42, 2013).
pub fn hexane(state: &dyn FluidState) -> TransportResult<f64> {
    require_pure(state, "viscosity_hexane_higher_order_hardcoded")?;
    let tr = state.temperature() / 507.82;
    let rhor = state.mass_density() / 233.182;
    let c = [
        2.53402335 / 1e6,
        -9.724061002 / 1e6,
        0.469437316,
        158.5571631,
        72.42916856 / 1e6,
        10.60751253,
        8.628373915,
        -6.61346441,
        -2.212724566,
    ];
    Ok(rhor.powf(2.0 / 3.0)
        * tr.sqrt()
        * (c[0] / tr
            + c[1] / (c[2] + tr + c[3] * rhor * rhor)
            + c[4] * (1.0 + rhor)
                / (c[5] + c[6] * tr + c[7] * rhor + rhor * rhor + c[8] * rhor * tr)))
}

/// n-Heptane, Michailidou et al. (JPCRD 43, 2014).
pub fn heptane(state: &dyn FluidState) -> TransportResult<f64> {
    require_pure(state, "viscosity_heptane_higher_order_hardcoded")?;
    let tr = state.temperature() / 540.13;
    let rhor = state.mass_density() / 232.0;
    let c = [
        0.0,
        22.15000 / 1e6,
        -15.00870 / 1e6,
        3.71791 / 1e6,
        77.72818 / 1e6,
        9.73449,
        9.51900,
        -6.34076,
        -2.51909,
    ];
    Ok(rhor.powf(2.0 / 3.0)
        * tr.sqrt()
        * (c[1] * rhor
            + c[2] * rhor.powi(2)
            + c[3] * rhor.powi(3)
            + c[4] * rhor / (c[5] + c[6] * tr + c[7] * rhor + rhor * rhor + c[8] * rhor * tr)))
}

/// Ethane, Friend et al. (JPCRD 20, 1991).
pub fn ethane(state: &dyn FluidState) -> TransportResult<f64> {
    require_pure(state, "viscosity_ethane_higher_order_hardcoded")?;
    const R: [f64; 12] = [0.0, 1.0, 1.0, 2.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0, 1.0, 1.0];
    const S: [f64; 12] = [0.0, 0.0, 1.0, 0.0, 1.0, 1.5, 0.0, 2.0, 0.0, 1.0, 0.0, 1.0];
    const G: [f64; 12] = [
        0.0,
        0.47177003,
        -0.23950311,
        0.39808301,
        -0.27343335,
        0.35192260,
        -0.21101308,
        -0.00478579,
        0.07378129,
        -0.030435255,
        -0.30435286,
        0.001215675,
    ];
    let tau = 305.33 / state.temperature();
    let delta = state.molar_density() / 6870.0;
    let term = |i: usize| G[i] * delta.powf(R[i]) * tau.powf(S[i]);
    let sum1: f64 = (1..=9).map(term).sum();
    let sum2: f64 = (10..=11).map(term).sum();
    Ok(15.977 * sum1 / (1.0 + sum2) / 1e6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tt_core::numeric::{Tolerances, nearly_equal};
    use tt_fluids::fixtures::{as_mixture, ethane as ethane_fluid, methane, state};

    fn simple_bh() -> BatschinskiHildebrandData {
        // S = 1e-6 δ, F = 1e-6, δ₀ = 2
        BatschinskiHildebrandData {
            a: vec![1e-6],
            d1: vec![1.0],
            t1: vec![0.0],
            gamma: vec![0.0],
            l: vec![1.0],
            f: vec![1e-6],
            d2: vec![0.0],
            t2: vec![0.0],
            g: vec![2.0],
            h: vec![0.0],
            p: vec![1.0],
            q: vec![0.0],
            t_reducing: 190.564,
            rhomolar_reducing: 10_000.0,
        }
    }

    #[test]
    fn batschinski_hildebrand_closed_form() {
        let s = state(methane(), 5000.0, 300.0).unwrap();
        let v = modified_batschinski_hildebrand(&s, &simple_bh()).unwrap();
        let expected = 1e-6 * 0.5 + 1e-6 * (1.0 / 1.5 - 0.5);
        assert!(nearly_equal(v, expected, Tolerances::default()));
    }

    #[test]
    fn batschinski_hildebrand_singular_point_is_an_error() {
        let mut data = simple_bh();
        data.g = vec![0.5];
        let s = state(methane(), 5000.0, 300.0).unwrap();
        let err = modified_batschinski_hildebrand(&s, &data).unwrap_err();
        assert!(matches!(err, TransportError::Degenerate { .. }));
    }

    fn friction_data() -> FrictionTheoryData {
        FrictionTheoryData {
            c1: 0.0,
            c2: 0.0,
            t_reducing: 190.564,
            a_i: [1e-8, 0.0, 0.0],
            a_a: [2e-8, 0.0, 0.0],
            a_r: [3e-8, 0.0, 0.0],
            a_aa: [0.0; 3],
            a_rr: None,
            a_drdr: Some([0.0; 3]),
            a_ii: None,
            a_rrr: None,
            a_aaa: None,
            n_a: 0.0,
            n_r: 0.0,
            n_aa: 0.0,
            n_rr: 0.0,
            n_ii: 0.0,
            n_rrr: 0.0,
            n_aaa: 0.0,
        }
    }

    #[test]
    fn friction_theory_first_order_terms() {
        let s = state(methane(), 3000.0, 250.0).unwrap();
        let data = friction_data();
        let tau = 190.564 / 250.0;

        let p = s.pressure() / 1e5;
        let pr = 250.0 * s.dp_dt_constant_rho() / 1e5;
        let pid = 3000.0 * s.gas_constant() * 250.0 / 1e5;
        let expected = 2e-8 * (p - pr) + 3e-8 * (pr - pid) + 1e-8 * tau * pid;

        let v = friction_theory(&s, &data).unwrap();
        assert!(nearly_equal(v, expected, Tolerances::relative(1e-12)));
    }

    #[test]
    fn friction_theory_third_order_needs_all_three() {
        let s = state(methane(), 3000.0, 250.0).unwrap();
        let base = friction_theory(&s, &friction_data()).unwrap();

        let mut partial = friction_data();
        partial.a_ii = Some([1.0, 0.0, 0.0]);
        partial.a_rrr = Some([1.0, 0.0, 0.0]);
        assert_eq!(friction_theory(&s, &partial).unwrap(), base);

        partial.a_aaa = Some([1.0, 0.0, 0.0]);
        assert_ne!(friction_theory(&s, &partial).unwrap(), base);
    }

    #[test]
    fn friction_theory_without_second_order_repulsive_data() {
        let mut data = friction_data();
        data.a_drdr = None;
        let s = state(methane(), 3000.0, 250.0).unwrap();
        assert!(matches!(
            friction_theory(&s, &data),
            Err(TransportError::MissingData { .. })
        ));
    }

    #[test]
    fn ethane_higher_order_is_positive_in_dense_gas() {
        let s = state(ethane_fluid(), 8000.0, 320.0).unwrap();
        let v = ethane(&s).unwrap();
        assert!(v > 0.0 && v < 1e-4, "{v}");
    }

    #[test]
    fn hardcoded_terms_vanish_at_zero_density_limit() {
        let s = state(methane(), 1e-9, 300.0).unwrap();
        for v in [
            hydrogen(&s).unwrap(),
            benzene(&s).unwrap(),
            hexane(&s).unwrap(),
            heptane(&s).unwrap(),
            ethane(&s).unwrap(),
        ] {
            assert!(v.abs() < 1e-12, "{v}");
        }
    }

    #[test]
    fn every_form_rejects_mixtures() {
        let s = state(as_mixture(methane()), 100.0, 300.0).unwrap();
        assert!(hydrogen(&s).is_err());
        assert!(benzene(&s).is_err());
        assert!(hexane(&s).is_err());
        assert!(heptane(&s).is_err());
        assert!(ethane(&s).is_err());
        assert!(modified_batschinski_hildebrand(&s, &simple_bh()).is_err());
        assert!(friction_theory(&s, &friction_data()).is_err());
    }
}
