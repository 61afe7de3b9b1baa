//! Whole-fluid thermal conductivity correlations [W/(m·K)].

use serde::{Deserialize, Serialize};
use tracing::trace;
use tt_fluids::FluidState;

use crate::error::{TransportError, TransportResult, require_pure};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardcodedConductivity {
    Water,
    R23,
    Helium,
}

/// Evaluate `fluid`'s correlation. `viscosity` supplies the fluid's own total
/// viscosity [Pa·s] and is only called by terms that need it.
pub fn evaluate<V>(
    fluid: HardcodedConductivity,
    state: &dyn FluidState,
    viscosity: V,
) -> TransportResult<f64>
where
    V: FnOnce() -> TransportResult<f64>,
{
    match fluid {
        HardcodedConductivity::Water => water(state, viscosity),
        HardcodedConductivity::R23 => r23(state),
        HardcodedConductivity::Helium => helium(state, viscosity),
    }
}

const WATER_L: [[f64; 6]; 5] = [
    [1.60397357, -0.646013523, 0.111443906, 0.102997357, -0.0504123634, 0.00609859258],
    [2.33771842, -2.78843778, 1.53616167, -0.463045512, 0.0832827019, -0.00719201245],
    [2.19650529, -4.54580785, 3.55777244, -1.40944978, 0.275418278, -0.0205938816],
    [-1.21051378, 1.60812989, -0.621178141, 0.0716373224, 0.0, 0.0],
    [-2.7203370, 4.57586331, -3.18369245, 1.1168348, -0.19268305, 0.012913842],
];

/// λ̄₀ and λ̄₁ of the IAPWS 2011 formulation.
fn water_background(tbar: f64, rhobar: f64) -> (f64, f64) {
    let lambdabar_0 = tbar.sqrt()
        / (2.443221e-3 + 1.323095e-2 / tbar + 6.770357e-3 / tbar.powi(2)
            - 3.454586e-3 / tbar.powi(3)
            + 4.096266e-4 / tbar.powi(4));

    let mut sum = 0.0;
    for (i, row) in WATER_L.iter().enumerate() {
        for (j, lij) in row.iter().enumerate() {
            sum += lij * (1.0 / tbar - 1.0).powi(i as i32) * (rhobar - 1.0).powi(j as i32);
        }
    }
    (lambdabar_0, (rhobar * sum).exp())
}

/// Water, IAPWS 2011 (Huber et al., JPCRD 41, 2012) including the critical enhancement.
pub fn water<V>(state: &dyn FluidState, viscosity: V) -> TransportResult<f64>
where
    V: FnOnce() -> TransportResult<f64>,
{
    require_pure(state, "conductivity_hardcoded_water")?;

    let tstar = 647.096; // [K]
    let rhostar = 322.0; // [kg/m³]
    let pstar = 22_064_000.0; // [Pa]
    let lambdastar = 1e-3;
    let mustar = 1e-6;
    let r = 461.51805; // [J/(kg·K)]

    let t = state.temperature();
    let tbar = t / tstar;
    let rhobar = state.mass_density() / rhostar;
    let (lambdabar_0, lambdabar_1) = water_background(tbar, rhobar);

    let nu = 0.630;
    let big_gamma = 177.8514;
    let gamma = 1.239;
    let xi_0 = 0.13;
    let lambda_0 = 0.06;
    let tr_bar = 1.5;
    let qd_bar = 1.0 / 0.4;
    let pi = 3.141592654;
    let delta = state.delta();

    let drhodp = 1.0
        / (r * t
            * (1.0
                + 2.0 * rhobar * state.alphar_deriv(0, 1)
                + rhobar * rhobar * state.alphar_deriv(0, 2)));
    let drhobar_dpbar = pstar / rhostar * drhodp;
    let tau_r = 1.0 / tr_bar;
    let drhodp_r = 1.0
        / (r * tr_bar
            * tstar
            * (1.0
                + 2.0 * rhobar * state.alphar_deriv_at(0, 1, tau_r, delta)
                + delta * delta * state.alphar_deriv_at(0, 2, tau_r, delta)));
    let drhobar_dpbar_r = pstar / rhostar * drhodp_r;

    let delta_chibar = rhobar * (drhobar_dpbar - drhobar_dpbar_r * tr_bar / tbar);
    let xi = if delta_chibar < 0.0 {
        0.0
    } else {
        xi_0 * (delta_chibar / lambda_0).powf(nu / gamma)
    };
    let y = qd_bar * xi;

    let lambdabar_2 = if y < 1.2e-7 {
        trace!(y, "water critical enhancement below threshold");
        0.0
    } else {
        let cp = state.cpmass();
        let cv = state.cvmass();
        let kappa = cp / cv;
        let z = 2.0 / (pi * y)
            * (((1.0 - 1.0 / kappa) * y.atan() + y / kappa)
                - (1.0 - (-1.0 / (1.0 / y + y * y / 3.0 / rhobar / rhobar)).exp()));
        let mubar = viscosity()? / mustar;
        big_gamma * rhobar * (cp / r) * tbar / mubar * z
    };

    Ok((lambdabar_0 * lambdabar_1 + lambdabar_2) * lambdastar)
}

/// R23, Shan, Penoncello and Jacobsen (ASHRAE Trans. 106, 2000).
pub fn r23(state: &dyn FluidState) -> TransportResult<f64> {
    require_pure(state, "conductivity_hardcoded_R23")?;

    let b1 = -2.5370; // [mW/(m·K)]
    let b2 = 0.05366; // [mW/(m·K²)]
    let c1 = 0.94215;
    let c2 = 0.14914;
    let delta_g_star = 2508.58; // [J/mol]
    let rho_l = 68.345; // [mol/L]
    let rhocbar = 7.5114; // [mol/L]
    let delta_lambda_max = 25.0; // [mW/(m·K)]
    let ru = 8.31451;
    let tc = 299.2793;
    let t = state.temperature();

    let lambda_dg = b1 + b2 * t;

    let rhobar = state.molar_density() / 1000.0; // [mol/L]
    let lambda_l = c2 * (rho_l * rho_l) / (rho_l - rhobar)
        * t.sqrt()
        * (rhobar / (rho_l - rhobar) * delta_g_star / (ru * t)).exp();

    let chi = rhobar - rhocbar;
    let tau = t - tc;
    let delta_lambda_c =
        4.0 * delta_lambda_max / ((chi.exp() + (-chi).exp()) * (tau.exp() + (-tau).exp()));

    Ok((((rho_l - rhobar) / rho_l).powf(c1) * lambda_dg
        + (rhobar / rho_l).powf(c1) * lambda_l
        + delta_lambda_c)
        / 1e3)
}

/// Helium-4, Hands and Arp (Cryogenics 21, 1981) in the REFPROP form.
///
/// The critical term applies only for 3.5 K < T < 12 K. The excess term has
/// ρ² ln ρ, so zero density fails with `Degenerate`.
pub fn helium<V>(state: &dyn FluidState, viscosity: V) -> TransportResult<f64>
where
    V: FnOnce() -> TransportResult<f64>,
{
    require_pure(state, "conductivity_hardcoded_helium")?;

    let rhoc = 68.0;
    let t = state.temperature();
    let rho = state.mass_density();
    if rho <= 0.0 {
        return Err(TransportError::Degenerate {
            what: "helium conductivity at zero density".to_string(),
        });
    }

    let summer = 3.739232544 / t - 2.620316969e1 / t.powi(2) + 5.982252246e1 / t.powi(3)
        - 4.926397634e1 / t.powi(4);
    let lambda_0 = 2.7870034e-3 * t.powf(7.034007057e-1) * summer.exp();

    let c = [
        1.862970530e-4,
        -7.275964435e-7,
        -1.427549651e-4,
        3.290833592e-5,
        -5.213335363e-8,
        4.492659933e-8,
        -5.924416513e-9,
        7.087321137e-6,
        -6.013335678e-6,
        8.067145814e-7,
        3.995125013e-7,
    ];
    let t13 = t.powf(1.0 / 3.0);
    let t23 = t.powf(2.0 / 3.0);
    // Eq. 17
    let lambda_e = (c[0] + c[1] * t + c[2] * t13 + c[3] * t23) * rho
        + (c[4] + c[5] * t13 + c[6] * t23) * rho.powi(3)
        + (c[7] + c[8] * t13 + c[9] * t23 + c[10] / t) * rho * rho * (rho / rhoc).ln();

    let lambda_c = if 3.5 < t && t < 12.0 {
        helium_critical(state, viscosity()?)
    } else {
        0.0
    };
    Ok(lambda_0 + lambda_e + lambda_c)
}

fn helium_critical(state: &dyn FluidState, eta: f64) -> f64 {
    let x0 = 0.392;
    let e1 = 2.8461;
    let e2 = 0.27156;
    let beta = 0.3554;
    let gamma = 1.1743;
    let delta = 4.304;
    let rhoc_crit = 69.158;
    let tc = 5.18992;
    let pc = 2.2746e5;

    let t = state.temperature();
    let rho = state.mass_density();
    let delta_t = (1.0 - t / tc).abs();
    let delta_rho = (1.0 - rho / rhoc_crit).abs();
    let k_t = state.isothermal_compressibility();
    let dp_dt = state.dp_dt_constant_rho();

    let w = (delta_t / 0.2).powi(2) + (delta_rho / 0.25).powi(2);
    let k_tbar = if w > 1.0 {
        k_t
    } else {
        let x = (delta_t / delta_rho).powf(1.0 / beta);
        let h = e1
            * (1.0 + x / x0)
            * (1.0 + e2 * (1.0 + x / x0).powf(2.0 / beta)).powf((gamma - 1.0) / (2.0 * beta));
        let u = e2 * ((x + x0) / x0).powf(2.0 / beta);
        let dhdx = e1
            * (u * (gamma - 1.0) * (u + 1.0).powf(0.5 * (gamma - 1.0) / beta)
                + beta.powi(2) * (u + 1.0).powf(0.5 * (2.0 * beta + gamma - 1.0) / beta))
            / (beta.powi(2) * x0 * (u + 1.0));
        // Eq. 9
        let rhs = delta_rho.powf(delta - 1.0) * (delta * h - x / beta * dhdx);
        let k_tprime = 1.0 / (rhs * (rho / rhoc_crit).powi(2) * pc);
        w * k_t + (1.0 - w) * k_tprime
    };

    // Both leading factors are carried by REFPROP without a published origin.
    3.4685233e-17 * 3.726229668 * k_tbar.sqrt() * t.powi(2) / rho / eta
        * dp_dt.powi(2)
        * (-18.66 * delta_t.powi(2) - 4.25 * delta_rho.powi(4)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tt_fluids::fixtures::{as_mixture, methane, state};
    use tt_fluids::{Composition, HelmholtzState, ReducingState};

    /// Same fluid, reporting zero density.
    struct Evacuated(HelmholtzState);

    impl FluidState for Evacuated {
        fn name(&self) -> &str {
            self.0.name()
        }
        fn composition(&self) -> &Composition {
            self.0.composition()
        }
        fn temperature(&self) -> f64 {
            self.0.temperature()
        }
        fn molar_density(&self) -> f64 {
            0.0
        }
        fn molar_mass(&self) -> f64 {
            self.0.molar_mass()
        }
        fn gas_constant(&self) -> f64 {
            self.0.gas_constant()
        }
        fn reducing(&self) -> ReducingState {
            self.0.reducing()
        }
        fn alphar_deriv_at(&self, i_tau: usize, i_delta: usize, tau: f64, delta: f64) -> f64 {
            self.0.alphar_deriv_at(i_tau, i_delta, tau, delta)
        }
        fn alpha0_deriv_at(&self, i_tau: usize, i_delta: usize, tau: f64, delta: f64) -> f64 {
            self.0.alpha0_deriv_at(i_tau, i_delta, tau, delta)
        }
    }

    #[test]
    fn water_background_matches_iapws_check_values() {
        // IAPWS 2011 Table 4, λ̄₂ = 0 [mW/(m·K)]
        for (t, rho, expected) in [
            (298.15, 0.0, 18.4341883),
            (298.15, 998.0, 607.712868),
            (298.15, 1200.0, 799.038144),
            (873.15, 0.0, 79.1034659),
        ] {
            let (l0, l1) = water_background(t / 647.096, rho / 322.0);
            let lambda = l0 * l1;
            assert!((lambda - expected).abs() < 1e-6, "T = {t}, rho = {rho}: {lambda}");
        }
    }

    #[test]
    fn water_dilute_state_needs_no_viscosity() {
        let s = state(methane(), 1e-6, 600.0).unwrap();
        let lambda = water(&s, || panic!("viscosity must not be needed")).unwrap();
        let (l0, l1) = water_background(600.0 / 647.096, s.mass_density() / 322.0);
        assert!((lambda - l0 * l1 * 1e-3).abs() < 1e-12);
    }

    #[test]
    fn r23_dilute_gas_magnitude() {
        // ≈ 13.6 mW/(m·K) at 300 K
        let s = state(methane(), 0.01, 300.0).unwrap();
        let lambda = r23(&s).unwrap();
        assert!((lambda - 0.0135825).abs() < 1e-5, "{lambda}");
    }

    #[test]
    fn helium_dilute_gas_magnitude() {
        // ≈ 0.156 W/(m·K) at 300 K
        let s = state(methane(), 0.01, 300.0).unwrap();
        let lambda = helium(&s, || panic!("viscosity must not be needed")).unwrap();
        assert!((lambda - 0.155896).abs() < 1e-4, "{lambda}");
    }

    #[test]
    fn helium_at_zero_density_is_degenerate() {
        let s = Evacuated(state(methane(), 0.01, 300.0).unwrap());
        let err = helium(&s, || panic!("viscosity must not be needed")).unwrap_err();
        assert!(matches!(err, TransportError::Degenerate { .. }));
    }

    #[test]
    fn dispatch_rejects_mixture_for_every_fluid() {
        let s = state(as_mixture(methane()), 100.0, 300.0).unwrap();
        for fluid in [
            HardcodedConductivity::Water,
            HardcodedConductivity::R23,
            HardcodedConductivity::Helium,
        ] {
            assert!(matches!(
                evaluate(fluid, &s, || Ok(1e-5)),
                Err(TransportError::UnsupportedConfiguration { .. })
            ));
        }
    }
}
