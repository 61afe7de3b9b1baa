//! Whole-fluid viscosity correlations whose functional form is unique to one
//! substance. Constants are reproduced as published.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tt_core::units::constants::AVOGADRO;
use tt_fluids::FluidState;

use crate::error::{TransportResult, require_pure};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HardcodedViscosity {
    Water,
    Helium,
    Methanol,
    R23,
}

pub fn evaluate(fluid: HardcodedViscosity, state: &dyn FluidState) -> TransportResult<f64> {
    match fluid {
        HardcodedViscosity::Water => water(state),
        HardcodedViscosity::Helium => helium(state),
        HardcodedViscosity::Methanol => methanol(state),
        HardcodedViscosity::R23 => r23(state),
    }
}

/// Dilute and finite-density factors μ̄₀, μ̄₁ of the IAPWS 2008 formulation.
fn water_background(tbar: f64, rhobar: f64) -> (f64, f64) {
    let mut h = [[0.0_f64; 7]; 6];
    h[0][0] = 5.20094e-1;
    h[1][0] = 8.50895e-2;
    h[2][0] = -1.08374;
    h[3][0] = -2.89555e-1;

    h[0][1] = 2.22531e-1;
    h[1][1] = 9.99115e-1;
    h[2][1] = 1.88797;
    h[3][1] = 1.26613;
    h[5][1] = 1.20573e-1;

    h[0][2] = -2.81378e-1;
    h[1][2] = -9.06851e-1;
    h[2][2] = -7.72479e-1;
    h[3][2] = -4.89837e-1;
    h[4][2] = -2.57040e-1;

    h[0][3] = 1.61913e-1;
    h[1][3] = 2.57399e-1;

    h[0][4] = -3.25372e-2;
    h[3][4] = 6.98452e-2;

    h[4][5] = 8.72102e-3;

    h[3][6] = -4.35673e-3;
    h[5][6] = -5.93264e-4;

    let mubar_0 = 100.0 * tbar.sqrt()
        / (1.67752 + 2.20462 / tbar + 0.6366564 / tbar.powi(2) - 0.241605 / tbar.powi(3));

    let mut sum = 0.0;
    for (i, row) in h.iter().enumerate() {
        for (j, hij) in row.iter().enumerate() {
            sum += (1.0 / tbar - 1.0).powi(i as i32) * (hij * (rhobar - 1.0).powi(j as i32));
        }
    }
    (mubar_0, (rhobar * sum).exp())
}

/// Water, IAPWS 2008 (Huber et al., JPCRD 38, 2009) including the critical enhancement.
pub fn water(state: &dyn FluidState) -> TransportResult<f64> {
    require_pure(state, "viscosity_water_hardcoded")?;

    let x_mu = 0.068;
    let qc = 1.0 / 1.9;
    let qd = 1.0 / 1.1;
    let nu = 0.630;
    let gamma = 1.239;
    let zeta_0 = 0.13;
    let lambda_0 = 0.06;
    let tbar_r = 1.5;

    let pstar = 22.064e6; // [Pa]
    let tstar = 647.096; // [K]
    let rhostar = 322.0; // [kg/m³]
    let t = state.temperature();
    let tbar = t / tstar;
    let rhobar = state.mass_density() / rhostar;
    let r_water = state.gas_constant() / state.molar_mass(); // [J/(kg·K)]

    let (mubar_0, mubar_1) = water_background(tbar, rhobar);

    // Critical enhancement
    let delta = rhobar;
    let drhodp = 1.0
        / (r_water
            * t
            * (1.0
                + 2.0 * delta * state.alphar_deriv(0, 1)
                + delta * delta * state.alphar_deriv(0, 2)));
    let drhobar_dpbar = pstar / rhostar * drhodp;

    let tau_r = 1.0 / tbar_r;
    let drhodp_r = 1.0
        / (r_water
            * tbar_r
            * tstar
            * (1.0
                + 2.0 * rhobar * state.alphar_deriv_at(0, 1, tau_r, delta)
                + delta * delta * state.alphar_deriv_at(0, 2, tau_r, delta)));
    let drhobar_dpbar_r = pstar / rhostar * drhodp_r;

    let delta_chibar = (rhobar * (drhobar_dpbar - drhobar_dpbar_r * tbar_r / tbar)).max(0.0);
    let zeta = zeta_0 * (delta_chibar / lambda_0).powf(nu / gamma);

    let y = if zeta < 0.3817016416 {
        1.0 / 5.0
            * qc
            * zeta
            * (qd * zeta).powi(5)
            * (1.0 - qc * zeta + (qc * zeta).powi(2) - 765.0 / 504.0 * (qd * zeta).powi(2))
    } else {
        let psi_d = (1.0 + (qd * zeta).powi(2)).powf(-0.5).acos();
        let w = ((qc * zeta - 1.0) / (qc * zeta + 1.0)).abs().sqrt() * (psi_d / 2.0).tan();
        let l = if qc * zeta > 1.0 {
            ((1.0 + w) / (1.0 - w)).ln()
        } else {
            2.0 * w.abs().atan()
        };
        1.0 / 12.0 * (3.0 * psi_d).sin() - 1.0 / (4.0 * qc * zeta) * (2.0 * psi_d).sin()
            + 1.0 / (qc * zeta).powi(2) * (1.0 - 5.0 / 4.0 * (qc * zeta).powi(2)) * psi_d.sin()
            - 1.0 / (qc * zeta).powi(3)
                * ((1.0 - 3.0 / 2.0 * (qc * zeta).powi(2)) * psi_d
                    - ((qc * zeta).powi(2) - 1.0).abs().powf(3.0 / 2.0) * l)
    };
    let mubar_2 = (x_mu * y).exp();

    Ok(mubar_0 * mubar_1 * mubar_2 / 1e6)
}

/// Helium-4, Arp, McCarty and Friend (NIST TN 1334, 1998).
///
/// The report is unclear on viscosity; this follows the REFPROP form.
pub fn helium(state: &dyn FluidState) -> TransportResult<f64> {
    require_pure(state, "viscosity_helium_hardcoded")?;

    // [g/cm³]
    let rho = state.mass_density() / 1000.0;
    let t = state.temperature();
    let x = if t <= 300.0 { t.ln() } else { 300f64.ln() };

    let b = -47.5295259 / x + 87.6799309 - 42.0741589 * x + 8.33128289 * x * x
        - 0.589252385 * x * x * x;
    let c = 547.309267 / x - 904.870586 + 431.404928 * x - 81.4504854 * x * x
        + 5.37008433 * x * x * x;
    let d = -1684.39324 / x + 3331.08630 - 1632.19172 * x + 308.804413 * x * x
        - 20.2936367 * x * x * x;
    let eta_0_slash = -0.135311743 / x + 1.00347841 + 1.20654649 * x - 0.149564551 * x * x
        + 0.012520841 * x * x * x;
    let eta_e_slash = rho * b + rho * rho * c + rho * rho * rho * d;
    let ln_eta = eta_0_slash + eta_e_slash;

    // Correlation is in µg/(cm·s); /10 gives µPa·s.
    if t <= 100.0 {
        Ok(ln_eta.exp() / 10.0 / 1e6)
    } else {
        let eta_0 = 196.0 * t.powf(0.71938) * (12.451 / t - 295.67 / t / t - 4.1249).exp();
        Ok((ln_eta.exp() + eta_0 - eta_0_slash.exp()) / 10.0 / 1e6)
    }
}

/// Methanol, Xiang, Laesecke and Huber (JPCRD 35, 2006).
pub fn methanol(state: &dyn FluidState) -> TransportResult<f64> {
    require_pure(state, "viscosity_methanol_hardcoded")?;

    let epsilon_over_k = 577.87; // [K]
    let sigma0: f64 = 0.3408e-9; // [m]
    let delta: f64 = 0.4575; // dipole parameter, not a reduced density
    let m = 32.04216; // [kg/kmol]
    let t = state.temperature();
    let rhomolar = state.molar_density();

    let t_star = t / epsilon_over_k;
    let rhor = state.mass_density() / 273.0;
    let tr = t / 512.6;

    // Rainwater-Friend second and third viscosity virials
    let b = [
        -19.572881, 219.73999, -1015.3226, 2471.01251, -3375.1717, 2491.6597, -787.26086,
        14.085455, -0.34664158,
    ];
    let bt = [0.0, -0.25, -0.5, -0.75, -1.0, -1.25, -1.5, -2.5, -5.5];
    let b_eta_star: f64 = b.iter().zip(bt).map(|(b, t)| b * t_star.powf(t)).sum();
    let b_eta = AVOGADRO * sigma0.powi(3) * b_eta_star; // [m³/mol]

    let c = [1.86222085e-3, 9.990338];
    let c_eta_star = c[0] * t_star.powi(3) * (c[1] * t_star.powf(-0.5)).exp();
    let c_eta = (AVOGADRO * sigma0.powi(3)).powi(2) * c_eta_star; // [m⁶/mol²]

    let eta_g = 1.0 + b_eta * rhomolar + c_eta * rhomolar * rhomolar;

    let a = [
        1.16145, -0.14874, 0.52487, -0.77320, 2.16178, -2.43787, 0.95976e-3, 0.10225, -0.97346,
        0.10657, -0.34528, -0.44557, -2.58055,
    ];
    let d = [
        -1.181909, 0.5031030, -0.6268461, 0.5169312, -0.2351349, 5.3980235e-2, -4.9069617e-3,
    ];
    let e = [
        0.0,
        4.018368,
        -4.239180,
        2.245110,
        -0.5750698,
        2.3021026e-2,
        2.5696775e-2,
        -6.8372749e-3,
        7.2707189e-4,
        -2.9255711e-5,
    ];

    let omega22_lj =
        a[0] * t_star.powf(a[1]) + a[2] * (a[3] * t_star).exp() + a[4] * (a[5] * t_star).exp();
    let omega22_delta =
        a[7] * t_star.powf(a[8]) + a[9] * (a[10] * t_star).exp() + a[11] * (a[12] * t_star).exp();
    let omega22_sm =
        omega22_lj * (1.0 + delta.powi(2) / (1.0 + a[6] * delta.powi(6)) * omega22_delta);
    let eta_0 = 2.66957e-26 * (m * t).sqrt() / (sigma0.powi(2) * omega22_sm);

    let mut summerd = 0.0;
    for (i, di) in d.iter().enumerate() {
        summerd += di / tr.powi(i as i32);
    }
    for (j, ej) in e.iter().enumerate().skip(1) {
        summerd += ej * rhor.powi(j as i32);
    }
    let sigmac = 0.7193422e-9; // [m]
    let sigma_hs = summerd * sigmac; // [m]
    let b_hs = 2.0 * PI * AVOGADRO * sigma_hs.powi(3) / 3.0; // [m³/mol]
    let zeta = b_hs * rhomolar / 4.0;
    let g_sigma_hs = (1.0 - 0.5 * zeta) / (1.0 - zeta).powi(3);
    let eta_e = 1.0 / g_sigma_hs
        + 0.8 * b_hs * rhomolar
        + 0.761 * g_sigma_hs * (b_hs * rhomolar).powi(2);

    let f = 1.0 / (1.0 + (5.0 * (rhor - 1.0)).exp());
    Ok(eta_0 * (f * eta_g + (1.0 - f) * eta_e))
}

/// R23, Shan, Penoncello and Jacobsen (ASHRAE Trans. 106, 2000).
pub fn r23(state: &dyn FluidState) -> TransportResult<f64> {
    require_pure(state, "viscosity_R23_hardcoded")?;

    let c1 = 1.3163;
    let c2 = 0.1832;
    let delta_g_star = 771.23;
    let rho_l = 32.174;
    let rhocbar = 7.5114;
    let tc = 299.2793;
    let delta_eta_max = 3.967;
    let ru = 8.31451;
    let molar_mass = 70.014;

    let a = [0.4425728, -0.5138403, 0.1547566, -0.02821844, 0.001578286];
    let e_k = 243.91;
    let sigma = 0.4278;
    let t = state.temperature();
    let log_t_star = (t / e_k).ln();
    let omega = (a[0]
        + a[1] * log_t_star
        + a[2] * log_t_star.powi(2)
        + a[3] * log_t_star.powi(3)
        + a[4] * log_t_star.powi(4))
    .exp();
    let eta_dg = 1.25 * 0.021357 * (molar_mass * t).sqrt() / (sigma * sigma * omega); // [µPa·s]

    let rhobar = state.molar_density() / 1000.0; // [mol/L]
    let eta_l = c2 * (rho_l * rho_l) / (rho_l - rhobar)
        * t.sqrt()
        * (rhobar / (rho_l - rhobar) * delta_g_star / (ru * t)).exp();

    let chi = rhobar - rhocbar;
    let tau = t - tc;
    let delta_eta_c =
        4.0 * delta_eta_max / ((chi.exp() + (-chi).exp()) * (tau.exp() + (-tau).exp()));

    Ok((((rho_l - rhobar) / rho_l).powf(c1) * eta_dg
        + (rhobar / rho_l).powf(c1) * eta_l
        + delta_eta_c)
        / 1e6)
}
