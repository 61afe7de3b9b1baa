//! Critical enhancement of thermal conductivity [W/(m·K)].

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tt_core::units::constants::BOLTZMANN;
use tt_fluids::FluidState;
use tracing::trace;

use crate::error::{TransportError, TransportResult, require_pure};

/// Simplified Olchowy-Sengers crossover parameters.
///
/// Defaults are the generic values of Lemmon and Jacobsen (IJT 25, 2004).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OlchowySengersData {
    /// Boltzmann constant [J/K]
    pub k: f64,
    #[serde(rename = "R0")]
    pub r0: f64,
    pub nu: f64,
    pub gamma: f64,
    #[serde(rename = "GAMMA")]
    pub big_gamma: f64,
    /// [m]
    pub zeta0: f64,
    /// [1/m]
    #[serde(rename = "qD")]
    pub q_d: f64,
    /// Reference temperature [K]; 1.5 T_c when absent
    #[serde(rename = "T_ref")]
    pub t_ref: Option<f64>,
}

impl Default for OlchowySengersData {
    fn default() -> Self {
        Self {
            k: 1.3806488e-23,
            r0: 1.03,
            nu: 0.63,
            gamma: 1.239,
            big_gamma: 0.0496,
            zeta0: 1.94e-10,
            q_d: 2e9,
            t_ref: None,
        }
    }
}

/// Simplified Olchowy-Sengers term.
///
/// Exactly zero when X − X_ref < 10·ε (Lemmon, IJT 25, 2004, p. 27). Otherwise
/// `viscosity` is called once for the fluid's own total viscosity [Pa·s].
pub fn olchowy_sengers<V>(
    state: &dyn FluidState,
    data: &OlchowySengersData,
    viscosity: V,
) -> TransportResult<f64>
where
    V: FnOnce() -> TransportResult<f64>,
{
    require_pure(state, "conductivity_critical_simplified_Olchowy_Sengers")?;

    let reducing = state.reducing();
    let tc = reducing.temperature;
    let rhoc = reducing.molar_density;
    let pcrit = reducing.pressure;
    let t_ref = data.t_ref.unwrap_or(1.5 * tc);
    let t = state.temperature();
    let rhomolar = state.molar_density();
    let delta = state.delta();
    let r = state.gas_constant();

    let dp_drho = r
        * t
        * (1.0 + 2.0 * delta * state.alphar_deriv(0, 1) + delta * delta * state.alphar_deriv(0, 2));
    let x = pcrit / rhoc.powi(2) * rhomolar / dp_drho;

    let tau_ref = tc / t_ref;
    let dp_drho_ref = r
        * t_ref
        * (1.0
            + 2.0 * delta * state.alphar_deriv_at(0, 1, tau_ref, delta)
            + delta * delta * state.alphar_deriv_at(0, 2, tau_ref, delta));
    let x_ref = pcrit / rhoc.powi(2) * rhomolar / dp_drho_ref * t_ref / t;

    let num = x - x_ref;
    if num < f64::EPSILON * 10.0 {
        trace!(x, x_ref, "no critical enhancement");
        return Ok(0.0);
    }
    let zeta = data.zeta0 * (num / data.big_gamma).powf(data.nu / data.gamma); // [m]

    let cp = state.cpmolar();
    let cv = state.cvmolar();
    let mu = viscosity()?;

    let zq = zeta * data.q_d;
    let omega_tilde = 2.0 / PI * ((cp - cv) / cp * zq.atan() + cv / cp * zq);
    let omega_tilde0 =
        2.0 / PI * (1.0 - (-1.0 / (1.0 / zq + 1.0 / 3.0 * zq * zq / delta / delta)).exp());

    Ok(rhomolar * cp * data.r0 * data.k * t / (6.0 * PI * mu * zeta) * (omega_tilde - omega_tilde0))
}

/// R123, Laesecke et al. (IJT 17, 1996).
pub fn r123(state: &dyn FluidState) -> TransportResult<f64> {
    require_pure(state, "conductivity_critical_hardcoded_R123")?;
    let (a13, a14, a15) = (0.486742e-2, -100.0, -7.08535);
    Ok(a13 * (a14 * (state.tau() - 1.0).powi(4) + a15 * (state.delta() - 1.0).powi(2)).exp())
}

/// Carbon dioxide, Scalabrin et al. (JPCRD 35, 2006).
pub fn co2_scalabrin(state: &dyn FluidState) -> TransportResult<f64> {
    require_pure(state, "conductivity_critical_hardcoded_CO2_ScalabrinJPCRD2006")?;
    let nc = 0.775547504e-3 * 4.81384;
    let tr = state.temperature() / 304.1282;
    let rhor = state.mass_density() / 467.6;
    let a = [
        0.0, 3.0, 6.70697, 0.94604, 0.30, 0.30, 0.39751, 0.33791, 0.77963, 0.79857, 0.90, 0.02,
        0.20,
    ];

    // Eq. 6
    let alpha = 1.0 - a[10] * (1.0 + a[11] * ((1.0 - tr).powi(2)).powf(a[12])).acosh();

    // Eq. 5
    let numer = rhor
        * (-rhor.powf(a[1]) / a[1] - (a[2] * (tr - 1.0)).powi(2) - (a[3] * (rhor - 1.0)).powi(2))
            .exp();
    let braced = (1.0 - 1.0 / tr) + a[4] * ((rhor - 1.0).powi(2)).powf(0.5 / a[5]);
    let denom = (braced.powi(2).powf(a[6]) + (a[7] * (rhor - alpha)).powi(2).powf(a[8])).powf(a[9]);
    Ok(nc * numer / denom)
}

/// Ammonia, Tufeu et al. (Ber. Bunsenges. Phys. Chem. 88, 1984).
///
/// Singular at T = T_c = 405.4 K, where it fails with `Degenerate`.
pub fn ammonia(state: &dyn FluidState) -> TransportResult<f64> {
    require_pure(state, "conductivity_critical_hardcoded_ammonia")?;

    let t = state.temperature();
    let (tc, rhoc) = (405.4, 235.0);
    let big_lambda = 1.2;
    let nu = 0.63;
    let gamma = 1.24;
    let big_delta = 0.50;
    let zeta_0_plus = 1.34e-10;
    let a_zeta = 1.0;
    let big_gamma_0_plus = 0.423e-8;
    let pi = 3.141592654;

    let rho = state.mass_density();
    let tt = ((t - tc) / tc).abs();
    if tt == 0.0 {
        return Err(TransportError::Degenerate {
            what: "ammonia critical enhancement at T = T_c".to_string(),
        });
    }
    let a_chi = a_zeta / 0.7;
    let eta_b = (2.60 + 1.6 * tt) * 1e-5;
    let dp_dt = (2.18 - 0.12 / (17.8 * tt).exp()) * 1e5; // [Pa/K]
    let x_t = 0.61 * rhoc + 16.5 * tt.ln();

    // Along the critical isochore (Eq. 9)
    let delta_lambda_i = big_lambda * (BOLTZMANN * t * t)
        / (6.0 * pi * eta_b * (zeta_0_plus * tt.powf(-nu) * (1.0 + a_zeta * tt.powf(big_delta))))
        * dp_dt
        * dp_dt
        * big_gamma_0_plus
        * tt.powf(-gamma)
        * (1.0 + a_chi * tt.powf(big_delta));
    let delta_lambda_id = delta_lambda_i * (-36.0 * tt * tt).exp();

    let delta_lambda = if rho < 0.6 * rhoc {
        delta_lambda_id * (x_t * x_t) / (x_t * x_t + (0.6 * rhoc - 0.96 * rhoc).powi(2))
            * rho.powi(2)
            / (0.6 * rhoc).powi(2)
    } else {
        delta_lambda_id * (x_t * x_t) / (x_t * x_t + (rho - 0.96 * rhoc).powi(2))
    };
    Ok(delta_lambda)
}
