//! Ready-made fluids for tests and demos.
//!
//! Residual parts use the twelve-term short form of Span and Wagner
//! (Int. J. Thermophys. 24, 2003) for non-polar fluids. Ideal-gas parts use a
//! constant heat capacity close to the room-temperature value, which is enough
//! for exercising transport correlations but not for caloric accuracy.

use std::sync::Arc;

use tt_core::units::constants::GAS_CONSTANT;

use crate::composition::Composition;
use crate::error::FluidResult;
use crate::helmholtz::{
    HelmholtzFluid, HelmholtzState, IdealHelmholtz, ResidualTerm, ValidityLimits,
};
use crate::state::ReducingState;

/// Span-Wagner short form exponents (d, t, l) shared by all non-polar fluids.
const SHORT_FORM: [(f64, f64, f64); 12] = [
    (1.0, 0.25, 0.0),
    (1.0, 1.125, 0.0),
    (1.0, 1.5, 0.0),
    (2.0, 1.375, 0.0),
    (3.0, 0.25, 0.0),
    (7.0, 0.875, 0.0),
    (2.0, 0.625, 1.0),
    (5.0, 1.75, 1.0),
    (1.0, 3.625, 2.0),
    (4.0, 3.625, 2.0),
    (3.0, 14.5, 3.0),
    (4.0, 12.0, 3.0),
];

fn short_form(n: [f64; 12]) -> Vec<ResidualTerm> {
    n.iter()
        .zip(SHORT_FORM)
        .map(|(n, (d, t, l))| {
            if l == 0.0 {
                ResidualTerm::power(*n, d, t)
            } else {
                ResidualTerm::exponential(*n, d, t, l)
            }
        })
        .collect()
}

struct Constants {
    name: &'static str,
    molar_mass: f64,
    t_c: f64,
    rhomolar_c: f64,
    p_c: f64,
    cp0_over_r: f64,
    limits: ValidityLimits,
    n: [f64; 12],
}

fn build(c: Constants) -> HelmholtzFluid {
    HelmholtzFluid {
        name: c.name.to_string(),
        composition: Composition::pure(c.name),
        molar_mass: c.molar_mass,
        gas_constant: GAS_CONSTANT,
        reducing: ReducingState {
            temperature: c.t_c,
            molar_density: c.rhomolar_c,
            pressure: c.p_c,
        },
        critical_temperature: c.t_c,
        critical_molar_density: c.rhomolar_c,
        residual: short_form(c.n),
        ideal: IdealHelmholtz::constant_cp(c.cp0_over_r),
        limits: c.limits,
    }
}

pub fn methane() -> HelmholtzFluid {
    build(Constants {
        name: "Methane",
        molar_mass: 0.016_042_46,
        t_c: 190.564,
        rhomolar_c: 10_139.342_719,
        p_c: 4.5992e6,
        cp0_over_r: 4.3,
        limits: ValidityLimits {
            t_min: 90.6941,
            t_max: 750.0,
            rhomolar_max: 40_072.0,
        },
        n: [
            0.89269676,
            -2.5438282,
            0.64980978,
            0.020793471,
            0.070189104,
            0.00023700378,
            0.16653334,
            -0.043855669,
            -0.1572678,
            -0.035311675,
            -0.029570024,
            0.014019842,
        ],
    })
}

pub fn ethane() -> HelmholtzFluid {
    build(Constants {
        name: "Ethane",
        molar_mass: 0.030_069_04,
        t_c: 305.322,
        rhomolar_c: 6_870.854_540,
        p_c: 4.8722e6,
        cp0_over_r: 6.3,
        limits: ValidityLimits {
            t_min: 90.368,
            t_max: 750.0,
            rhomolar_max: 22_419.0,
        },
        n: [
            0.97628068,
            -2.6905251,
            0.73498222,
            -0.035366206,
            0.084692031,
            0.00024154594,
            0.23964954,
            -0.042780093,
            -0.22308832,
            -0.051799954,
            -0.027178426,
            0.011246305,
        ],
    })
}

pub fn nitrogen() -> HelmholtzFluid {
    build(Constants {
        name: "Nitrogen",
        molar_mass: 0.028_013_48,
        t_c: 126.192,
        rhomolar_c: 11_183.9,
        p_c: 3.3958e6,
        cp0_over_r: 3.5,
        limits: ValidityLimits {
            t_min: 63.151,
            t_max: 1000.0,
            rhomolar_max: 53_150.0,
        },
        n: [
            0.92296567,
            -2.5575012,
            0.64482463,
            0.01083102,
            0.073924167,
            0.00023532962,
            0.18024854,
            -0.045660299,
            -0.1552106,
            -0.03811149,
            -0.031962422,
            0.015513532,
        ],
    })
}

/// Same equation of state as `fluid`, but flagged as a two-component mixture.
pub fn as_mixture(mut fluid: HelmholtzFluid) -> HelmholtzFluid {
    let fractions = vec![(fluid.name.clone(), 0.5), ("Other".to_string(), 0.5)];
    fluid.composition = Composition::new_mole_fractions(fractions).unwrap_or(fluid.composition);
    fluid
}

/// Shortcut for a state of one of the fluids above.
pub fn state(fluid: HelmholtzFluid, rhomolar: f64, t: f64) -> FluidResult<HelmholtzState> {
    HelmholtzState::new(Arc::new(fluid), rhomolar, t)
}
