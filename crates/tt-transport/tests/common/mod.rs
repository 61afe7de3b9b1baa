//! Records shared by the integration tests.
#![allow(dead_code)]

use tt_transport::conductivity::{RatioOfPolynomialsData, ResidualPolynomialData};
use tt_transport::viscosity::RainwaterFriendData;
use tt_transport::{
    ConductivityCorrelation, ConductivityCritical, ConductivityDilute, ConductivityEcs,
    ConductivityModel, ConductivityResidual, OlchowySengersData, TransportData,
    ViscosityCorrelation, ViscosityDilute, ViscosityEcs, ViscosityInitialDensity, ViscosityModel,
};

pub const METHANE_EPSILON_OVER_K: f64 = 174.0;
pub const METHANE_SIGMA: f64 = 0.3709e-9;

/// Methane as a correlated reference fluid.
pub fn methane_correlated() -> TransportData {
    TransportData::new(METHANE_EPSILON_OVER_K, METHANE_SIGMA)
        .with_viscosity(ViscosityModel::Correlated(ViscosityCorrelation {
            dilute: ViscosityDilute::KineticTheory,
            initial_density: Some(ViscosityInitialDensity::RainwaterFriend(
                RainwaterFriendData::vogel(),
            )),
            higher_order: None,
        }))
        .with_conductivity(ConductivityModel::Correlated(ConductivityCorrelation {
            dilute: ConductivityDilute::RatioOfPolynomials(RatioOfPolynomialsData {
                a: vec![-3.0e-3, 3.0e-2],
                n: vec![0.0, 1.0],
                b: vec![1.0],
                m: vec![0.0],
                t_reducing: 190.564,
            }),
            residual: Some(ConductivityResidual::Polynomial(ResidualPolynomialData {
                b: vec![1.0e-2, 5.0e-3],
                t: vec![0.0, 0.0],
                d: vec![1.0, 2.0],
                t_reducing: 190.564,
                rhomass_reducing: 162.66,
            })),
            critical: Some(ConductivityCritical::SimplifiedOlchowySengers(
                OlchowySengersData::default(),
            )),
        }))
}

pub fn viscosity_ecs(psi_rhomolar_reducing: f64) -> ViscosityEcs {
    ViscosityEcs {
        psi_a: vec![1.0],
        psi_t: vec![0.0],
        psi_rhomolar_reducing,
    }
}

pub fn conductivity_ecs(psi_rhomolar_reducing: f64) -> ConductivityEcs {
    ConductivityEcs {
        psi_a: vec![1.0],
        psi_t: vec![0.0],
        psi_rhomolar_reducing,
        f_int_a: vec![1.32e-3],
        f_int_t: vec![0.0],
        f_int_t_reducing: 1.0,
        critical: OlchowySengersData::default(),
    }
}

/// A fluid described only through ECS, with Lennard-Jones parameters for its
/// own dilute-gas terms.
pub fn ecs_fluid(epsilon_over_k: f64, sigma: f64, psi_rhomolar_reducing: f64) -> TransportData {
    TransportData::new(epsilon_over_k, sigma)
        .with_viscosity(ViscosityModel::Ecs(viscosity_ecs(psi_rhomolar_reducing)))
        .with_conductivity(ConductivityModel::Ecs(conductivity_ecs(psi_rhomolar_reducing)))
}

/// Ethane mapped onto methane.
pub fn ethane_ecs() -> TransportData {
    ecs_fluid(245.0, 0.4419e-9, 6_870.854_540)
}
