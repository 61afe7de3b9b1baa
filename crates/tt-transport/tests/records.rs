//! Coefficient records as an external loader would supply them.

mod common;

use tt_transport::conductivity::OlchowySengersData;
use tt_transport::viscosity::FrictionTheoryData;
use tt_transport::{
    ConductivityCritical, ConductivityModel, HardcodedViscosity, TransportData, TransportError,
    ViscosityHigherOrder, ViscosityModel,
};

const METHANE_JSON: &str = r#"{
    "epsilon_over_k": 174.0,
    "sigma_eta": 3.709e-10,
    "viscosity": {
        "model": "correlated",
        "dilute": { "type": "kinetic_theory" },
        "initial_density": {
            "type": "rainwater_friend",
            "b": [
                -19.572881, 219.73999, -1015.3226, 2471.0125, -3375.1717,
                2491.6597, -787.26086, 14.085455, -0.34664158
            ],
            "t": [0.0, -0.25, -0.5, -0.75, -1.0, -1.25, -1.5, -2.5, -5.5]
        }
    },
    "conductivity": {
        "model": "correlated",
        "dilute": {
            "type": "ratio_of_polynomials",
            "A": [-3.0e-3, 3.0e-2], "n": [0.0, 1.0],
            "B": [1.0], "m": [0.0],
            "t_reducing": 190.564
        },
        "residual": {
            "type": "polynomial",
            "B": [1.0e-2, 5.0e-3], "t": [0.0, 0.0], "d": [1.0, 2.0],
            "t_reducing": 190.564, "rhomass_reducing": 162.66
        },
        "critical": { "type": "simplified_olchowy_sengers" }
    }
}"#;

#[test]
fn correlated_record_loads_from_json() {
    let data: TransportData = serde_json::from_str(METHANE_JSON).unwrap();
    assert_eq!(data, common::methane_correlated());
}

#[test]
fn olchowy_sengers_fields_fall_back_to_generic_values() {
    let data: OlchowySengersData =
        serde_json::from_str(r#"{ "qD": 1.5e9, "T_ref": 300.0 }"#).unwrap();
    assert_eq!(data.q_d, 1.5e9);
    assert_eq!(data.t_ref, Some(300.0));
    assert_eq!(data.zeta0, OlchowySengersData::default().zeta0);
    assert_eq!(data.big_gamma, 0.0496);
}

#[test]
fn hardcoded_and_ecs_models_load() {
    let data: TransportData = serde_json::from_str(
        r#"{
            "epsilon_over_k": 245.0,
            "sigma_eta": 4.419e-10,
            "viscosity": { "model": "hardcoded", "fluid": "water" },
            "conductivity": {
                "model": "ecs",
                "psi_a": [1.0], "psi_t": [0.0], "psi_rhomolar_reducing": 6870.85454,
                "f_int_a": [1.32e-3], "f_int_t": [0.0], "f_int_t_reducing": 1.0
            }
        }"#,
    )
    .unwrap();
    assert_eq!(
        data.viscosity,
        Some(ViscosityModel::Hardcoded {
            fluid: HardcodedViscosity::Water
        })
    );
    let Some(ConductivityModel::Ecs(ecs)) = &data.conductivity else {
        panic!("expected an ECS conductivity model");
    };
    assert_eq!(ecs.critical, OlchowySengersData::default());
}

#[test]
fn hardcoded_critical_variants_use_snake_case_tags() {
    let critical: ConductivityCritical =
        serde_json::from_str(r#"{ "type": "co2_scalabrin_2006" }"#).unwrap();
    assert_eq!(critical, ConductivityCritical::Co2Scalabrin2006);
    let higher: ViscosityHigherOrder = serde_json::from_str(r#"{ "type": "hexane" }"#).unwrap();
    assert_eq!(higher, ViscosityHigherOrder::Hexane);
}

#[test]
fn friction_theory_without_second_order_repulsion_is_rejected_on_use() {
    let data: FrictionTheoryData = serde_json::from_str(
        r#"{
            "c1": 0.0, "c2": 0.0, "t_reducing": 190.564,
            "Ai": [0.0, 0.0, 0.0], "Aa": [0.0, 0.0, 0.0],
            "Ar": [0.0, 0.0, 0.0], "Aaa": [0.0, 0.0, 0.0]
        }"#,
    )
    .unwrap();
    assert!(data.a_rr.is_none() && data.a_drdr.is_none());

    let s = tt_fluids::fixtures::state(tt_fluids::fixtures::methane(), 100.0, 300.0).unwrap();
    let err = ViscosityHigherOrder::FrictionTheory(data).evaluate(&s).unwrap_err();
    assert!(matches!(err, TransportError::MissingData { .. }));
}
