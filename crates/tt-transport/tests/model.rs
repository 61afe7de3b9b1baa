//! Dispatch through `TransportModel`: correlated, hardcoded and ECS fluids.

mod common;

use common::{ethane_ecs, methane_correlated, METHANE_EPSILON_OVER_K, METHANE_SIGMA};
use proptest::prelude::*;
use tt_core::numeric::{Tolerances, nearly_equal};
use tt_fluids::FluidState;
use tt_fluids::fixtures::{as_mixture, ethane, methane, state};
use tt_transport::viscosity::dilute::kinetic_theory;
use tt_transport::{
    HardcodedConductivity, HardcodedViscosity, ConductivityModel, ReferenceFluid, TransportData,
    TransportError, TransportModel, ViscosityModel,
};

const REL: Tolerances = Tolerances::relative(1e-12);

fn is_unsupported<T: std::fmt::Debug>(r: Result<T, TransportError>) -> bool {
    matches!(r, Err(TransportError::UnsupportedConfiguration { .. }))
}

#[test]
fn correlated_totals_are_sums_of_terms() {
    let data = methane_correlated();
    let s = state(methane(), 8000.0, 250.0).unwrap();
    let mut model = TransportModel::new(&data);

    let eta = model.viscosity(&s).unwrap();
    let dilute = model.viscosity_dilute(&s).unwrap();
    let background = model.viscosity_background(&s).unwrap();
    assert_eq!(eta, dilute + background);
    assert!(eta > dilute, "Rainwater-Friend term is positive above T* ≈ 1.1");

    let lambda = model.conductivity(&s).unwrap();
    let residual = model.conductivity_background(&s).unwrap();
    let critical = model.conductivity_critical(&s).unwrap();
    assert!(critical > 0.0, "250 K is below the 1.5 T_c reference temperature");
    assert!(residual > 0.0);
    assert!(lambda > residual + critical);
}

#[test]
fn dilute_gas_conductivity_has_no_critical_term() {
    let data = methane_correlated();
    let s = state(methane(), 1e-3, 400.0).unwrap();
    let mut model = TransportModel::new(&data);
    assert_eq!(model.conductivity_critical(&s).unwrap(), 0.0);
}

#[test]
fn mixtures_are_rejected_by_every_operation() {
    let data = ethane_ecs();
    let reference_data = methane_correlated();
    let mut reference = state(methane(), 100.0, 300.0).unwrap();
    let s = state(as_mixture(ethane()), 4000.0, 350.0).unwrap();

    {
        let mut model = TransportModel::new(&data).with_reference(ReferenceFluid {
            state: &mut reference,
            data: &reference_data,
        });
        assert!(is_unsupported(model.viscosity(&s)));
        assert!(is_unsupported(model.viscosity_dilute(&s)));
        assert!(is_unsupported(model.viscosity_background(&s)));
        assert!(is_unsupported(model.viscosity_ecs(&s)));
        assert!(is_unsupported(model.conductivity(&s)));
        assert!(is_unsupported(model.conductivity_background(&s)));
        assert!(is_unsupported(model.conductivity_critical(&s)));
        assert!(is_unsupported(model.conductivity_ecs(&s)));
        assert!(is_unsupported(model.evaluate(&s)));
    }
    // The reference was never touched.
    assert_eq!(reference.temperature(), 300.0);
    assert_eq!(reference.molar_density(), 100.0);

    // Rejected even when the record has no models at all.
    let empty = TransportData::new(1.0, 1e-10);
    assert!(is_unsupported(TransportModel::new(&empty).viscosity(&s)));
}

#[test]
fn missing_models_are_reported() {
    let data = TransportData::new(METHANE_EPSILON_OVER_K, METHANE_SIGMA);
    let s = state(methane(), 100.0, 300.0).unwrap();
    let mut model = TransportModel::new(&data);
    assert!(matches!(
        model.viscosity(&s),
        Err(TransportError::MissingData { what: "viscosity model" })
    ));
    assert!(matches!(
        model.conductivity(&s),
        Err(TransportError::MissingData { what: "conductivity model" })
    ));

    let props = model.evaluate(&s).unwrap();
    assert!(props.viscosity.is_none());
    assert!(props.conductivity.is_none());
}

#[test]
fn hardcoded_models_have_no_split_terms() {
    let data = TransportData::new(0.0, 0.0)
        .with_viscosity(ViscosityModel::Hardcoded {
            fluid: HardcodedViscosity::R23,
        })
        .with_conductivity(ConductivityModel::Hardcoded {
            fluid: HardcodedConductivity::R23,
        });
    let s = state(methane(), 0.01, 300.0).unwrap();
    let mut model = TransportModel::new(&data);

    assert!(model.viscosity(&s).unwrap() > 0.0);
    assert!(model.conductivity(&s).unwrap() > 0.0);
    assert!(is_unsupported(model.viscosity_dilute(&s)));
    assert!(is_unsupported(model.viscosity_background(&s)));
    assert!(is_unsupported(model.conductivity_background(&s)));
    assert!(is_unsupported(model.conductivity_critical(&s)));
    assert!(is_unsupported(model.viscosity_ecs(&s)));
}

#[test]
fn ecs_without_reference_is_unsupported() {
    let data = ethane_ecs();
    let s = state(ethane(), 4000.0, 350.0).unwrap();
    let mut model = TransportModel::new(&data);
    assert!(is_unsupported(model.viscosity(&s)));
    assert!(is_unsupported(model.conductivity(&s)));
    // The dilute part does not need the reference.
    assert!(model.viscosity_dilute(&s).unwrap() > 0.0);
}

#[test]
fn ecs_reference_must_be_correlated() {
    let data = ethane_ecs();
    let reference_data = ethane_ecs();
    let mut reference = state(methane(), 100.0, 300.0).unwrap();
    let s = state(ethane(), 4000.0, 350.0).unwrap();
    let mut model = TransportModel::new(&data).with_reference(ReferenceFluid {
        state: &mut reference,
        data: &reference_data,
    });
    assert!(is_unsupported(model.viscosity(&s)));
    assert!(is_unsupported(model.conductivity(&s)));
}

#[test]
fn ecs_with_identical_reference_is_unscaled() {
    let data = common::ecs_fluid(METHANE_EPSILON_OVER_K, METHANE_SIGMA, 10_139.342_719);
    let reference_data = methane_correlated();
    let s = state(methane(), 8000.0, 250.0).unwrap();

    let expected_background = TransportModel::new(&reference_data)
        .viscosity_background(&s)
        .unwrap();
    let dilute = kinetic_theory(&s, METHANE_EPSILON_OVER_K, METHANE_SIGMA).unwrap();

    let mut reference = state(methane(), 100.0, 300.0).unwrap();
    let mut model = TransportModel::new(&data).with_reference(ReferenceFluid {
        state: &mut reference,
        data: &reference_data,
    });
    let r = model.viscosity_ecs(&s).unwrap();

    assert_eq!(r.variables.theta, 1.0);
    assert_eq!(r.variables.phi, 1.0);
    assert_eq!(r.variables.f, 1.0);
    assert_eq!(r.variables.h, 1.0);
    assert_eq!(r.scaling, 1.0);
    assert_eq!(r.dilute, dilute);
    assert_eq!(r.reference_background, expected_background);
    assert_eq!(r.total, dilute + expected_background);
    assert_eq!(model.viscosity(&s).unwrap(), r.total);
}

#[test]
fn ecs_conductivity_breakdown_adds_up() {
    let data = ethane_ecs();
    let reference_data = methane_correlated();
    let mut reference = state(methane(), 100.0, 300.0).unwrap();
    let s = state(ethane(), 4000.0, 350.0).unwrap();
    let mut model = TransportModel::new(&data).with_reference(ReferenceFluid {
        state: &mut reference,
        data: &reference_data,
    });

    let r = model.conductivity_ecs(&s).unwrap();
    let sum = r.internal + r.dilute + r.reference_background * r.scaling + r.critical;
    assert!(nearly_equal(r.total, sum, REL));
    assert!(r.variables.f > 1.0);
    assert!(r.scaling > 0.0);

    assert_eq!(model.conductivity(&s).unwrap(), r.total);
    assert_eq!(model.conductivity_critical(&s).unwrap(), r.critical);
    assert!(nearly_equal(
        model.conductivity_background(&s).unwrap(),
        r.reference_background * r.scaling,
        REL
    ));
}

#[test]
fn evaluate_returns_typed_summary() {
    use uom::si::dynamic_viscosity::pascal_second;
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    use uom::si::thermodynamic_temperature::kelvin;

    let data = methane_correlated();
    let s = state(methane(), 8000.0, 250.0).unwrap();
    let mut model = TransportModel::new(&data);
    let props = model.evaluate(&s).unwrap();

    assert_eq!(props.temperature.get::<kelvin>(), 250.0);
    let eta = props.viscosity.unwrap().get::<pascal_second>();
    let lambda = props.conductivity.unwrap().get::<watt_per_meter_kelvin>();
    assert!(nearly_equal(eta, model.viscosity(&s).unwrap(), REL));
    assert!(nearly_equal(lambda, model.conductivity(&s).unwrap(), REL));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn repeated_evaluation_is_bit_identical(t in 200.0_f64..450.0, rho in 50.0_f64..6000.0) {
        let data = ethane_ecs();
        let reference_data = methane_correlated();
        let mut reference = state(methane(), 100.0, 300.0).unwrap();
        let s = state(ethane(), rho, t).unwrap();
        let mut model = TransportModel::new(&data).with_reference(ReferenceFluid {
            state: &mut reference,
            data: &reference_data,
        });

        let first = model.evaluate(&s);
        let second = model.evaluate(&s);
        prop_assert_eq!(first, second);
    }
}
