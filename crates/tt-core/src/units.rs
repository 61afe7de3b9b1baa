// tt-core/src/units.rs

use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity, MassDensity as UomMassDensity,
    Pressure as UomPressure, ThermalConductivity as UomThermalConductivity,
    ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type DynVisc = UomDynamicViscosity;
pub type ThermalCond = UomThermalConductivity;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn kg_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn w_per_m_k(v: f64) -> ThermalCond {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    ThermalCond::new::<watt_per_meter_kelvin>(v)
}

pub mod constants {
    /// Avogadro constant [1/mol], CODATA 2010 value used by the correlations.
    pub const AVOGADRO: f64 = 6.022_141_29e23;

    /// Boltzmann constant [J/K], CODATA 2006 value used by the ammonia critical term.
    pub const BOLTZMANN: f64 = 1.380_650_4e-23;

    /// Molar gas constant [J/(mol·K)].
    pub const GAS_CONSTANT: f64 = 8.314_472;
}
