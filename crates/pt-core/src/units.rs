// pt-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, DiffusionCoefficient as UomDiffusionCoefficient,
    DynamicViscosity as UomDynamicViscosity, HeatTransfer as UomHeatTransfer,
    Length as UomLength, MassDensity as UomMassDensity, Ratio as UomRatio,
    SpecificHeatCapacity as UomSpecificHeatCapacity,
    ThermalConductivity as UomThermalConductivity, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Density = UomMassDensity;
/// Mass or thermal diffusivity, m²/s.
pub type Diffusivity = UomDiffusionCoefficient;
pub type DynVisc = UomDynamicViscosity;
/// Convective heat-transfer coefficient, W/(m²·K).
pub type HeatTransferCoeff = UomHeatTransfer;
pub type Length = UomLength;
pub type Ratio = UomRatio;
pub type SpecHeatCapacity = UomSpecificHeatCapacity;
pub type ThermalConductivity = UomThermalConductivity;
pub type Velocity = UomVelocity;

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn j_per_kg_k(v: f64) -> SpecHeatCapacity {
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
    SpecHeatCapacity::new::<joule_per_kilogram_kelvin>(v)
}

#[inline]
pub fn w_per_m_k(v: f64) -> ThermalConductivity {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    ThermalConductivity::new::<watt_per_meter_kelvin>(v)
}

#[inline]
pub fn w_per_m2_k(v: f64) -> HeatTransferCoeff {
    use uom::si::heat_transfer::watt_per_square_meter_kelvin;
    HeatTransferCoeff::new::<watt_per_square_meter_kelvin>(v)
}

#[inline]
pub fn m2ps(v: f64) -> Diffusivity {
    use uom::si::diffusion_coefficient::square_meter_per_second;
    Diffusivity::new::<square_meter_per_second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_store_si_base_values() {
        assert_eq!(kgpm3(998.0).value, 998.0);
        assert_eq!(mps(1.5).value, 1.5);
        assert_eq!(m(0.05).value, 0.05);
        assert_eq!(m2(2.0).value, 2.0);
        assert_eq!(pa_s(1.0e-3).value, 1.0e-3);
        assert_eq!(j_per_kg_k(4180.0).value, 4180.0);
        assert_eq!(w_per_m_k(0.6).value, 0.6);
        assert_eq!(w_per_m2_k(500.0).value, 500.0);
        assert_eq!(m2ps(2.0e-9).value, 2.0e-9);
        assert_eq!(unitless(0.5).value, 0.5);
    }

    #[test]
    fn length_reads_back_in_other_units() {
        use uom::si::length::millimeter;
        let l = m(5.0);
        assert!((l.get::<millimeter>() - 5000.0).abs() < 1e-9);
    }
}
