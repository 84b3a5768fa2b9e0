//! uom-typed entry points.
//!
//! Each function reads the SI base value of its quantities and delegates to the
//! scalar formula, so a quantity built in any unit (e.g. centipoise, mm) is
//! converted before the ratio is formed.

use crate::peclet::{PecletHeat, PecletMass, peclet_heat, peclet_mass};
use crate::stanton::{Stanton, stanton};
use crate::transport;
use pt_core::units::{
    Density, Diffusivity, DynVisc, HeatTransferCoeff, Length, Ratio, SpecHeatCapacity,
    ThermalConductivity, Velocity, unitless,
};

pub fn reynolds(rho: Density, v: Velocity, l: Length, mu: DynVisc) -> Ratio {
    unitless(transport::reynolds(rho.value, v.value, l.value, mu.value))
}

pub fn prandtl(cp: SpecHeatCapacity, mu: DynVisc, k: ThermalConductivity) -> Ratio {
    unitless(transport::prandtl(cp.value, mu.value, k.value))
}

pub fn schmidt(mu: DynVisc, rho: Density, d: Diffusivity) -> Ratio {
    unitless(transport::schmidt(mu.value, rho.value, d.value))
}

/// `h` is the convective mass-transfer coefficient.
pub fn sherwood(l: Length, h: Velocity, d: Diffusivity) -> Ratio {
    unitless(transport::sherwood(l.value, h.value, d.value))
}

pub fn nusselt(h: HeatTransferCoeff, l: Length, k: ThermalConductivity) -> Ratio {
    unitless(transport::nusselt(h.value, l.value, k.value))
}

/// Heat-transfer Peclet number from velocity, thermal diffusivity and length.
pub fn peclet_heat_transport(u: Velocity, alpha: Diffusivity, l: Length) -> Ratio {
    unitless(peclet_heat(PecletHeat::Transport {
        u: u.value,
        alpha: alpha.value,
        l: l.value,
    }))
}

/// Mass-transfer Peclet number from velocity, mass diffusivity and length.
pub fn peclet_mass_transport(u: Velocity, d: Diffusivity, l: Length) -> Ratio {
    unitless(peclet_mass(PecletMass::Transport {
        u: u.value,
        d: d.value,
        l: l.value,
    }))
}

pub fn stanton_transport(
    h: HeatTransferCoeff,
    rho: Density,
    u: Velocity,
    cp: SpecHeatCapacity,
) -> Ratio {
    unitless(stanton(Stanton::Transport {
        h: h.value,
        rho: rho.value,
        u: u.value,
        cp: cp.value,
    }))
}
