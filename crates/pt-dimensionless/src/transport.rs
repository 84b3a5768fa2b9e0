//! Single-formula dimensionless groups.
//!
//! Inputs are SI scalars; the caller is responsible for unit consistency.

use pt_core::Real;

/// Reynolds number, `Re = ρ·v·L / μ`.
///
/// Ratio of inertial to viscous forces; separates laminar from turbulent flow.
///
/// - `rho`: fluid density [kg/m³]
/// - `v`: flow speed [m/s]
/// - `l`: characteristic length [m]
/// - `mu`: dynamic viscosity [Pa·s]
#[inline]
pub fn reynolds(rho: Real, v: Real, l: Real, mu: Real) -> Real {
    rho * v * l / mu
}

/// Prandtl number, `Pr = Cp·μ / k`.
///
/// Momentum diffusivity over thermal diffusivity.
///
/// - `cp`: specific heat capacity [J/(kg·K)]
/// - `mu`: dynamic viscosity [Pa·s]
/// - `k`: thermal conductivity [W/(m·K)]
#[inline]
pub fn prandtl(cp: Real, mu: Real, k: Real) -> Real {
    cp * mu / k
}

/// Schmidt number, `Sc = μ / (ρ·D)`.
///
/// Momentum diffusivity over mass diffusivity.
///
/// - `mu`: dynamic viscosity [Pa·s]
/// - `rho`: fluid density [kg/m³]
/// - `d`: mass diffusivity [m²/s]
#[inline]
pub fn schmidt(mu: Real, rho: Real, d: Real) -> Real {
    mu / (rho * d)
}

/// Lewis number, `Le = Pr / Sc`.
///
/// Expanded, `Pr / Sc = D / α`: mass diffusivity over thermal diffusivity.
/// This is the inverse of the `α / D` form some texts use.
#[inline]
pub fn lewis(pr: Real, sc: Real) -> Real {
    pr / sc
}

/// Sherwood number, `Sh = L·h / D`.
///
/// Convective over diffusive mass transport.
///
/// - `l`: characteristic length [m]
/// - `h`: convective mass-transfer coefficient [m/s]
/// - `d`: mass diffusivity [m²/s]
#[inline]
pub fn sherwood(l: Real, h: Real, d: Real) -> Real {
    l * h / d
}

/// Nusselt number, `Nu = h·L / k`.
///
/// Total (convective + conductive) over purely conductive heat transfer at a boundary.
///
/// - `h`: convective heat-transfer coefficient [W/(m²·K)]
/// - `l`: characteristic length [m]
/// - `k`: thermal conductivity of the fluid [W/(m·K)]
#[inline]
pub fn nusselt(h: Real, l: Real, k: Real) -> Real {
    h * l / k
}

#[cfg(test)]
mod tests {
    use super::*;
    use pt_core::{Tolerances, nearly_equal};

    fn close(a: f64, b: f64) -> bool {
        nearly_equal(a, b, Tolerances::default())
    }

    #[test]
    fn reynolds_water_in_pipe() {
        // Water at ~20 °C in a 50 mm pipe at 1.2 m/s
        let re = reynolds(998.0, 1.2, 0.05, 1.0e-3);
        assert!(close(re, 59_880.0));
    }

    #[test]
    fn prandtl_water() {
        let pr = prandtl(4182.0, 1.0e-3, 0.598);
        assert!((pr - 6.99).abs() < 0.01);
    }

    #[test]
    fn schmidt_basic() {
        assert!(close(schmidt(1.8e-5, 1.2, 1.5e-5), 1.0));
    }

    #[test]
    fn lewis_reduces_to_mass_over_thermal_diffusivity() {
        let (cp, mu, k, rho, d) = (1005.0, 1.8e-5, 0.026, 1.2, 2.0e-5);
        let alpha = k / (rho * cp);
        let le = lewis(prandtl(cp, mu, k), schmidt(mu, rho, d));
        assert!(close(le, d / alpha));
    }

    #[test]
    fn lewis_is_ratio_of_prandtl_and_schmidt() {
        assert_eq!(lewis(0.7, 0.35), 2.0);
    }

    #[test]
    fn sherwood_basic() {
        assert!(close(sherwood(0.1, 2.0e-3, 2.0e-5), 10.0));
    }

    #[test]
    fn nusselt_tube_flow() {
        // h = 500 W/(m²·K), D = 20 mm, k = 0.6 W/(m·K)
        assert!(close(nusselt(500.0, 0.02, 0.6), 50.0 / 3.0));
    }

    #[test]
    fn zero_divisor_is_not_checked() {
        assert!(reynolds(1.0, 1.0, 1.0, 0.0).is_infinite());
        assert!(lewis(0.0, 0.0).is_nan());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use pt_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn reynolds_matches_closed_form(
            rho in 1.0e-3_f64..2.0e4,
            v in 1.0e-4_f64..1.0e3,
            l in 1.0e-6_f64..1.0e2,
            mu in 1.0e-7_f64..1.0e2,
        ) {
            let expected = rho * v * l / mu;
            prop_assert!(nearly_equal(reynolds(rho, v, l, mu), expected, Tolerances::default()));
        }

        #[test]
        fn lewis_equals_schmidt_weighted_prandtl(pr in 1.0e-3_f64..1.0e3, sc in 1.0e-3_f64..1.0e3) {
            prop_assert!(nearly_equal(lewis(pr, sc) * sc, pr, Tolerances::default()));
        }
    }
}
