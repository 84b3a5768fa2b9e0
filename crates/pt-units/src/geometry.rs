//! Circle geometry with optional diameter conversion.

use crate::error::UnitResult;
use crate::length::{exponent_of, scale};
use pt_core::units::{Area, Length, m2};
use std::f64::consts::PI;

/// Area of a circle, `π·d²/4`.
///
/// The diameter is given in `unit_in`; when `unit_out` differs it is first
/// converted, so the area comes out in `unit_out²`. Unknown symbols fail even
/// when both sides are the same string.
pub fn area_circle(diameter: f64, unit_in: &str, unit_out: &str) -> UnitResult<f64> {
    let exp_in = exponent_of(unit_in)?;
    let exp_out = exponent_of(unit_out)?;
    let d = scale(diameter, exp_in, exp_out);
    Ok(0.25 * PI * d * d)
}

/// Area of a circle from a uom diameter.
pub fn circle_area(diameter: Length) -> Area {
    let d = diameter.value;
    m2(0.25 * PI * d * d)
}
