//! Metric length prefixes.

use crate::error::{UnitError, UnitResult};
use pt_core::units::Length;
use std::fmt;
use std::str::FromStr;

/// A metric length unit from femtometre to terametre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Femtometer,
    Picometer,
    Angstrom,
    Nanometer,
    Micrometer,
    Millimeter,
    Centimeter,
    Decimeter,
    Meter,
    Decameter,
    Hectometer,
    Kilometer,
    Megameter,
    Gigameter,
    Terameter,
}

impl LengthUnit {
    /// Every supported unit, smallest first.
    pub const ALL: [LengthUnit; 15] = [
        Self::Femtometer,
        Self::Picometer,
        Self::Angstrom,
        Self::Nanometer,
        Self::Micrometer,
        Self::Millimeter,
        Self::Centimeter,
        Self::Decimeter,
        Self::Meter,
        Self::Decameter,
        Self::Hectometer,
        Self::Kilometer,
        Self::Megameter,
        Self::Gigameter,
        Self::Terameter,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Femtometer => "fm",
            Self::Picometer => "pm",
            Self::Angstrom => "A",
            Self::Nanometer => "nm",
            // U+00B5 MICRO SIGN
            Self::Micrometer => "\u{b5}m",
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Decimeter => "dm",
            Self::Meter => "m",
            Self::Decameter => "dam",
            Self::Hectometer => "hm",
            Self::Kilometer => "km",
            Self::Megameter => "Mm",
            Self::Gigameter => "Gm",
            Self::Terameter => "Tm",
        }
    }

    /// Power of ten relative to the metre.
    pub fn exponent(self) -> i32 {
        match self {
            Self::Femtometer => -15,
            Self::Picometer => -12,
            Self::Angstrom => -10,
            Self::Nanometer => -9,
            Self::Micrometer => -6,
            Self::Millimeter => -3,
            Self::Centimeter => -2,
            Self::Decimeter => -1,
            Self::Meter => 0,
            Self::Decameter => 1,
            Self::Hectometer => 2,
            Self::Kilometer => 3,
            Self::Megameter => 6,
            Self::Gigameter => 9,
            Self::Terameter => 12,
        }
    }

    /// Wrap a value expressed in this unit as a uom length.
    pub fn to_length(self, value: f64) -> Length {
        use pt_core::units::m;
        m(value * 10f64.powi(self.exponent()))
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> UnitResult<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.symbol() == s)
            .ok_or_else(|| UnitError::UnknownUnit { unit: s.to_string() })
    }
}

/// Power-of-ten exponent for a unit symbol.
pub fn exponent_of(symbol: &str) -> UnitResult<i32> {
    symbol.parse::<LengthUnit>().map(LengthUnit::exponent)
}

/// Convert `value` from `unit_in` to `unit_out`.
///
/// Returns `value * 10^(exp_in - exp_out)`, so 5 m is 5000 mm. The value passes
/// through untouched when both exponents match. Both symbols are looked up even
/// when equal.
pub fn convert_metric_length(value: f64, unit_in: &str, unit_out: &str) -> UnitResult<f64> {
    let exp_in = exponent_of(unit_in)?;
    let exp_out = exponent_of(unit_out)?;
    Ok(scale(value, exp_in, exp_out))
}

pub(crate) fn scale(value: f64, exp_in: i32, exp_out: i32) -> f64 {
    if exp_in == exp_out {
        return value;
    }
    let converted = value * 10f64.powi(exp_in - exp_out);
    tracing::trace!(value, exp_in, exp_out, converted, "metric length conversion");
    converted
}


#[cfg(test)]
mod proptests {
    use super::*;
    use pt_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn metre_millimetre_round_trip(x in -1.0e12_f64..1.0e12) {
            let mm = convert_metric_length(x, "m", "mm").unwrap();
            let back = convert_metric_length(mm, "mm", "m").unwrap();
            prop_assert!(nearly_equal(back, x, Tolerances::default()));
        }

        #[test]
        fn any_pair_round_trips(
            x in -1.0e6_f64..1.0e6,
            a in 0usize..LengthUnit::ALL.len(),
            b in 0usize..LengthUnit::ALL.len(),
        ) {
            let (ua, ub) = (LengthUnit::ALL[a].symbol(), LengthUnit::ALL[b].symbol());
            let there = convert_metric_length(x, ua, ub).unwrap();
            let back = convert_metric_length(there, ub, ua).unwrap();
            prop_assert!(nearly_equal(back, x, Tolerances::default()));
        }

        #[test]
        fn same_unit_returns_input(x in proptest::num::f64::ANY, i in 0usize..LengthUnit::ALL.len()) {
            let u = LengthUnit::ALL[i].symbol();
            let out = convert_metric_length(x, u, u).unwrap();
            prop_assert!(out == x || (out.is_nan() && x.is_nan()));
        }
    }
}
