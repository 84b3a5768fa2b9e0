//! Public-surface checks for length conversion and circle areas.

use pt_core::{PtError, Tolerances, nearly_equal};
use pt_units::{LengthUnit, UnitError, area_circle, convert_metric_length};

#[test]
fn documented_conversions() {
    assert_eq!(convert_metric_length(5.0, "m", "mm"), Ok(5000.0));
    assert_eq!(convert_metric_length(5.0, "km", "m"), Ok(5000.0));
}

#[test]
fn unknown_unit_is_not_silently_one() {
    let err = convert_metric_length(1.0, "xx", "m").unwrap_err();
    assert_eq!(err, UnitError::UnknownUnit { unit: "xx".into() });

    let pt_err: PtError = err.into();
    assert_eq!(pt_err.to_string(), "Unknown unit 'xx'");
}

#[test]
fn chained_conversion_matches_direct() {
    let tol = Tolerances::default();
    let via_cm = convert_metric_length(convert_metric_length(3.2, "hm", "cm").unwrap(), "cm", "µm")
        .unwrap();
    let direct = convert_metric_length(3.2, "hm", "µm").unwrap();
    assert!(nearly_equal(via_cm, direct, tol));
}

#[test]
fn area_scales_with_square_of_unit_ratio() {
    let tol = Tolerances::default();
    let in_m2 = area_circle(0.3, "m", "m").unwrap();
    let in_cm2 = area_circle(0.3, "m", "cm").unwrap();
    assert!(nearly_equal(in_cm2, in_m2 * 1.0e4, tol));
}

#[test]
fn every_listed_symbol_is_accepted() {
    let symbols = [
        "fm", "pm", "A", "nm", "µm", "mm", "cm", "dm", "m", "dam", "hm", "km", "Mm", "Gm", "Tm",
    ];
    for symbol in symbols {
        let unit: LengthUnit = symbol.parse().unwrap();
        assert_eq!(unit.symbol(), symbol);
        assert_eq!(convert_metric_length(1.0, symbol, symbol), Ok(1.0));
    }
    assert_eq!(LengthUnit::ALL.len(), symbols.len());
}
