//! pt-units: metric length conversion and circle geometry.
//!
//! The prefix table is fixed: every supported symbol maps to exactly one
//! power of ten relative to the metre. Symbols are matched exactly and
//! case-sensitively; anything outside the table is an [`UnitError::UnknownUnit`].
//!
//! ```
//! use pt_units::{area_circle, convert_metric_length};
//!
//! assert_eq!(convert_metric_length(5.0, "km", "m").unwrap(), 5000.0);
//! assert!(convert_metric_length(1.0, "xx", "m").is_err());
//!
//! let a = area_circle(2.0, "m", "m").unwrap();
//! assert!((a - std::f64::consts::PI).abs() < 1e-12);
//! ```

pub mod error;
pub mod geometry;
pub mod length;

pub use error::{UnitError, UnitResult};
pub use geometry::{area_circle, circle_area};
pub use length::{LengthUnit, convert_metric_length, exponent_of};
