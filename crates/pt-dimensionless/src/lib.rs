//! pt-dimensionless: dimensionless groups for heat, mass and momentum transfer.
//!
//! Provides:
//! - Single-formula groups (Reynolds, Prandtl, Schmidt, Lewis, Sherwood, Nusselt)
//! - Dual-combination groups (Peclet for heat, Peclet for mass, Stanton), which
//!   accept either a pair of dimensionless ratios or the raw transport properties
//! - A uom-typed layer (`typed`) over the same formulas
//!
//! All functions are pure. No physical range checks are made: a zero divisor
//! yields an IEEE infinity or NaN, exactly as the closed form would.
//!
//! # Dual-combination inputs
//!
//! Each dual-combination group is a sum type, so the formula is chosen by the
//! variant and a supplied `0.0` is never confused with a missing value. When
//! the inputs arrive as optional fields, the `*Params` structs resolve to a
//! variant or fail with [`DimensionlessError::InvalidArgs`].
//!
//! # Example
//!
//! ```
//! use pt_dimensionless::{PecletHeat, PecletHeatParams, peclet_heat, peclet_heat_from, reynolds};
//!
//! let re = reynolds(998.0, 1.2, 0.05, 1.0e-3);
//! assert!(re > 4000.0);
//!
//! assert_eq!(peclet_heat(PecletHeat::Ratios { re: 2.0, pr: 3.0 }), 6.0);
//!
//! let pe = peclet_heat_from(PecletHeatParams::default().u(4.0).alpha(2.0).l(1.0)).unwrap();
//! assert_eq!(pe, 2.0);
//!
//! assert!(peclet_heat_from(PecletHeatParams::default()).is_err());
//! ```

mod combination;
pub mod error;
pub mod number;
pub mod peclet;
pub mod stanton;
pub mod transport;
pub mod typed;

// Re-exports for ergonomics
pub use error::{DimensionlessError, DimensionlessResult};
pub use number::DimensionlessNumber;
pub use peclet::{
    PecletHeat, PecletHeatParams, PecletMass, PecletMassParams, peclet_heat, peclet_heat_from,
    peclet_mass, peclet_mass_from,
};
pub use stanton::{Stanton, StantonParams, stanton, stanton_from};
pub use transport::{lewis, nusselt, prandtl, reynolds, schmidt, sherwood};
