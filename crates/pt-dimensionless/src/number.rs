//! Names and symbols of the supported dimensionless groups.

use std::fmt;

/// The dimensionless groups this crate computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionlessNumber {
    Reynolds,
    Prandtl,
    Schmidt,
    Lewis,
    PecletHeat,
    PecletMass,
    Stanton,
    Sherwood,
    Nusselt,
}

impl DimensionlessNumber {
    pub const ALL: [DimensionlessNumber; 9] = [
        Self::Reynolds,
        Self::Prandtl,
        Self::Schmidt,
        Self::Lewis,
        Self::PecletHeat,
        Self::PecletMass,
        Self::Stanton,
        Self::Sherwood,
        Self::Nusselt,
    ];

    /// Conventional symbol, e.g. `Re`.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Reynolds => "Re",
            Self::Prandtl => "Pr",
            Self::Schmidt => "Sc",
            Self::Lewis => "Le",
            Self::PecletHeat => "Pe_h",
            Self::PecletMass => "Pe_m",
            Self::Stanton => "St",
            Self::Sherwood => "Sh",
            Self::Nusselt => "Nu",
        }
    }

    /// Human-readable name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Reynolds => "Reynolds number",
            Self::Prandtl => "Prandtl number",
            Self::Schmidt => "Schmidt number",
            Self::Lewis => "Lewis number",
            Self::PecletHeat => "Peclet number (heat)",
            Self::PecletMass => "Peclet number (mass)",
            Self::Stanton => "Stanton number",
            Self::Sherwood => "Sherwood number",
            Self::Nusselt => "Nusselt number",
        }
    }
}

impl fmt::Display for DimensionlessNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}
