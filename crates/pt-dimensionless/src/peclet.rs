//! Peclet numbers for heat and mass transfer.
//!
//! Both groups compare advective transport to diffusive transport and can be
//! formed either from two dimensionless ratios or from the raw properties.

use crate::combination::resolve;
use crate::error::{DimensionlessError, DimensionlessResult};
use crate::number::DimensionlessNumber;
use pt_core::Real;

/// Inputs for the heat-transfer Peclet number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PecletHeat {
    /// `Pe = Re·Pr`
    Ratios { re: Real, pr: Real },
    /// `Pe = u / (α/L)`, with `u` in m/s, `alpha` in m²/s and `l` in m
    Transport { u: Real, alpha: Real, l: Real },
}

/// Inputs for the mass-transfer Peclet number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PecletMass {
    /// `Pe = Re·Sc`
    Ratios { re: Real, sc: Real },
    /// `Pe = u / (D/L)`, with `u` in m/s, `d` in m²/s and `l` in m
    Transport { u: Real, d: Real, l: Real },
}

/// Heat-transfer Peclet number.
pub fn peclet_heat(input: PecletHeat) -> Real {
    match input {
        PecletHeat::Ratios { re, pr } => re * pr,
        PecletHeat::Transport { u, alpha, l } => u / (alpha / l),
    }
}

/// Mass-transfer Peclet number.
pub fn peclet_mass(input: PecletMass) -> Real {
    match input {
        PecletMass::Ratios { re, sc } => re * sc,
        PecletMass::Transport { u, d, l } => u / (d / l),
    }
}

/// Optional-field form of [`PecletHeat`].
///
/// Exactly one combination must be complete, and no field of the other
/// combination may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PecletHeatParams {
    pub re: Option<Real>,
    pub pr: Option<Real>,
    pub u: Option<Real>,
    pub alpha: Option<Real>,
    pub l: Option<Real>,
}

impl PecletHeatParams {
    pub fn re(mut self, re: Real) -> Self {
        self.re = Some(re);
        self
    }

    pub fn pr(mut self, pr: Real) -> Self {
        self.pr = Some(pr);
        self
    }

    pub fn u(mut self, u: Real) -> Self {
        self.u = Some(u);
        self
    }

    pub fn alpha(mut self, alpha: Real) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn l(mut self, l: Real) -> Self {
        self.l = Some(l);
        self
    }
}

impl TryFrom<PecletHeatParams> for PecletHeat {
    type Error = DimensionlessError;

    fn try_from(p: PecletHeatParams) -> DimensionlessResult<Self> {
        let resolved = match (p.re, p.pr, p.u, p.alpha, p.l) {
            (Some(re), Some(pr), None, None, None) => Some(PecletHeat::Ratios { re, pr }),
            (None, None, Some(u), Some(alpha), Some(l)) => {
                Some(PecletHeat::Transport { u, alpha, l })
            }
            _ => None,
        };
        resolve(resolved, DimensionlessNumber::PecletHeat, &p)
    }
}

/// Optional-field form of [`PecletMass`].
///
/// Exactly one combination must be complete, and no field of the other
/// combination may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PecletMassParams {
    pub re: Option<Real>,
    pub sc: Option<Real>,
    pub u: Option<Real>,
    pub d: Option<Real>,
    pub l: Option<Real>,
}

impl PecletMassParams {
    pub fn re(mut self, re: Real) -> Self {
        self.re = Some(re);
        self
    }

    pub fn sc(mut self, sc: Real) -> Self {
        self.sc = Some(sc);
        self
    }

    pub fn u(mut self, u: Real) -> Self {
        self.u = Some(u);
        self
    }

    pub fn d(mut self, d: Real) -> Self {
        self.d = Some(d);
        self
    }

    pub fn l(mut self, l: Real) -> Self {
        self.l = Some(l);
        self
    }
}

impl TryFrom<PecletMassParams> for PecletMass {
    type Error = DimensionlessError;

    fn try_from(p: PecletMassParams) -> DimensionlessResult<Self> {
        let resolved = match (p.re, p.sc, p.u, p.d, p.l) {
            (Some(re), Some(sc), None, None, None) => Some(PecletMass::Ratios { re, sc }),
            (None, None, Some(u), Some(d), Some(l)) => Some(PecletMass::Transport { u, d, l }),
            _ => None,
        };
        resolve(resolved, DimensionlessNumber::PecletMass, &p)
    }
}

/// Resolve optional parameters and evaluate the heat-transfer Peclet number.
pub fn peclet_heat_from(params: PecletHeatParams) -> DimensionlessResult<Real> {
    PecletHeat::try_from(params).map(peclet_heat)
}

/// Resolve optional parameters and evaluate the mass-transfer Peclet number.
pub fn peclet_mass_from(params: PecletMassParams) -> DimensionlessResult<Real> {
    PecletMass::try_from(params).map(peclet_mass)
}
