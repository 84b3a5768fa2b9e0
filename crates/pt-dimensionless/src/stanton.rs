//! Stanton number.

use crate::combination::resolve;
use crate::error::{DimensionlessError, DimensionlessResult};
use crate::number::DimensionlessNumber;
use pt_core::Real;

/// Inputs for the Stanton number, the ratio of heat transferred into a fluid
/// to its thermal capacity in forced convection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stanton {
    /// `St = Nu / Pe`
    Ratios { nu: Real, pe: Real },
    /// `St = h / (ρ·u·Cp)`
    ///
    /// - `h`: heat-transfer coefficient [W/(m²·K)]
    /// - `rho`: density [kg/m³]
    /// - `u`: velocity [m/s]
    /// - `cp`: specific heat capacity [J/(kg·K)]
    Transport { h: Real, rho: Real, u: Real, cp: Real },
}

pub fn stanton(input: Stanton) -> Real {
    match input {
        Stanton::Ratios { nu, pe } => nu / pe,
        Stanton::Transport { h, rho, u, cp } => h / (rho * u * cp),
    }
}

/// Optional-field form of [`Stanton`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StantonParams {
    pub nu: Option<Real>,
    pub pe: Option<Real>,
    pub h: Option<Real>,
    pub rho: Option<Real>,
    pub u: Option<Real>,
    pub cp: Option<Real>,
}

impl StantonParams {
    pub fn nu(mut self, nu: Real) -> Self {
        self.nu = Some(nu);
        self
    }

    pub fn pe(mut self, pe: Real) -> Self {
        self.pe = Some(pe);
        self
    }

    pub fn h(mut self, h: Real) -> Self {
        self.h = Some(h);
        self
    }

    pub fn rho(mut self, rho: Real) -> Self {
        self.rho = Some(rho);
        self
    }

    pub fn u(mut self, u: Real) -> Self {
        self.u = Some(u);
        self
    }

    pub fn cp(mut self, cp: Real) -> Self {
        self.cp = Some(cp);
        self
    }
}

impl TryFrom<StantonParams> for Stanton {
    type Error = DimensionlessError;

    fn try_from(p: StantonParams) -> DimensionlessResult<Self> {
        let resolved = match (p.nu, p.pe, p.h, p.rho, p.u, p.cp) {
            (Some(nu), Some(pe), None, None, None, None) => Some(Stanton::Ratios { nu, pe }),
            (None, None, Some(h), Some(rho), Some(u), Some(cp)) => {
                Some(Stanton::Transport { h, rho, u, cp })
            }
            _ => None,
        };
        resolve(resolved, DimensionlessNumber::Stanton, &p)
    }
}

/// Resolve optional parameters and evaluate the Stanton number.
pub fn stanton_from(params: StantonParams) -> DimensionlessResult<Real> {
    Stanton::try_from(params).map(stanton)
}
