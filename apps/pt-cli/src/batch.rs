//! YAML batch files: a list of independent calculations.
//!
//! ```yaml
//! cases:
//!   - name: pipe flow
//!     kind: reynolds
//!     rho: 998.0
//!     v: 1.2
//!     l: 0.05
//!     mu: 1.0e-3
//!   - kind: peclet_heat
//!     re: 2.0
//!     pr: 3.0
//!   - kind: area_circle
//!     diameter: 50
//!     unit_in: mm
//!     unit_out: m
//! ```

use crate::error::{CliError, CliResult};
use pt_core::{PtResult, Real, ensure_finite};
use pt_dimensionless::{
    DimensionlessNumber, PecletHeatParams, PecletMassParams, StantonParams, lewis, nusselt,
    peclet_heat_from, peclet_mass_from, prandtl, reynolds, schmidt, sherwood, stanton_from,
};
use pt_units::{area_circle, convert_metric_length};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct BatchFile {
    #[serde(default)]
    pub cases: Vec<Case>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Case {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub calculation: Calculation,
}

/// One formula evaluation with its named inputs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Calculation {
    Reynolds {
        rho: Real,
        v: Real,
        l: Real,
        mu: Real,
    },
    Prandtl {
        cp: Real,
        mu: Real,
        k: Real,
    },
    Schmidt {
        mu: Real,
        rho: Real,
        d: Real,
    },
    Lewis {
        pr: Real,
        sc: Real,
    },
    PecletHeat {
        #[serde(default)]
        re: Option<Real>,
        #[serde(default)]
        pr: Option<Real>,
        #[serde(default)]
        u: Option<Real>,
        #[serde(default)]
        alpha: Option<Real>,
        #[serde(default)]
        l: Option<Real>,
    },
    PecletMass {
        #[serde(default)]
        re: Option<Real>,
        #[serde(default)]
        sc: Option<Real>,
        #[serde(default)]
        u: Option<Real>,
        #[serde(default)]
        d: Option<Real>,
        #[serde(default)]
        l: Option<Real>,
    },
    Stanton {
        #[serde(default)]
        nu: Option<Real>,
        #[serde(default)]
        pe: Option<Real>,
        #[serde(default)]
        h: Option<Real>,
        #[serde(default)]
        rho: Option<Real>,
        #[serde(default)]
        u: Option<Real>,
        #[serde(default)]
        cp: Option<Real>,
    },
    Sherwood {
        l: Real,
        h: Real,
        d: Real,
    },
    Nusselt {
        h: Real,
        l: Real,
        k: Real,
    },
    ConvertLength {
        value: Real,
        unit_in: String,
        unit_out: String,
    },
    AreaCircle {
        diameter: Real,
        #[serde(default = "default_unit")]
        unit_in: String,
        #[serde(default = "default_unit")]
        unit_out: String,
    },
}

fn default_unit() -> String {
    "m".to_string()
}

impl Calculation {
    /// Label used when printing the result.
    pub fn label(&self) -> String {
        let number = match self {
            Self::Reynolds { .. } => DimensionlessNumber::Reynolds,
            Self::Prandtl { .. } => DimensionlessNumber::Prandtl,
            Self::Schmidt { .. } => DimensionlessNumber::Schmidt,
            Self::Lewis { .. } => DimensionlessNumber::Lewis,
            Self::PecletHeat { .. } => DimensionlessNumber::PecletHeat,
            Self::PecletMass { .. } => DimensionlessNumber::PecletMass,
            Self::Stanton { .. } => DimensionlessNumber::Stanton,
            Self::Sherwood { .. } => DimensionlessNumber::Sherwood,
            Self::Nusselt { .. } => DimensionlessNumber::Nusselt,
            Self::ConvertLength { unit_out, .. } => return format!("length [{unit_out}]"),
            Self::AreaCircle { unit_out, .. } => return format!("area [{unit_out}²]"),
        };
        number.symbol().to_string()
    }

    pub fn evaluate(&self) -> PtResult<Real> {
        let value = match self {
            Self::Reynolds { rho, v, l, mu } => reynolds(*rho, *v, *l, *mu),
            Self::Prandtl { cp, mu, k } => prandtl(*cp, *mu, *k),
            Self::Schmidt { mu, rho, d } => schmidt(*mu, *rho, *d),
            Self::Lewis { pr, sc } => lewis(*pr, *sc),
            Self::PecletHeat { re, pr, u, alpha, l } => peclet_heat_from(PecletHeatParams {
                re: *re,
                pr: *pr,
                u: *u,
                alpha: *alpha,
                l: *l,
            })?,
            Self::PecletMass { re, sc, u, d, l } => peclet_mass_from(PecletMassParams {
                re: *re,
                sc: *sc,
                u: *u,
                d: *d,
                l: *l,
            })?,
            Self::Stanton {
                nu,
                pe,
                h,
                rho,
                u,
                cp,
            } => stanton_from(StantonParams {
                nu: *nu,
                pe: *pe,
                h: *h,
                rho: *rho,
                u: *u,
                cp: *cp,
            })?,
            Self::Sherwood { l, h, d } => sherwood(*l, *h, *d),
            Self::Nusselt { h, l, k } => nusselt(*h, *l, *k),
            Self::ConvertLength {
                value,
                unit_in,
                unit_out,
            } => convert_metric_length(*value, unit_in, unit_out)?,
            Self::AreaCircle {
                diameter,
                unit_in,
                unit_out,
            } => area_circle(*diameter, unit_in, unit_out)?,
        };
        ensure_finite(value, "result")
    }
}

/// Result of one batch case.
#[derive(Debug)]
pub struct CaseOutcome {
    pub name: String,
    pub label: String,
    pub result: PtResult<Real>,
}

pub fn load_batch(path: &Path) -> CliResult<BatchFile> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::BatchFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_batch(&content)
}

pub fn parse_batch(content: &str) -> CliResult<BatchFile> {
    Ok(serde_yaml::from_str(content)?)
}

/// Evaluate every case; one failing case does not stop the others.
pub fn run_batch(batch: &BatchFile) -> Vec<CaseOutcome> {
    batch
        .cases
        .iter()
        .enumerate()
        .map(|(i, case)| {
            let name = case
                .name
                .clone()
                .unwrap_or_else(|| format!("case {}", i + 1));
            let result = case.calculation.evaluate();
            if let Err(err) = &result {
                tracing::warn!(case = %name, %err, "batch case failed");
            }
            CaseOutcome {
                name,
                label: case.calculation.label(),
                result,
            }
        })
        .collect()
}
