//! Dimensionless-number errors.

use pt_core::PtError;
use thiserror::Error;

/// Result type for dimensionless-number operations.
pub type DimensionlessResult<T> = Result<T, DimensionlessError>;

/// Errors raised while selecting a formula.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DimensionlessError {
    /// The supplied parameters match no complete combination, or match more than one.
    #[error("Invalid arguments for {what}: not enough parameters provided or wrong combination of parameters provided")]
    InvalidArgs { what: &'static str },
}

impl From<DimensionlessError> for PtError {
    fn from(err: DimensionlessError) -> Self {
        match err {
            DimensionlessError::InvalidArgs { what } => PtError::InvalidArgs { what },
        }
    }
}
