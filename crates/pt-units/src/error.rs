//! Unit lookup errors.

use pt_core::PtError;
use thiserror::Error;

pub type UnitResult<T> = Result<T, UnitError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// Symbol is not in the metric length table.
    #[error("Unknown unit '{unit}'")]
    UnknownUnit { unit: String },
}

impl From<UnitError> for PtError {
    fn from(err: UnitError) -> Self {
        match err {
            UnitError::UnknownUnit { unit } => PtError::UnknownUnit { unit },
        }
    }
}
