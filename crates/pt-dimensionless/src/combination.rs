//! Formula selection for the dual-combination groups.

use crate::error::{DimensionlessError, DimensionlessResult};
use crate::number::DimensionlessNumber;
use std::fmt::Debug;

/// Shared tail of every `TryFrom<*Params>`: log the outcome, map `None` to an error.
pub(crate) fn resolve<T, P>(
    resolved: Option<T>,
    number: DimensionlessNumber,
    params: &P,
) -> DimensionlessResult<T>
where
    T: Debug,
    P: Debug,
{
    match resolved {
        Some(input) => {
            tracing::debug!(number = number.symbol(), ?input, "resolved input combination");
            Ok(input)
        }
        None => {
            tracing::debug!(number = number.symbol(), ?params, "no input combination matched");
            Err(DimensionlessError::InvalidArgs {
                what: number.name(),
            })
        }
    }
}
