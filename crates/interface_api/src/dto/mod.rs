//! Request and response bodies

pub mod planning;
pub mod agenda;
pub mod entries;

use core_kernel::PeriodKey;

use crate::error::ApiError;

/// Parses a `YYYY-MM` value from a path or body
pub fn parse_period(raw: &str) -> Result<PeriodKey, ApiError> {
    Ok(raw.trim().parse()?)
}
