//! Planned expense domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::PeriodKey;

/// Errors that can occur when defining planned expenses or recording payments
#[derive(Debug, Error, PartialEq)]
pub enum PlanningError {
    /// Amount is zero or negative
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Schedule definition is incomplete or out of range
    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    /// Payment targets a period the schedule never generates
    #[error("Period {0} is not part of the payment schedule")]
    PeriodNotScheduled(PeriodKey),

    /// Payment would push the period past the amount owed
    #[error("Payment of {amount} exceeds remaining balance {remaining} for period {period}")]
    PaymentExceedsRemaining {
        period: PeriodKey,
        amount: Decimal,
        remaining: Decimal,
    },

    /// Payment not found
    #[error("Payment not found: {0}")]
    PaymentNotFound(String),
}
