//! Core Kernel - Foundational types shared by every wallet crate
//!
//! This crate provides the building blocks used across the domain modules:
//! - Billing period keys (`YYYY-MM`) with calendar arithmetic
//! - Currency and amount helpers over exact decimals
//! - Clocks that resolve "today" in the user's time zone
//! - Strongly-typed identifiers

pub mod money;
pub mod period;
pub mod temporal;
pub mod identifiers;
pub mod error;

pub use money::Currency;
pub use period::{PeriodKey, PeriodError};
pub use temporal::{Clock, FixedClock, SystemClock, Timezone};
pub use identifiers::{
    CategoryId, ConceptId, IncomeId, ExpenseId, PlannedExpenseId, PaymentId,
    BudgetId, GoalId, ContributionId,
};
pub use error::CoreError;
