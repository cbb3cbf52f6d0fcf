//! Planned Expense Domain - Recurring Bills and Installments
//!
//! This crate models recurring expenses (rent, card statements, insurance
//! installments) and derives everything the wallet shows about them from
//! their definition and payment history. Nothing here reads a clock or
//! touches storage; "today" is always passed in.
//!
//! # Pipeline
//!
//! ```text
//! generate_periods -> paid_amount_for_period -> next_period_to_pay -> classify_status
//! ```
//!
//! - **Periods**: a start month, a frequency and a count produce the
//!   ordered list of billing periods (`YYYY-MM`).
//! - **Aggregation**: payments are credited to a period, several partial
//!   payments may target the same one.
//! - **Next due**: the earliest period whose payments fall short of the
//!   amount owed (per-period overrides win over the base amount).
//! - **Status**: the due date of that period against today yields a label
//!   (Paid, Overdue, Urgent, Upcoming, Partial, Current) and a priority.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_planning::{RecurringExpense, Frequency, classify_status};
//!
//! let rent = RecurringExpense::new(concept_id, dec!(1000), start, Frequency::Monthly, 12)
//!     .with_billing_days(20, 5);
//! let status = classify_status(&rent, today);
//! ```

pub mod expense;
pub mod schedule;
pub mod status;
pub mod agenda;
pub mod error;

pub use expense::{RecurringExpense, Payment, Frequency, NO_REMINDER};
pub use schedule::{
    generate_periods, paid_amount_for_period, owed_for_period, remaining_for_period,
    next_period_to_pay, period_balances, NextDue, PeriodBalance,
};
pub use status::{
    classify_status, due_date_for_period, is_within_reminder_window,
    ExpenseStatus, StatusLabel, Priority,
};
pub use agenda::{upcoming_dues, active_reminders, calendar_month, DueItem, CalendarMark};
pub use error::PlanningError;
