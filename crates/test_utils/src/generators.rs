//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{ConceptId, PeriodKey};
use domain_planning::{Frequency, Payment, RecurringExpense};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for periods between 2000-01 and 2099-12
pub fn period_strategy() -> impl Strategy<Value = PeriodKey> {
    (2000i32..2100, 1u32..=12).prop_map(|(year, month)| {
        PeriodKey::new(year, month).expect("generated period is in range")
    })
}

/// Strategy for frequencies, including ones the engine does not know
pub fn frequency_strategy() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::Monthly),
        Just(Frequency::Bimonthly),
        "[A-Z]{3,10}".prop_map(Frequency::from),
    ]
}

/// Strategy for positive amounts with two decimals, up to 1,000,000
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for planned expenses without payments
///
/// Starts fall in 2023-2025 so that generated schedules overlap the periods
/// of [`payments_strategy`]. Some periods get an override, possibly zero.
pub fn recurring_expense_strategy() -> impl Strategy<Value = RecurringExpense> {
    (
        (2023i32..2026, 1u32..=12),
        positive_amount_strategy(),
        frequency_strategy(),
        0u32..36,
        (1u32..=31, 1u32..=31),
        -1i32..15,
        prop::collection::vec(((2024i32..2026, 1u32..=12), 0i64..200_000), 0..4),
    )
        .prop_map(|((year, month), amount, frequency, count, (cut_off, due), reminder, overrides)| {
            let start = PeriodKey::new(year, month).expect("generated period is in range");
            let mut expense = RecurringExpense::new(ConceptId::from("generated"), amount, start, frequency, count)
                .with_billing_days(cut_off, due)
                .with_reminder_days(reminder);
            for ((year, month), cents) in overrides {
                let period = PeriodKey::new(year, month).expect("generated period is in range");
                expense = expense.with_override(period, Decimal::new(cents, 2));
            }
            expense
        })
}

/// Strategy for payment lists credited to periods in 2024 and 2025
pub fn payments_strategy() -> impl Strategy<Value = Vec<Payment>> {
    prop::collection::vec(((2024i32..2026, 1u32..=12), positive_amount_strategy()), 0..24).prop_map(
        |entries| {
            entries
                .into_iter()
                .map(|((year, month), amount)| {
                    let period = PeriodKey::new(year, month).expect("generated period is in range");
                    Payment::new(amount, period.first_day(), period)
                })
                .collect()
        },
    )
}
