//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use std::fmt::Debug;

use rust_decimal::Decimal;

use domain_planning::{
    next_period_to_pay, remaining_for_period, ExpenseStatus, Priority, RecurringExpense, StatusLabel,
};
use domain_wallet::{AppData, WalletError};

/// Asserts a classification result
///
/// # Panics
///
/// Panics if either the label or the priority differs
pub fn assert_status(actual: &ExpenseStatus, label: StatusLabel, priority: Priority) {
    assert_eq!(
        (actual.label, actual.priority),
        (label, priority),
        "Expected {} / {}, got {} / {}",
        label.display_label(),
        priority.display_label(),
        actual.label.display_label(),
        actual.priority.display_label()
    );
}

/// Asserts that every element is strictly greater than the one before it
pub fn assert_strictly_increasing<T: Ord + Debug>(items: &[T]) {
    for pair in items.windows(2) {
        assert!(
            pair[0] < pair[1],
            "Sequence not strictly increasing: {:?} is followed by {:?}",
            pair[0],
            pair[1]
        );
    }
}

/// Asserts that no scheduled period of the expense is still owed
pub fn assert_fully_settled(expense: &RecurringExpense) {
    if let Some(next) = next_period_to_pay(expense) {
        panic!(
            "Expected {} to be settled, but {} still owes {}",
            expense.id,
            next.period,
            remaining_for_period(expense, next.period)
        );
    }
}

/// Asserts that two amounts are equal within a tolerance
pub fn assert_amount_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that an operation failed because an entity is still referenced
pub fn assert_in_use<T: Debug>(result: Result<T, WalletError>, referenced_by: &str) {
    match result {
        Err(WalletError::InUse { referenced_by: actual, .. }) => assert_eq!(
            actual, referenced_by,
            "Entity referenced by {} instead of {}",
            actual, referenced_by
        ),
        other => panic!("Expected an in-use error from {}, got {:?}", referenced_by, other),
    }
}

/// Asserts that a document survives a JSON round trip unchanged
pub fn assert_json_round_trip(doc: &AppData) {
    let json = serde_json::to_string(doc).expect("document serializes");
    let back: AppData = serde_json::from_str(&json).expect("document deserializes");
    assert_eq!(&back, doc, "Document changed across a JSON round trip");
}
