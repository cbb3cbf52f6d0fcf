//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::{ConceptId, PeriodKey};
use domain_planning::{Frequency, Payment, RecurringExpense, NO_REMINDER};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::period;

/// Builder for planned expenses
///
/// Defaults: concept `rent`, 1000 per period, twelve monthly periods from
/// 2024-03, cutoff day 1, due day 10, no reminder and no payments.
pub struct RecurringExpenseBuilder {
    concept_id: ConceptId,
    amount: Decimal,
    start: Option<PeriodKey>,
    frequency: Frequency,
    count: u32,
    cut_off_day: u32,
    due_day: u32,
    reminder_days: i32,
    description: Option<String>,
    overrides: Vec<(PeriodKey, Decimal)>,
    payments: Vec<Payment>,
}

impl Default for RecurringExpenseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecurringExpenseBuilder {
    pub fn new() -> Self {
        Self {
            concept_id: ConceptId::from("rent"),
            amount: dec!(1000),
            start: Some(period("2024-03")),
            frequency: Frequency::Monthly,
            count: 12,
            cut_off_day: 1,
            due_day: 10,
            reminder_days: NO_REMINDER,
            description: None,
            overrides: Vec::new(),
            payments: Vec::new(),
        }
    }

    pub fn concept(mut self, concept_id: ConceptId) -> Self {
        self.concept_id = concept_id;
        self
    }

    pub fn amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the first period, as `YYYY-MM`
    pub fn starting(mut self, key: &str) -> Self {
        self.start = Some(period(key));
        self
    }

    /// Leaves the start period unset, as older records sometimes do
    pub fn without_start(mut self) -> Self {
        self.start = None;
        self
    }

    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn billing_days(mut self, cut_off_day: u32, due_day: u32) -> Self {
        self.cut_off_day = cut_off_day;
        self.due_day = due_day;
        self
    }

    pub fn reminder(mut self, days: i32) -> Self {
        self.reminder_days = days;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn override_amount(mut self, key: &str, amount: Decimal) -> Self {
        self.overrides.push((period(key), amount));
        self
    }

    /// Adds a payment toward `key`, dated the first day of that month
    ///
    /// Payments are stored as given, bypassing the remaining-balance check.
    pub fn paid(mut self, key: &str, amount: Decimal) -> Self {
        let credited = period(key);
        self.payments.push(Payment::new(amount, credited.first_day(), credited));
        self
    }

    pub fn build(self) -> RecurringExpense {
        let mut expense = RecurringExpense::new(self.concept_id, self.amount, period("2024-01"), self.frequency, self.count)
            .with_billing_days(self.cut_off_day, self.due_day)
            .with_reminder_days(self.reminder_days);
        expense.start_period = self.start;
        if let Some(description) = self.description {
            expense = expense.with_description(description);
        }
        for (key, amount) in self.overrides {
            expense = expense.with_override(key, amount);
        }
        expense.payments = self.payments;
        expense
    }
}
