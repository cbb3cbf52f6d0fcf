//! Planned expense DTOs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_planning::{
    due_date_for_period, is_within_reminder_window, next_period_to_pay, remaining_for_period,
    ExpenseStatus, Frequency, PeriodBalance, RecurringExpense,
};

use super::parse_period;
use crate::error::ApiError;

/// Body for creating or redefining a planned expense
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExpenseRequest {
    #[validate(length(min = 1, message = "concept is required"))]
    pub concept_id: String,
    #[validate(length(max = 200))]
    pub description: Option<String>,
    pub amount_per_period: Decimal,
    pub start_period: String,
    #[serde(default)]
    pub frequency: Option<String>,
    #[validate(range(min = 1, max = 600))]
    pub period_count: u32,
    #[validate(range(min = 1, max = 31))]
    pub cut_off_day: u32,
    #[validate(range(min = 1, max = 31))]
    pub due_day: u32,
    /// Falls back to the document's notification defaults when absent
    pub reminder_days: Option<i32>,
    #[serde(default)]
    pub period_overrides: BTreeMap<String, Decimal>,
}

impl PlannedExpenseRequest {
    /// Builds the domain definition, validating the request first
    pub fn into_definition(self, default_reminder_days: i32) -> Result<RecurringExpense, ApiError> {
        self.validate()?;
        let start = parse_period(&self.start_period)?;
        let frequency = self.frequency.map(Frequency::from).unwrap_or_default();

        let mut expense = RecurringExpense::new(
            self.concept_id.as_str().into(),
            self.amount_per_period,
            start,
            frequency,
            self.period_count,
        )
        .with_billing_days(self.cut_off_day, self.due_day)
        .with_reminder_days(self.reminder_days.unwrap_or(default_reminder_days));

        if let Some(description) = self.description.filter(|d| !d.trim().is_empty()) {
            expense = expense.with_description(description);
        }
        for (period, amount) in self.period_overrides {
            expense = expense.with_override(parse_period(&period)?, amount);
        }
        Ok(expense)
    }
}

/// Body for recording a payment
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: Decimal,
    pub date: NaiveDate,
    #[validate(length(equal = 7, message = "period must be YYYY-MM"))]
    pub period: String,
}

/// The next bill of a planned expense
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextDueView {
    pub period: String,
    pub due_date: NaiveDate,
    pub remaining: Decimal,
}

/// A planned expense with its computed status
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExpenseView {
    #[serde(flatten)]
    pub expense: RecurringExpense,
    pub status: ExpenseStatus,
    pub status_label: &'static str,
    pub priority_label: &'static str,
    pub next_due: Option<NextDueView>,
    pub reminder_active: bool,
}

impl PlannedExpenseView {
    pub fn new(expense: RecurringExpense, today: NaiveDate) -> Self {
        let status = domain_planning::classify_status(&expense, today);
        let next_due = next_period_to_pay(&expense).map(|next| NextDueView {
            period: next.period.to_string(),
            due_date: due_date_for_period(&expense, next.period),
            remaining: remaining_for_period(&expense, next.period),
        });
        let reminder_active = is_within_reminder_window(&expense, today);

        Self {
            status_label: status.label.display_label(),
            priority_label: status.priority.display_label(),
            status,
            next_due,
            reminder_active,
            expense,
        }
    }
}

/// One scheduled period with its due date
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodView {
    #[serde(flatten)]
    pub balance: PeriodBalance,
    pub due_date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodsResponse {
    pub expense_id: String,
    pub periods: Vec<PeriodView>,
}
