//! Planned (recurring) expense definitions and their payments
//!
//! Field names and shapes match the persisted wallet document: camelCase
//! keys, amounts as JSON numbers, periods as `YYYY-MM` strings.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use core_kernel::{ConceptId, PaymentId, PeriodKey, PlannedExpenseId};

use crate::error::PlanningError;
use crate::schedule::{generate_periods, remaining_for_period};

/// `reminderDays` value meaning "never remind"
pub const NO_REMINDER: i32 = -1;

/// Upper bound on periods a single definition may cover (50 years monthly)
pub const MAX_PERIOD_COUNT: u32 = 600;

/// Billing frequency
///
/// Unrecognized values from older documents are kept verbatim so they
/// survive a load/save cycle, and are stepped like monthly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Frequency {
    #[default]
    Monthly,
    Bimonthly,
    Other(String),
}

impl Frequency {
    /// Months between consecutive periods
    pub fn step_months(&self) -> u32 {
        match self {
            Frequency::Bimonthly => 2,
            _ => 1,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Frequency::Monthly => "MONTHLY",
            Frequency::Bimonthly => "BIMONTHLY",
            Frequency::Other(raw) => raw,
        }
    }
}

impl From<String> for Frequency {
    fn from(value: String) -> Self {
        match value.as_str() {
            "MONTHLY" => Frequency::Monthly,
            "BIMONTHLY" => Frequency::Bimonthly,
            _ => Frequency::Other(value),
        }
    }
}

impl From<Frequency> for String {
    fn from(frequency: Frequency) -> String {
        frequency.as_str().to_string()
    }
}

/// A payment credited to one billing period
///
/// `date` is when the money moved; `period` is the bill it settles. A
/// payment made in March may settle February.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub period: PeriodKey,
}

impl Payment {
    pub fn new(amount: Decimal, date: NaiveDate, period: PeriodKey) -> Self {
        Self {
            id: PaymentId::new(),
            amount,
            date,
            period,
        }
    }
}

/// A recurring expense covering a fixed number of billing periods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurringExpense {
    /// Unique identifier
    pub id: PlannedExpenseId,
    /// Catalog concept the expense is classified under
    pub concept_id: ConceptId,
    /// Free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Amount owed per period unless overridden
    pub amount_per_period: Decimal,
    /// First billing period
    #[serde(default, deserialize_with = "deserialize_optional_period")]
    pub start_period: Option<PeriodKey>,
    /// Month step between periods
    #[serde(default)]
    pub frequency: Frequency,
    /// Number of periods covered
    #[serde(default)]
    pub period_count: u32,
    /// Day of month the billing cycle closes
    #[serde(default)]
    pub cut_off_day: u32,
    /// Day of month payment is due
    #[serde(default)]
    pub due_day: u32,
    /// Days of advance notice; -1 disables reminders
    #[serde(default = "default_reminder_days")]
    pub reminder_days: i32,
    /// Per-period amounts replacing `amount_per_period`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub period_overrides: BTreeMap<PeriodKey, Decimal>,
    /// Payments in recording order
    #[serde(default)]
    pub payments: Vec<Payment>,
}

fn default_reminder_days() -> i32 {
    NO_REMINDER
}

fn deserialize_optional_period<'de, D>(deserializer: D) -> Result<Option<PeriodKey>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

impl RecurringExpense {
    /// Creates a planned expense with no payments
    ///
    /// Billing days default to the 1st and reminders are off until set.
    pub fn new(
        concept_id: ConceptId,
        amount_per_period: Decimal,
        start_period: PeriodKey,
        frequency: Frequency,
        period_count: u32,
    ) -> Self {
        Self {
            id: PlannedExpenseId::new(),
            concept_id,
            description: None,
            amount_per_period,
            start_period: Some(start_period),
            frequency,
            period_count,
            cut_off_day: 1,
            due_day: 1,
            reminder_days: NO_REMINDER,
            period_overrides: BTreeMap::new(),
            payments: Vec::new(),
        }
    }

    /// Sets the cutoff and due days
    pub fn with_billing_days(mut self, cut_off_day: u32, due_day: u32) -> Self {
        self.cut_off_day = cut_off_day;
        self.due_day = due_day;
        self
    }

    /// Sets the reminder lead time
    pub fn with_reminder_days(mut self, days: i32) -> Self {
        self.reminder_days = days;
        self
    }

    /// Overrides the amount owed for one period
    pub fn with_override(mut self, period: PeriodKey, amount: Decimal) -> Self {
        self.period_overrides.insert(period, amount);
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns true when reminders are enabled
    pub fn has_reminder(&self) -> bool {
        self.reminder_days >= 0
    }

    /// Returns true if the period is one of the generated billing periods
    pub fn is_scheduled(&self, period: PeriodKey) -> bool {
        generate_periods(self).contains(&period)
    }

    /// Checks the definition is complete enough to schedule
    pub fn validate(&self) -> Result<(), PlanningError> {
        if self.amount_per_period <= Decimal::ZERO {
            return Err(PlanningError::InvalidAmount(
                "amount per period must be greater than zero".to_string(),
            ));
        }
        if self.start_period.is_none() {
            return Err(PlanningError::InvalidSchedule("start period is required".to_string()));
        }
        if self.period_count == 0 || self.period_count > MAX_PERIOD_COUNT {
            return Err(PlanningError::InvalidSchedule(format!(
                "period count must be between 1 and {}",
                MAX_PERIOD_COUNT
            )));
        }
        if !(1..=31).contains(&self.cut_off_day) {
            return Err(PlanningError::InvalidSchedule("cutoff day must be between 1 and 31".to_string()));
        }
        if !(1..=31).contains(&self.due_day) {
            return Err(PlanningError::InvalidSchedule("due day must be between 1 and 31".to_string()));
        }
        if self.reminder_days < NO_REMINDER {
            return Err(PlanningError::InvalidSchedule("reminder days must be -1 or greater".to_string()));
        }
        if let Some((period, _)) = self.period_overrides.iter().find(|(_, amount)| **amount < Decimal::ZERO) {
            return Err(PlanningError::InvalidAmount(format!(
                "override for {} must not be negative",
                period
            )));
        }
        Ok(())
    }

    /// Records a payment against one of the scheduled periods
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the amount is not positive
    /// - `PeriodNotScheduled` if the period is outside the schedule
    /// - `PaymentExceedsRemaining` if the amount is more than is still owed
    pub fn record_payment(&mut self, payment: Payment) -> Result<&Payment, PlanningError> {
        if payment.amount <= Decimal::ZERO {
            return Err(PlanningError::InvalidAmount(
                "payment amount must be greater than zero".to_string(),
            ));
        }
        if !self.is_scheduled(payment.period) {
            return Err(PlanningError::PeriodNotScheduled(payment.period));
        }

        let remaining = remaining_for_period(self, payment.period);
        if payment.amount > remaining {
            return Err(PlanningError::PaymentExceedsRemaining {
                period: payment.period,
                amount: payment.amount,
                remaining,
            });
        }

        tracing::debug!(
            expense_id = %self.id,
            period = %payment.period,
            amount = %payment.amount,
            "Recording planned payment"
        );
        self.payments.push(payment);
        Ok(&self.payments[self.payments.len() - 1])
    }

    /// Removes a payment by id, returning it
    pub fn remove_payment(&mut self, payment_id: &PaymentId) -> Result<Payment, PlanningError> {
        let position = self
            .payments
            .iter()
            .position(|p| &p.id == payment_id)
            .ok_or_else(|| PlanningError::PaymentNotFound(payment_id.to_string()))?;
        Ok(self.payments.remove(position))
    }

    /// Replaces the schedule definition, keeping id and payment history
    pub fn redefine(&mut self, definition: RecurringExpense) {
        let id = self.id.clone();
        let payments = std::mem::take(&mut self.payments);
        *self = RecurringExpense {
            id,
            payments,
            ..definition
        };
    }
}
