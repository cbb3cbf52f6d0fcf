//! Payment status classification
//!
//! Status is never stored. It is recomputed from the schedule, the payment
//! history and the caller-supplied date on every read.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::PeriodKey;

use crate::expense::RecurringExpense;
use crate::schedule::{next_period_to_pay, paid_amount_for_period};

/// Days before the due date at which a bill counts as coming up
pub const DUE_SOON_DAYS: i64 = 15;

/// Days before the due date at which a coming-up bill becomes high priority
pub const ESCALATION_DAYS: i64 = 7;

/// Lifecycle label of a planned expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusLabel {
    /// Every scheduled period is settled
    Paid,
    /// Past due with nothing paid
    Overdue,
    /// Past due with a partial payment
    Urgent,
    /// Due within the window with nothing paid
    Upcoming,
    /// Due within the window with a partial payment
    Partial,
    /// Not due yet
    Current,
}

impl StatusLabel {
    /// Label shown to the user
    pub fn display_label(&self) -> &'static str {
        match self {
            StatusLabel::Paid => "Pagado",
            StatusLabel::Overdue => "Vencido",
            StatusLabel::Urgent => "Urgente",
            StatusLabel::Upcoming => "Próximo",
            StatusLabel::Partial => "Parcial",
            StatusLabel::Current => "Al Corriente",
        }
    }
}

/// Attention priority, ordered `Low < Medium < High`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn display_label(&self) -> &'static str {
        match self {
            Priority::Low => "Baja",
            Priority::Medium => "Media",
            Priority::High => "Alta",
        }
    }
}

/// Classification result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseStatus {
    pub label: StatusLabel,
    pub priority: Priority,
}

impl ExpenseStatus {
    pub fn paid() -> Self {
        Self {
            label: StatusLabel::Paid,
            priority: Priority::Low,
        }
    }

    /// Classifies one period given its due date and what was paid toward it
    pub(crate) fn for_due_date(due_date: NaiveDate, paid: Decimal, today: NaiveDate) -> Self {
        let days_until_due = (due_date - today).num_days();
        let partially_paid = paid > Decimal::ZERO;

        if due_date < today {
            let label = if partially_paid { StatusLabel::Urgent } else { StatusLabel::Overdue };
            return Self { label, priority: Priority::High };
        }

        if days_until_due <= DUE_SOON_DAYS {
            let label = if partially_paid { StatusLabel::Partial } else { StatusLabel::Upcoming };
            let priority = if days_until_due <= ESCALATION_DAYS {
                Priority::High
            } else {
                Priority::Medium
            };
            return Self { label, priority };
        }

        Self {
            label: StatusLabel::Current,
            priority: Priority::Low,
        }
    }
}

/// Due date for a billing period
///
/// The bill is due in the period's own month unless the cutoff day falls
/// after the due day, in which case it is due the following month. The due
/// day is clamped to the length of that month. [`PeriodKey::LAST`] has no
/// following month, so its bill stays due in its own month.
pub fn due_date_for_period(expense: &RecurringExpense, period: PeriodKey) -> NaiveDate {
    let due_month = if expense.cut_off_day > expense.due_day {
        period.next().unwrap_or(period)
    } else {
        period
    };
    due_month.clamped_day(expense.due_day)
}

/// Classifies the expense as of `today`
pub fn classify_status(expense: &RecurringExpense, today: NaiveDate) -> ExpenseStatus {
    match next_period_to_pay(expense) {
        None => ExpenseStatus::paid(),
        Some(next) => {
            let due_date = due_date_for_period(expense, next.period);
            let paid = paid_amount_for_period(&expense.payments, next.period);
            ExpenseStatus::for_due_date(due_date, paid, today)
        }
    }
}

/// Returns true once `today` is inside the reminder lead time of the next due
/// period
///
/// Always false for settled expenses and when reminders are disabled.
pub fn is_within_reminder_window(expense: &RecurringExpense, today: NaiveDate) -> bool {
    if !expense.has_reminder() {
        return false;
    }
    next_period_to_pay(expense).is_some_and(|next| {
        let due_date = due_date_for_period(expense, next.period);
        (due_date - today).num_days() <= i64::from(expense.reminder_days)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::{Frequency, Payment};
    use core_kernel::ConceptId;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(s: &str) -> PeriodKey {
        s.parse().unwrap()
    }

    fn card_bill() -> RecurringExpense {
        RecurringExpense::new(ConceptId::from("card"), dec!(1000), period("2024-03"), Frequency::Monthly, 1)
            .with_billing_days(20, 5)
    }

    #[test]
    fn test_due_date_rolls_when_cutoff_after_due_day() {
        assert_eq!(due_date_for_period(&card_bill(), period("2024-03")), date(2024, 4, 5));
    }

    #[test]
    fn test_due_date_same_month_when_cutoff_before_due_day() {
        let bill = card_bill().with_billing_days(1, 15);
        assert_eq!(due_date_for_period(&bill, period("2024-03")), date(2024, 3, 15));
    }

    #[test]
    fn test_due_date_clamped_to_month_end() {
        let bill = card_bill().with_billing_days(1, 31);
        assert_eq!(due_date_for_period(&bill, period("2024-02")), date(2024, 2, 29));
    }

    #[test]
    fn test_overdue_when_past_due_and_unpaid() {
        let status = classify_status(&card_bill(), date(2024, 4, 10));
        assert_eq!(status.label, StatusLabel::Overdue);
        assert_eq!(status.priority, Priority::High);
    }

    #[test]
    fn test_urgent_when_past_due_and_partially_paid() {
        let mut bill = card_bill();
        bill.payments.push(Payment::new(dec!(400), date(2024, 4, 1), period("2024-03")));
        let status = classify_status(&bill, date(2024, 4, 10));
        assert_eq!(status.label, StatusLabel::Urgent);
        assert_eq!(status.priority, Priority::High);
    }

    #[test]
    fn test_upcoming_escalates_inside_seven_days() {
        let status = classify_status(&card_bill(), date(2024, 3, 30));
        assert_eq!(status.label, StatusLabel::Upcoming);
        assert_eq!(status.priority, Priority::High);
    }

    #[test]
    fn test_upcoming_medium_between_eight_and_fifteen_days() {
        let status = classify_status(&card_bill(), date(2024, 3, 25));
        assert_eq!(status.label, StatusLabel::Upcoming);
        assert_eq!(status.priority, Priority::Medium);
    }

    #[test]
    fn test_due_today_is_not_overdue() {
        let status = classify_status(&card_bill(), date(2024, 4, 5));
        assert_eq!(status.label, StatusLabel::Upcoming);
        assert_eq!(status.priority, Priority::High);
    }

    #[test]
    fn test_current_beyond_fifteen_days() {
        let status = classify_status(&card_bill(), date(2024, 3, 20));
        assert_eq!(status.label, StatusLabel::Current);
        assert_eq!(status.priority, Priority::Low);
    }

    #[test]
    fn test_paid_when_settled() {
        let mut bill = card_bill();
        bill.payments.push(Payment::new(dec!(1000), date(2024, 4, 1), period("2024-03")));
        assert_eq!(classify_status(&bill, date(2024, 4, 10)), ExpenseStatus::paid());
    }

    #[test]
    fn test_reminder_window() {
        let bill = card_bill().with_reminder_days(3);
        assert!(!is_within_reminder_window(&bill, date(2024, 4, 1)));
        assert!(is_within_reminder_window(&bill, date(2024, 4, 2)));
        assert!(is_within_reminder_window(&bill, date(2024, 4, 9)));

        let on_due_date = card_bill().with_reminder_days(0);
        assert!(!is_within_reminder_window(&on_due_date, date(2024, 4, 4)));
        assert!(is_within_reminder_window(&on_due_date, date(2024, 4, 5)));

        assert!(!is_within_reminder_window(&card_bill(), date(2024, 4, 5)));
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(StatusLabel::Upcoming.display_label(), "Próximo");
        assert_eq!(StatusLabel::Current.display_label(), "Al Corriente");
    }
}
