//! Dashboard and calendar views over a set of planned expenses

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{ConceptId, PeriodKey, PlannedExpenseId};

use crate::expense::RecurringExpense;
use crate::schedule::{generate_periods, next_period_to_pay, owed_for_period, paid_amount_for_period};
use crate::status::{due_date_for_period, is_within_reminder_window, ExpenseStatus};

/// The next unsettled bill of one planned expense
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DueItem {
    pub expense_id: PlannedExpenseId,
    pub concept_id: ConceptId,
    pub period: PeriodKey,
    pub due_date: NaiveDate,
    pub owed: Decimal,
    pub paid: Decimal,
    pub remaining: Decimal,
    pub days_until_due: i64,
    pub status: ExpenseStatus,
    pub reminder_active: bool,
}

impl DueItem {
    fn for_expense(expense: &RecurringExpense, today: NaiveDate) -> Option<Self> {
        let next = next_period_to_pay(expense)?;
        let due_date = due_date_for_period(expense, next.period);
        let owed = owed_for_period(expense, next.period);
        let paid = paid_amount_for_period(&expense.payments, next.period);

        Some(Self {
            expense_id: expense.id.clone(),
            concept_id: expense.concept_id.clone(),
            period: next.period,
            due_date,
            owed,
            paid,
            remaining: (owed - paid).max(Decimal::ZERO),
            days_until_due: (due_date - today).num_days(),
            status: ExpenseStatus::for_due_date(due_date, paid, today),
            reminder_active: is_within_reminder_window(expense, today),
        })
    }
}

/// One scheduled due date inside a calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMark {
    pub expense_id: PlannedExpenseId,
    pub concept_id: ConceptId,
    pub period: PeriodKey,
    pub due_date: NaiveDate,
    pub owed: Decimal,
    pub paid: Decimal,
    pub settled: bool,
}

/// Unsettled bills, most pressing first
///
/// Sorted by priority (high first), then by due date, earliest first.
/// Fully settled expenses are left out.
pub fn upcoming_dues(expenses: &[RecurringExpense], today: NaiveDate) -> Vec<DueItem> {
    let mut items: Vec<DueItem> = expenses
        .iter()
        .filter_map(|expense| DueItem::for_expense(expense, today))
        .collect();

    items.sort_by(|a, b| {
        b.status
            .priority
            .cmp(&a.status.priority)
            .then_with(|| a.due_date.cmp(&b.due_date))
    });
    items
}

/// Bills whose reminder window has opened, in the same order as
/// [`upcoming_dues`]
pub fn active_reminders(expenses: &[RecurringExpense], today: NaiveDate) -> Vec<DueItem> {
    upcoming_dues(expenses, today)
        .into_iter()
        .filter(|item| item.reminder_active)
        .collect()
}

/// Every scheduled due date that falls inside `month`, ordered by date
pub fn calendar_month(expenses: &[RecurringExpense], month: PeriodKey) -> Vec<CalendarMark> {
    let mut marks: Vec<CalendarMark> = expenses
        .iter()
        .flat_map(|expense| {
            generate_periods(expense)
                .into_iter()
                .filter_map(move |period| {
                    let due_date = due_date_for_period(expense, period);
                    if !month.contains(due_date) {
                        return None;
                    }
                    let owed = owed_for_period(expense, period);
                    let paid = paid_amount_for_period(&expense.payments, period);
                    Some(CalendarMark {
                        expense_id: expense.id.clone(),
                        concept_id: expense.concept_id.clone(),
                        period,
                        due_date,
                        owed,
                        paid,
                        settled: paid >= owed,
                    })
                })
        })
        .collect();

    marks.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    marks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::{Frequency, Payment};
    use crate::status::{Priority, StatusLabel};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn period(s: &str) -> PeriodKey {
        s.parse().unwrap()
    }

    fn bill(name: &str, due_day: u32) -> RecurringExpense {
        RecurringExpense::new(ConceptId::from(name), dec!(500), period("2024-03"), Frequency::Monthly, 3)
            .with_billing_days(1, due_day)
    }

    #[test]
    fn test_upcoming_sorted_by_priority_then_date() {
        let today = date(2024, 3, 10);
        let later = bill("internet", 22); // 12 days: Upcoming / Medium
        let overdue = bill("water", 5); // past due: Overdue / High
        let soon = bill("phone", 14); // 4 days: Upcoming / High
        let far = bill("gym", 28); // 18 days: Current / Low

        let items = upcoming_dues(&[later, far, soon, overdue], today);
        let concepts: Vec<&str> = items.iter().map(|i| i.concept_id.as_str()).collect();
        assert_eq!(concepts, vec!["water", "phone", "internet", "gym"]);
        assert_eq!(items[0].status.label, StatusLabel::Overdue);
        assert_eq!(items[2].status.priority, Priority::Medium);
        assert_eq!(items[3].days_until_due, 18);
    }

    #[test]
    fn test_upcoming_skips_settled() {
        let mut settled = RecurringExpense::new(ConceptId::from("tv"), dec!(100), period("2024-03"), Frequency::Monthly, 1);
        settled.payments.push(Payment::new(dec!(100), date(2024, 3, 1), period("2024-03")));
        assert!(upcoming_dues(&[settled], date(2024, 3, 10)).is_empty());
    }

    #[test]
    fn test_active_reminders() {
        let today = date(2024, 3, 10);
        let reminded = bill("phone", 12).with_reminder_days(3);
        let silent = bill("water", 12);
        let reminders = active_reminders(&[reminded, silent], today);
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].concept_id.as_str(), "phone");
    }

    #[test]
    fn test_calendar_month_uses_rolled_due_dates() {
        // cutoff 20 > due 5: the March period is due in April
        let card = bill("card", 5).with_billing_days(20, 5);
        let april = calendar_month(&[card.clone()], period("2024-04"));
        assert_eq!(april.len(), 1);
        assert_eq!(april[0].period, period("2024-03"));
        assert_eq!(april[0].due_date, date(2024, 4, 5));

        assert!(calendar_month(&[card], period("2024-03")).is_empty());
    }

    #[test]
    fn test_calendar_month_marks_settled() {
        let mut rent = bill("rent", 10);
        rent.payments.push(Payment::new(dec!(500), date(2024, 3, 8), period("2024-03")));
        let internet = bill("internet", 2);

        let marks = calendar_month(&[rent, internet], period("2024-03"));
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[0].concept_id.as_str(), "internet");
        assert!(!marks[0].settled);
        assert!(marks[1].settled);
    }
}
