//! Billing period generation and settlement
//!
//! All functions here are total: an incomplete schedule yields no periods,
//! a period with no payments has paid zero, and a fully settled schedule has
//! no next due period.

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::PeriodKey;

use crate::expense::{Payment, RecurringExpense};

/// The earliest unsettled period and its position in the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NextDue {
    pub period: PeriodKey,
    pub index: usize,
}

/// Owed and paid totals for one scheduled period
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodBalance {
    pub period: PeriodKey,
    pub owed: Decimal,
    pub paid: Decimal,
    pub remaining: Decimal,
    pub settled: bool,
}

/// Ordered billing periods covered by the expense
///
/// Returns an empty list when the start period is missing or the count is
/// zero. The schedule ends early at [`PeriodKey::LAST`] when the count
/// would run past it.
pub fn generate_periods(expense: &RecurringExpense) -> Vec<PeriodKey> {
    let Some(start) = expense.start_period else {
        return Vec::new();
    };
    let step = expense.frequency.step_months();
    (0..expense.period_count)
        .map_while(|i| start.add_months(i.checked_mul(step)?))
        .collect()
}

/// Sum of payments credited to `period`
pub fn paid_amount_for_period(payments: &[Payment], period: PeriodKey) -> Decimal {
    payments
        .iter()
        .filter(|p| p.period == period)
        .map(|p| p.amount)
        .sum()
}

/// Amount owed for `period`, honoring overrides
pub fn owed_for_period(expense: &RecurringExpense, period: PeriodKey) -> Decimal {
    expense
        .period_overrides
        .get(&period)
        .copied()
        .unwrap_or(expense.amount_per_period)
}

/// Amount still owed for `period`, never negative
pub fn remaining_for_period(expense: &RecurringExpense, period: PeriodKey) -> Decimal {
    let remaining = owed_for_period(expense, period) - paid_amount_for_period(&expense.payments, period);
    remaining.max(Decimal::ZERO)
}

/// First period, in schedule order, whose payments fall short of what is owed
///
/// An underpaid early period always wins over later ones. `None` means the
/// expense is fully settled or has no schedule.
pub fn next_period_to_pay(expense: &RecurringExpense) -> Option<NextDue> {
    generate_periods(expense)
        .into_iter()
        .enumerate()
        .find(|(_, period)| {
            paid_amount_for_period(&expense.payments, *period) < owed_for_period(expense, *period)
        })
        .map(|(index, period)| NextDue { period, index })
}

/// Owed, paid and remaining amounts for every scheduled period
pub fn period_balances(expense: &RecurringExpense) -> Vec<PeriodBalance> {
    generate_periods(expense)
        .into_iter()
        .map(|period| {
            let owed = owed_for_period(expense, period);
            let paid = paid_amount_for_period(&expense.payments, period);
            PeriodBalance {
                period,
                owed,
                paid,
                remaining: (owed - paid).max(Decimal::ZERO),
                settled: paid >= owed,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::Frequency;
    use chrono::NaiveDate;
    use core_kernel::ConceptId;
    use rust_decimal_macros::dec;

    fn period(s: &str) -> PeriodKey {
        s.parse().unwrap()
    }

    fn payment(amount: Decimal, p: &str) -> Payment {
        Payment::new(amount, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), period(p))
    }

    fn expense(frequency: Frequency, count: u32) -> RecurringExpense {
        RecurringExpense::new(ConceptId::from("card"), dec!(1000), period("2024-11"), frequency, count)
    }

    #[test]
    fn test_generate_monthly_across_year_end() {
        let periods = generate_periods(&expense(Frequency::Monthly, 3));
        assert_eq!(periods, vec![period("2024-11"), period("2024-12"), period("2025-01")]);
    }

    #[test]
    fn test_generate_bimonthly() {
        let periods = generate_periods(&expense(Frequency::Bimonthly, 3));
        assert_eq!(periods, vec![period("2024-11"), period("2025-01"), period("2025-03")]);
    }

    #[test]
    fn test_generate_unknown_frequency_steps_monthly() {
        let periods = generate_periods(&expense(Frequency::Other("QUARTERLY".into()), 2));
        assert_eq!(periods, vec![period("2024-11"), period("2024-12")]);
    }

    #[test]
    fn test_generate_empty_without_start_or_count() {
        assert!(generate_periods(&expense(Frequency::Monthly, 0)).is_empty());

        let mut no_start = expense(Frequency::Monthly, 4);
        no_start.start_period = None;
        assert!(generate_periods(&no_start).is_empty());
    }

    #[test]
    fn test_paid_amount_sums_matching_period() {
        let payments = vec![
            payment(dec!(100), "2024-11"),
            payment(dec!(250.50), "2024-11"),
            payment(dec!(999), "2024-12"),
        ];
        assert_eq!(paid_amount_for_period(&payments, period("2024-11")), dec!(350.50));
        assert_eq!(paid_amount_for_period(&payments, period("2025-01")), Decimal::ZERO);
    }

    #[test]
    fn test_next_period_earliest_unsettled() {
        let mut e = expense(Frequency::Monthly, 3);
        e.payments = vec![
            payment(dec!(1000), "2024-11"),
            payment(dec!(300), "2024-12"),
        ];
        assert_eq!(
            next_period_to_pay(&e),
            Some(NextDue { period: period("2024-12"), index: 1 })
        );
    }

    #[test]
    fn test_next_period_none_when_settled() {
        let mut e = expense(Frequency::Monthly, 2);
        e.payments = vec![payment(dec!(1000), "2024-11"), payment(dec!(1000), "2024-12")];
        assert_eq!(next_period_to_pay(&e), None);
        assert_eq!(next_period_to_pay(&expense(Frequency::Monthly, 0)), None);
    }

    #[test]
    fn test_override_respected() {
        let mut e = expense(Frequency::Monthly, 2).with_override(period("2024-11"), dec!(2500));
        e.payments = vec![payment(dec!(1000), "2024-11")];
        assert_eq!(owed_for_period(&e, period("2024-11")), dec!(2500));
        assert_eq!(remaining_for_period(&e, period("2024-11")), dec!(1500));
        assert_eq!(next_period_to_pay(&e).map(|n| n.period), Some(period("2024-11")));
    }

    #[test]
    fn test_zero_override_is_settled_without_payments() {
        let e = expense(Frequency::Monthly, 2).with_override(period("2024-11"), Decimal::ZERO);
        assert_eq!(next_period_to_pay(&e).map(|n| n.index), Some(1));
    }

    #[test]
    fn test_period_balances() {
        let mut e = expense(Frequency::Monthly, 2);
        e.payments = vec![payment(dec!(400), "2024-12")];
        let balances = period_balances(&e);
        assert_eq!(balances.len(), 2);
        assert!(!balances[0].settled);
        assert_eq!(balances[1].paid, dec!(400));
        assert_eq!(balances[1].remaining, dec!(600));
    }
}
