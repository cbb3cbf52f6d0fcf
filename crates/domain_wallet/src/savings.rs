//! Savings goals

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::money::percentage_of;
use core_kernel::{ContributionId, GoalId};

/// Money set aside toward a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub id: ContributionId,
    pub amount: Decimal,
    pub date: NaiveDate,
}

impl Contribution {
    pub fn new(amount: Decimal, date: NaiveDate) -> Self {
        Self {
            id: ContributionId::new(),
            amount,
            date,
        }
    }
}

/// A target amount to save, optionally by a date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: GoalId,
    pub name: String,
    pub target_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
    #[serde(default)]
    pub contributions: Vec<Contribution>,
}

/// Snapshot of how far along a goal is
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub saved: Decimal,
    pub remaining: Decimal,
    /// Capped at 100
    pub percent: Decimal,
    pub reached: bool,
    /// Monthly saving needed to hit the target date; `None` without a date
    /// or once reached
    pub monthly_needed: Option<Decimal>,
}

impl SavingsGoal {
    pub fn new(name: impl Into<String>, target_amount: Decimal) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target_amount,
            target_date: None,
            contributions: Vec::new(),
        }
    }

    pub fn with_target_date(mut self, date: NaiveDate) -> Self {
        self.target_date = Some(date);
        self
    }

    pub fn saved(&self) -> Decimal {
        self.contributions.iter().map(|c| c.amount).sum()
    }

    /// Progress as of `today`
    ///
    /// Months left count the current month, so a target later this month
    /// needs the whole remainder now. A past target date also needs the whole
    /// remainder.
    pub fn progress(&self, today: NaiveDate) -> GoalProgress {
        let saved = self.saved();
        let remaining = (self.target_amount - saved).max(Decimal::ZERO);
        let reached = remaining.is_zero();
        let percent = percentage_of(saved, self.target_amount)
            .unwrap_or(dec!(100))
            .min(dec!(100));

        let monthly_needed = match self.target_date {
            Some(target) if !reached => {
                let months_left = months_between(today, target).max(0) + 1;
                Some((remaining / Decimal::from(months_left)).round_dp(2))
            }
            _ => None,
        };

        GoalProgress {
            saved,
            remaining,
            percent,
            reached,
            monthly_needed,
        }
    }
}

/// Whole calendar months from `from`'s month to `to`'s month
fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    i64::from(to.year() - from.year()) * 12 + i64::from(to.month()) - i64::from(from.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_progress_without_deadline() {
        let mut goal = SavingsGoal::new("Vacation", dec!(10000));
        goal.contributions.push(Contribution::new(dec!(2500), date(2024, 1, 15)));

        let progress = goal.progress(date(2024, 2, 1));
        assert_eq!(progress.saved, dec!(2500));
        assert_eq!(progress.remaining, dec!(7500));
        assert_eq!(progress.percent, dec!(25));
        assert!(!progress.reached);
        assert_eq!(progress.monthly_needed, None);
    }

    #[test]
    fn test_monthly_needed_counts_current_month() {
        let goal = SavingsGoal::new("Laptop", dec!(1200)).with_target_date(date(2024, 6, 30));
        // March through June
        let progress = goal.progress(date(2024, 3, 10));
        assert_eq!(progress.monthly_needed, Some(dec!(300)));
    }

    #[test]
    fn test_past_deadline_needs_everything_now() {
        let goal = SavingsGoal::new("Bike", dec!(900)).with_target_date(date(2024, 1, 31));
        assert_eq!(goal.progress(date(2024, 5, 1)).monthly_needed, Some(dec!(900)));
    }

    #[test]
    fn test_overfunded_goal_caps_percent() {
        let mut goal = SavingsGoal::new("Phone", dec!(500)).with_target_date(date(2024, 12, 1));
        goal.contributions.push(Contribution::new(dec!(650), date(2024, 2, 1)));

        let progress = goal.progress(date(2024, 3, 1));
        assert!(progress.reached);
        assert_eq!(progress.percent, dec!(100));
        assert_eq!(progress.remaining, Decimal::ZERO);
        assert_eq!(progress.monthly_needed, None);
    }
}
