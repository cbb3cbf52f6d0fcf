//! Monthly category budgets

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::money::percentage_of;
use core_kernel::{BudgetId, CategoryId, PeriodKey};

/// Usage percentage from which a budget is flagged as close to its limit
pub const NEAR_LIMIT_PERCENT: Decimal = dec!(80);

/// Spending limit for one expense category in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: BudgetId,
    pub category_id: CategoryId,
    pub period: PeriodKey,
    pub amount: Decimal,
}

impl Budget {
    pub fn new(category_id: CategoryId, period: PeriodKey, amount: Decimal) -> Self {
        Self {
            id: BudgetId::new(),
            category_id,
            period,
            amount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetState {
    Within,
    NearLimit,
    Exceeded,
}

/// How much of a budget has been consumed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUsage {
    pub budget_id: BudgetId,
    pub category_id: CategoryId,
    pub budgeted: Decimal,
    pub spent: Decimal,
    /// Negative once the budget is exceeded
    pub remaining: Decimal,
    pub percent_used: Decimal,
    pub state: BudgetState,
}

impl BudgetUsage {
    pub fn evaluate(budget: &Budget, spent: Decimal) -> Self {
        let percent_used = percentage_of(spent, budget.amount).unwrap_or(Decimal::ZERO);
        let state = if spent > budget.amount {
            BudgetState::Exceeded
        } else if percent_used >= NEAR_LIMIT_PERCENT {
            BudgetState::NearLimit
        } else {
            BudgetState::Within
        };

        Self {
            budget_id: budget.id.clone(),
            category_id: budget.category_id.clone(),
            budgeted: budget.amount,
            spent,
            remaining: budget.amount - spent,
            percent_used,
            state,
        }
    }
}
