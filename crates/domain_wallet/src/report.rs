//! Monthly income and spending summary

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::money::percentage_of;
use core_kernel::{CategoryId, ConceptId, Currency, PeriodKey};

use crate::budget::BudgetUsage;
use crate::document::AppData;

/// Label for spending whose concept or category no longer exists
pub const UNCATEGORIZED: &str = "Sin categoría";

/// Money spent in one category during the month
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    /// `None` when the spending could not be traced to a category
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    pub period: PeriodKey,
    pub currency: Currency,
    pub total_income: Decimal,
    pub total_daily_expenses: Decimal,
    /// Planned expense payments made during the month, by payment date
    pub total_planned_payments: Decimal,
    pub total_spent: Decimal,
    pub net_balance: Decimal,
    /// Share of income left over, absent when there was no income
    pub savings_rate: Option<Decimal>,
    pub spending_by_category: Vec<CategorySpending>,
    pub budget_usage: Vec<BudgetUsage>,
}

impl MonthlyReport {
    /// Totals are rounded to the minor unit of the document currency
    pub fn build(doc: &AppData, month: PeriodKey) -> Self {
        let currency = doc.settings.currency;
        let total_income = currency.round(doc.incomes_in(month).map(|i| i.amount).sum());
        let total_daily_expenses = currency.round(doc.expenses_in(month).map(|e| e.amount).sum());
        let total_planned_payments =
            currency.round(doc.planned_payments_in(month).map(|(_, p)| p.amount).sum());
        let total_spent = total_daily_expenses + total_planned_payments;
        let net_balance = total_income - total_spent;

        let spent_by_category = spending_by_category(doc, month);

        let budget_usage = doc
            .budgets
            .iter()
            .filter(|b| b.period == month)
            .map(|budget| {
                let spent = spent_by_category
                    .get(&Some(budget.category_id.clone()))
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                BudgetUsage::evaluate(budget, spent)
            })
            .collect();

        let mut spending: Vec<CategorySpending> = spent_by_category
            .into_iter()
            .map(|(category_id, amount)| {
                let name = category_id
                    .as_ref()
                    .and_then(|id| doc.category(id))
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| UNCATEGORIZED.to_string());
                CategorySpending {
                    category_id,
                    name,
                    amount: currency.round(amount),
                }
            })
            .collect();
        spending.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.name.cmp(&b.name)));

        Self {
            period: month,
            currency,
            total_income,
            total_daily_expenses,
            total_planned_payments,
            total_spent,
            net_balance,
            savings_rate: percentage_of(net_balance, total_income),
            spending_by_category: spending,
            budget_usage,
        }
    }
}

fn spending_by_category(doc: &AppData, month: PeriodKey) -> BTreeMap<Option<CategoryId>, Decimal> {
    let category_of = |concept_id: &ConceptId| doc.category_of(concept_id).map(|c| c.id.clone());

    let daily = doc.expenses_in(month).map(|e| (category_of(&e.concept_id), e.amount));
    let planned = doc
        .planned_payments_in(month)
        .map(|(concept_id, p)| (category_of(concept_id), p.amount));

    let mut totals = BTreeMap::new();
    for (category, amount) in daily.chain(planned) {
        *totals.entry(category).or_insert(Decimal::ZERO) += amount;
    }
    totals
}
