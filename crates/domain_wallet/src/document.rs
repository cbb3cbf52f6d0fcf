//! The wallet aggregate
//!
//! `AppData` is the unit of persistence. Callers load it, apply one change
//! on a copy, and save the whole document back.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{
    BudgetId, CategoryId, ConceptId, ExpenseId, GoalId, IncomeId, PaymentId, PeriodKey,
    PlannedExpenseId,
};
use domain_planning::{Payment, RecurringExpense, NO_REMINDER};

use crate::budget::Budget;
use crate::catalog::{Category, CategoryKind, Concept};
use crate::entries::{DailyExpense, Income};
use crate::error::WalletError;
use crate::savings::{Contribution, SavingsGoal};
use crate::settings::{NotificationDefaults, Settings};

/// The complete wallet state
///
/// Missing collections deserialize as empty so partial documents load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppData {
    pub categories: Vec<Category>,
    pub concepts: Vec<Concept>,
    pub incomes: Vec<Income>,
    /// Daily (one-off) expenses
    pub expenses: Vec<DailyExpense>,
    pub planned_expenses: Vec<RecurringExpense>,
    pub budgets: Vec<Budget>,
    pub savings_goals: Vec<SavingsGoal>,
    pub notification_defaults: NotificationDefaults,
    pub settings: Settings,
}

fn take_by<T>(
    items: &mut Vec<T>,
    matches: impl Fn(&T) -> bool,
    entity: &'static str,
    id: impl std::fmt::Display,
) -> Result<T, WalletError> {
    let position = items
        .iter()
        .position(matches)
        .ok_or_else(|| WalletError::not_found(entity, id))?;
    Ok(items.remove(position))
}

fn require_positive(amount: Decimal, what: &str) -> Result<(), WalletError> {
    if amount <= Decimal::ZERO {
        return Err(WalletError::validation(format!("{} must be greater than zero", what)));
    }
    Ok(())
}

fn require_name(name: &str, what: &str) -> Result<(), WalletError> {
    if name.trim().is_empty() {
        return Err(WalletError::validation(format!("{} name is required", what)));
    }
    Ok(())
}

impl AppData {
    // ------------------------------------------------------------------
    // Lookups
    // ------------------------------------------------------------------

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    pub fn concept(&self, id: &ConceptId) -> Option<&Concept> {
        self.concepts.iter().find(|c| &c.id == id)
    }

    /// Category a concept is filed under
    pub fn category_of(&self, concept_id: &ConceptId) -> Option<&Category> {
        self.concept(concept_id)
            .and_then(|concept| self.category(&concept.category_id))
    }

    pub fn planned_expense(&self, id: &PlannedExpenseId) -> Result<&RecurringExpense, WalletError> {
        self.planned_expenses
            .iter()
            .find(|e| &e.id == id)
            .ok_or_else(|| WalletError::not_found("Planned expense", id))
    }

    fn planned_expense_mut(&mut self, id: &PlannedExpenseId) -> Result<&mut RecurringExpense, WalletError> {
        self.planned_expenses
            .iter_mut()
            .find(|e| &e.id == id)
            .ok_or_else(|| WalletError::not_found("Planned expense", id))
    }

    fn require_concept(&self, id: &ConceptId) -> Result<(), WalletError> {
        self.concept(id)
            .map(|_| ())
            .ok_or_else(|| WalletError::not_found("Concept", id))
    }

    /// Reminder lead time new planned expenses inherit
    pub fn default_reminder_days(&self) -> i32 {
        self.notification_defaults.effective_reminder_days()
    }

    // ------------------------------------------------------------------
    // Catalogs
    // ------------------------------------------------------------------

    pub fn add_category(&mut self, category: Category) -> Result<&Category, WalletError> {
        require_name(&category.name, "Category")?;
        tracing::debug!(category_id = %category.id, "Adding category");
        self.categories.push(category);
        Ok(&self.categories[self.categories.len() - 1])
    }

    /// Removes a category that no concept or budget uses
    pub fn remove_category(&mut self, id: &CategoryId) -> Result<Category, WalletError> {
        if self.concepts.iter().any(|c| &c.category_id == id) {
            return Err(WalletError::InUse {
                entity: "Category",
                id: id.to_string(),
                referenced_by: "concepts",
            });
        }
        if self.budgets.iter().any(|b| &b.category_id == id) {
            return Err(WalletError::InUse {
                entity: "Category",
                id: id.to_string(),
                referenced_by: "budgets",
            });
        }
        take_by(&mut self.categories, |c| &c.id == id, "Category", id)
    }

    pub fn add_concept(&mut self, concept: Concept) -> Result<&Concept, WalletError> {
        require_name(&concept.name, "Concept")?;
        if self.category(&concept.category_id).is_none() {
            return Err(WalletError::not_found("Category", &concept.category_id));
        }
        tracing::debug!(concept_id = %concept.id, "Adding concept");
        self.concepts.push(concept);
        Ok(&self.concepts[self.concepts.len() - 1])
    }

    /// Removes a concept no entry or planned expense points at
    pub fn remove_concept(&mut self, id: &ConceptId) -> Result<Concept, WalletError> {
        let referenced_by = if self.incomes.iter().any(|i| &i.concept_id == id) {
            Some("incomes")
        } else if self.expenses.iter().any(|e| &e.concept_id == id) {
            Some("expenses")
        } else if self.planned_expenses.iter().any(|e| &e.concept_id == id) {
            Some("planned expenses")
        } else {
            None
        };
        if let Some(referenced_by) = referenced_by {
            return Err(WalletError::InUse {
                entity: "Concept",
                id: id.to_string(),
                referenced_by,
            });
        }
        take_by(&mut self.concepts, |c| &c.id == id, "Concept", id)
    }

    // ------------------------------------------------------------------
    // Entries
    // ------------------------------------------------------------------

    pub fn add_income(&mut self, income: Income) -> Result<&Income, WalletError> {
        require_positive(income.amount, "Income amount")?;
        self.require_concept(&income.concept_id)?;
        tracing::debug!(income_id = %income.id, amount = %income.amount, "Adding income");
        self.incomes.push(income);
        Ok(&self.incomes[self.incomes.len() - 1])
    }

    pub fn remove_income(&mut self, id: &IncomeId) -> Result<Income, WalletError> {
        take_by(&mut self.incomes, |i| &i.id == id, "Income", id)
    }

    pub fn add_expense(&mut self, expense: DailyExpense) -> Result<&DailyExpense, WalletError> {
        require_positive(expense.amount, "Expense amount")?;
        self.require_concept(&expense.concept_id)?;
        tracing::debug!(expense_id = %expense.id, amount = %expense.amount, "Adding expense");
        self.expenses.push(expense);
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    pub fn remove_expense(&mut self, id: &ExpenseId) -> Result<DailyExpense, WalletError> {
        take_by(&mut self.expenses, |e| &e.id == id, "Expense", id)
    }

    // ------------------------------------------------------------------
    // Planned expenses
    // ------------------------------------------------------------------

    /// Adds a new planned expense
    ///
    /// New planned expenses start without payments.
    pub fn add_planned_expense(&mut self, expense: RecurringExpense) -> Result<&RecurringExpense, WalletError> {
        expense.validate()?;
        self.require_concept(&expense.concept_id)?;
        if !expense.payments.is_empty() {
            return Err(WalletError::validation("new planned expenses cannot carry payments"));
        }
        if self.planned_expenses.iter().any(|e| e.id == expense.id) {
            return Err(WalletError::validation(format!("planned expense {} already exists", expense.id)));
        }
        tracing::debug!(
            expense_id = %expense.id,
            periods = expense.period_count,
            "Adding planned expense"
        );
        self.planned_expenses.push(expense);
        Ok(&self.planned_expenses[self.planned_expenses.len() - 1])
    }

    /// Replaces a planned expense's schedule, keeping its payments
    pub fn update_planned_expense(
        &mut self,
        id: &PlannedExpenseId,
        definition: RecurringExpense,
    ) -> Result<&RecurringExpense, WalletError> {
        definition.validate()?;
        self.require_concept(&definition.concept_id)?;
        let expense = self.planned_expense_mut(id)?;
        expense.redefine(definition);
        Ok(&*expense)
    }

    /// Checks every planned expense definition, as a whole-document import
    /// must before it is stored
    pub fn validate_planned_expenses(&self) -> Result<(), WalletError> {
        for expense in &self.planned_expenses {
            expense.validate().map_err(|err| {
                WalletError::validation(format!("planned expense {}: {}", expense.id, err))
            })?;
        }
        Ok(())
    }

    pub fn remove_planned_expense(&mut self, id: &PlannedExpenseId) -> Result<RecurringExpense, WalletError> {
        take_by(&mut self.planned_expenses, |e| &e.id == id, "Planned expense", id)
    }

    pub fn record_planned_payment(
        &mut self,
        id: &PlannedExpenseId,
        payment: Payment,
    ) -> Result<&Payment, WalletError> {
        let expense = self.planned_expense_mut(id)?;
        Ok(expense.record_payment(payment)?)
    }

    pub fn remove_planned_payment(
        &mut self,
        id: &PlannedExpenseId,
        payment_id: &PaymentId,
    ) -> Result<Payment, WalletError> {
        let expense = self.planned_expense_mut(id)?;
        Ok(expense.remove_payment(payment_id)?)
    }

    // ------------------------------------------------------------------
    // Budgets
    // ------------------------------------------------------------------

    /// Sets the budget of an expense category for a month, replacing any
    /// existing one
    pub fn set_budget(
        &mut self,
        category_id: &CategoryId,
        period: PeriodKey,
        amount: Decimal,
    ) -> Result<&Budget, WalletError> {
        require_positive(amount, "Budget amount")?;
        let category = self
            .category(category_id)
            .ok_or_else(|| WalletError::not_found("Category", category_id))?;
        if category.kind != CategoryKind::Expense {
            return Err(WalletError::validation("budgets apply to expense categories only"));
        }

        match self
            .budgets
            .iter()
            .position(|b| &b.category_id == category_id && b.period == period)
        {
            Some(index) => {
                self.budgets[index].amount = amount;
                Ok(&self.budgets[index])
            }
            None => {
                self.budgets.push(Budget::new(category_id.clone(), period, amount));
                Ok(&self.budgets[self.budgets.len() - 1])
            }
        }
    }

    pub fn remove_budget(&mut self, id: &BudgetId) -> Result<Budget, WalletError> {
        take_by(&mut self.budgets, |b| &b.id == id, "Budget", id)
    }

    // ------------------------------------------------------------------
    // Savings goals
    // ------------------------------------------------------------------

    pub fn add_savings_goal(&mut self, goal: SavingsGoal) -> Result<&SavingsGoal, WalletError> {
        require_name(&goal.name, "Goal")?;
        require_positive(goal.target_amount, "Goal target")?;
        self.savings_goals.push(goal);
        Ok(&self.savings_goals[self.savings_goals.len() - 1])
    }

    pub fn contribute_to_goal(
        &mut self,
        id: &GoalId,
        contribution: Contribution,
    ) -> Result<&SavingsGoal, WalletError> {
        require_positive(contribution.amount, "Contribution amount")?;
        let goal = self
            .savings_goals
            .iter_mut()
            .find(|g| &g.id == id)
            .ok_or_else(|| WalletError::not_found("Savings goal", id))?;
        goal.contributions.push(contribution);
        Ok(&*goal)
    }

    pub fn remove_savings_goal(&mut self, id: &GoalId) -> Result<SavingsGoal, WalletError> {
        take_by(&mut self.savings_goals, |g| &g.id == id, "Savings goal", id)
    }

    // ------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------

    pub fn set_notification_defaults(&mut self, defaults: NotificationDefaults) -> Result<(), WalletError> {
        if defaults.reminder_days < NO_REMINDER {
            return Err(WalletError::validation("reminder days must be -1 or greater"));
        }
        self.notification_defaults = defaults;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Period filters used by reports
    // ------------------------------------------------------------------

    pub fn incomes_in(&self, month: PeriodKey) -> impl Iterator<Item = &Income> {
        self.incomes.iter().filter(move |i| month.contains(i.date))
    }

    pub fn expenses_in(&self, month: PeriodKey) -> impl Iterator<Item = &DailyExpense> {
        self.expenses.iter().filter(move |e| month.contains(e.date))
    }

    /// Planned payments made during `month`, by payment date, with the
    /// concept of the expense they settle
    pub fn planned_payments_in(&self, month: PeriodKey) -> impl Iterator<Item = (&ConceptId, &Payment)> {
        self.planned_expenses.iter().flat_map(move |expense| {
            expense
                .payments
                .iter()
                .filter(move |p| month.contains(p.date))
                .map(move |p| (&expense.concept_id, p))
        })
    }
}
