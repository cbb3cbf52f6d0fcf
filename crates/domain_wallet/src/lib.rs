//! Wallet Domain - The Single-Document Finance Ledger
//!
//! The whole wallet is one aggregate, [`AppData`], persisted as a single JSON
//! document. Every change is made on a copy of the document which is then
//! saved in full; there are no partial updates.
//!
//! # Contents
//!
//! - **Catalogs**: categories (expense or income) and the concepts filed
//!   under them
//! - **Entries**: incomes and daily expenses
//! - **Planned expenses**: recurring bills from `domain_planning`
//! - **Budgets**: a monthly limit per expense category
//! - **Savings goals**: targets funded by contributions
//! - **Reports**: monthly income, spending and budget usage

pub mod catalog;
pub mod entries;
pub mod budget;
pub mod savings;
pub mod settings;
pub mod document;
pub mod report;
pub mod error;

pub use catalog::{Category, CategoryKind, Concept};
pub use entries::{Income, DailyExpense};
pub use budget::{Budget, BudgetState, BudgetUsage};
pub use savings::{SavingsGoal, Contribution, GoalProgress};
pub use settings::{NotificationDefaults, Settings};
pub use document::AppData;
pub use report::{MonthlyReport, CategorySpending};
pub use error::WalletError;
