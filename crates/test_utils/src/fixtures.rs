//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the wallet.
//! These fixtures are designed to be consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{CategoryId, ConceptId, FixedClock, PeriodKey};
use domain_wallet::{AppData, Category, CategoryKind, Concept};

/// Shorthand for a calendar date
///
/// # Panics
///
/// Panics on an impossible date; fixtures are expected to be valid.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Shorthand for a `YYYY-MM` period
pub fn period(key: &str) -> PeriodKey {
    key.parse().expect("valid fixture period")
}

/// A clock stopped at the given date
pub fn clock_at(year: i32, month: u32, day: u32) -> FixedClock {
    FixedClock(date(year, month, day))
}

/// A document with a small, predictable catalog
///
/// Categories: Housing and Food (expense), Salary (income).
/// Concepts: Rent and Electricity under Housing, Groceries under Food,
/// Paycheck under Salary.
#[derive(Debug, Clone)]
pub struct SampleWallet {
    pub doc: AppData,
    pub housing: CategoryId,
    pub food: CategoryId,
    pub salary: CategoryId,
    pub rent: ConceptId,
    pub electricity: ConceptId,
    pub groceries: ConceptId,
    pub paycheck: ConceptId,
}

impl SampleWallet {
    pub fn new() -> Self {
        let mut doc = AppData::default();

        let housing = add_category(&mut doc, Category::new("Housing", CategoryKind::Expense).with_color("#4f46e5"));
        let food = add_category(&mut doc, Category::new("Food", CategoryKind::Expense).with_color("#16a34a"));
        let salary = add_category(&mut doc, Category::new("Salary", CategoryKind::Income));

        let rent = add_concept(&mut doc, "Rent", &housing);
        let electricity = add_concept(&mut doc, "Electricity", &housing);
        let groceries = add_concept(&mut doc, "Groceries", &food);
        let paycheck = add_concept(&mut doc, "Paycheck", &salary);

        Self {
            doc,
            housing,
            food,
            salary,
            rent,
            electricity,
            groceries,
            paycheck,
        }
    }
}

impl Default for SampleWallet {
    fn default() -> Self {
        Self::new()
    }
}

fn add_category(doc: &mut AppData, category: Category) -> CategoryId {
    doc.add_category(category).expect("fixture category").id.clone()
}

fn add_concept(doc: &mut AppData, name: &str, category: &CategoryId) -> ConceptId {
    doc.add_concept(Concept::new(name, category.clone()))
        .expect("fixture concept")
        .id
        .clone()
}
