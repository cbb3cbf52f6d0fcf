//! Integration Tests for iWallet
//!
//! These tests verify cross-crate workflows: a wallet document persisted
//! through the JSON file store while planned expenses move through their
//! lifecycle over several months.

use rust_decimal_macros::dec;

use domain_planning::{classify_status, upcoming_dues, Frequency, Payment, Priority, StatusLabel};
use domain_wallet::{DailyExpense, Income, MonthlyReport};
use infra_store::DocumentStore;
use test_utils::{
    assert_fully_settled, assert_status, date, period, RecurringExpenseBuilder, SampleWallet, TempDir,
};

mod card_statement_lifecycle {
    use super::*;

    /// A card with cutoff on the 20th and payment on the 5th of the next
    /// month, paid in two installments, saved and reloaded between steps
    #[tokio::test]
    async fn test_statement_paid_in_installments() {
        let dir = TempDir::new();
        let store = dir.json_store();

        let mut wallet = SampleWallet::new();
        let card = RecurringExpenseBuilder::new()
            .concept(wallet.electricity.clone())
            .starting("2024-03")
            .count(2)
            .amount(dec!(3000))
            .billing_days(20, 5)
            .reminder(5)
            .build();
        let id = wallet.doc.add_planned_expense(card).unwrap().id.clone();
        store.save(&wallet.doc).await.unwrap();

        // Before the window opens
        let doc = store.load().await.unwrap();
        let expense = doc.planned_expense(&id).unwrap();
        assert_status(&classify_status(expense, date(2024, 3, 15)), StatusLabel::Current, Priority::Low);

        // First installment
        let mut doc = store.load().await.unwrap();
        doc.record_planned_payment(&id, Payment::new(dec!(1000), date(2024, 3, 28), period("2024-03")))
            .unwrap();
        store.save(&doc).await.unwrap();

        let doc = store.load().await.unwrap();
        let expense = doc.planned_expense(&id).unwrap();
        assert_status(&classify_status(expense, date(2024, 4, 1)), StatusLabel::Partial, Priority::High);
        assert_status(&classify_status(expense, date(2024, 4, 6)), StatusLabel::Urgent, Priority::High);

        // Settle March, the April statement becomes next
        let mut doc = store.load().await.unwrap();
        doc.record_planned_payment(&id, Payment::new(dec!(2000), date(2024, 4, 6), period("2024-03")))
            .unwrap();
        store.save(&doc).await.unwrap();

        let doc = store.load().await.unwrap();
        let dues = upcoming_dues(&doc.planned_expenses, date(2024, 4, 6));
        assert_eq!(dues[0].period, period("2024-04"));
        assert_eq!(dues[0].due_date, date(2024, 5, 5));
        assert_eq!(dues[0].status.label, StatusLabel::Current);

        // Last statement
        let mut doc = store.load().await.unwrap();
        doc.record_planned_payment(&id, Payment::new(dec!(3000), date(2024, 5, 2), period("2024-04")))
            .unwrap();
        store.save(&doc).await.unwrap();

        let doc = store.load().await.unwrap();
        let expense = doc.planned_expense(&id).unwrap();
        assert_fully_settled(expense);
        assert_eq!(classify_status(expense, date(2030, 1, 1)).label, StatusLabel::Paid);
    }
}

mod monthly_close {
    use super::*;

    #[tokio::test]
    async fn test_month_of_activity_survives_reload() {
        let dir = TempDir::new();
        let store = dir.json_store();

        let mut wallet = SampleWallet::new();
        wallet
            .doc
            .add_income(Income::new(wallet.paycheck.clone(), dec!(32000), date(2024, 6, 15)))
            .unwrap();
        wallet
            .doc
            .add_expense(DailyExpense::new(wallet.groceries.clone(), dec!(2450.75), date(2024, 6, 9)))
            .unwrap();
        let rent = wallet
            .doc
            .add_planned_expense(
                RecurringExpenseBuilder::new()
                    .concept(wallet.rent.clone())
                    .starting("2024-06")
                    .frequency(Frequency::Monthly)
                    .amount(dec!(12000))
                    .build(),
            )
            .unwrap()
            .id
            .clone();
        wallet
            .doc
            .record_planned_payment(&rent, Payment::new(dec!(12000), date(2024, 6, 1), period("2024-06")))
            .unwrap();
        wallet.doc.set_budget(&wallet.food, period("2024-06"), dec!(3000)).unwrap();
        store.save(&wallet.doc).await.unwrap();

        let reloaded = store.load().await.unwrap();
        assert_eq!(reloaded, wallet.doc);

        let report = MonthlyReport::build(&reloaded, period("2024-06"));
        assert_eq!(report.total_spent, dec!(14450.75));
        assert_eq!(report.net_balance, dec!(17549.25));
        assert_eq!(report.spending_by_category[0].name, "Housing");
        assert_eq!(report.budget_usage[0].spent, dec!(2450.75));
    }
}
