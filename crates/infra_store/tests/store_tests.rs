//! Tests for the document stores

use rust_decimal_macros::dec;

use domain_planning::{Frequency, Payment, RecurringExpense};
use domain_wallet::{AppData, DailyExpense};
use infra_store::{DocumentStore, InMemoryStore, JsonFileStore, StoreError};
use test_utils::{assert_json_round_trip, date, load_document, period, SampleWallet, TempDir};

fn populated() -> AppData {
    let mut wallet = SampleWallet::new();
    let plan_id = wallet
        .doc
        .add_planned_expense(
            RecurringExpense::new(wallet.rent.clone(), dec!(8500), period("2024-01"), Frequency::Monthly, 12)
                .with_billing_days(25, 5)
                .with_reminder_days(3),
        )
        .unwrap()
        .id
        .clone();
    wallet
        .doc
        .record_planned_payment(&plan_id, Payment::new(dec!(4250.50), date(2024, 2, 3), period("2024-01")))
        .unwrap();
    wallet
        .doc
        .add_expense(DailyExpense::new(wallet.groceries.clone(), dec!(312.40), date(2024, 2, 7)).with_description("Mercado"))
        .unwrap();
    wallet.doc
}

// ============================================================================
// JSON file store
// ============================================================================

mod json_file_tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_loads_empty_document() {
        let dir = TempDir::new();
        let store = dir.json_store();
        assert_eq!(store.load().await.unwrap(), AppData::default());
    }

    #[tokio::test]
    async fn test_save_then_load_is_lossless() {
        let dir = TempDir::new();
        let store = dir.json_store();
        let doc = populated();
        assert_json_round_trip(&doc);

        store.save(&doc).await.unwrap();
        assert_eq!(store.load().await.unwrap(), doc);
        assert!(!dir.file("iwallet.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_save_creates_parent_directories() {
        let dir = TempDir::new();
        let store = JsonFileStore::new(dir.file("nested/deeper/wallet.json"));
        store.save(&populated()).await.unwrap();
        assert!(dir.file("nested/deeper/wallet.json").exists());
    }

    #[tokio::test]
    async fn test_save_replaces_previous_document() {
        let dir = TempDir::new();
        let store = dir.json_store();
        store.save(&populated()).await.unwrap();
        store.save(&AppData::default()).await.unwrap();
        assert_eq!(load_document(&store).await, AppData::default());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported() {
        let dir = TempDir::new();
        std::fs::write(dir.file("iwallet.json"), "{ not json").unwrap();
        let store = dir.json_store();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert!(!store.health_check().await.healthy);
    }

    #[tokio::test]
    async fn test_blank_file_loads_empty_document() {
        let dir = TempDir::new();
        std::fs::write(dir.file("iwallet.json"), "\n").unwrap();
        assert_eq!(dir.json_store().load().await.unwrap(), AppData::default());
    }

    #[tokio::test]
    async fn test_loads_sparse_client_document() {
        let dir = TempDir::new();
        let json = r#"{
            "categories": [{"id": "c1", "name": "Servicios"}],
            "concepts": [{"id": "k1", "name": "Luz", "categoryId": "c1"}],
            "plannedExpenses": [{
                "id": "p1",
                "conceptId": "k1",
                "amountPerPeriod": 450.5,
                "startPeriod": "2024-02",
                "frequency": "BIMONTHLY",
                "periodCount": 6,
                "cutOffDay": 10,
                "dueDay": 25,
                "payments": [{"id": "x1", "amount": 450.5, "date": "2024-02-20", "period": "2024-02"}]
            }]
        }"#;
        std::fs::write(dir.file("iwallet.json"), json).unwrap();

        let doc = dir.json_store().load().await.unwrap();
        assert_eq!(doc.planned_expenses.len(), 1);
        assert_eq!(doc.planned_expenses[0].frequency, Frequency::Bimonthly);
        assert_eq!(doc.planned_expenses[0].payments[0].amount, dec!(450.5));
        assert_eq!(doc.notification_defaults.reminder_days, 3);
        assert!(doc.incomes.is_empty());
    }
}

// ============================================================================
// In-memory store
// ============================================================================

mod in_memory_tests {
    use super::*;

    #[tokio::test]
    async fn test_starts_empty() {
        let store = InMemoryStore::new();
        assert_eq!(store.load().await.unwrap(), AppData::default());
        assert!(store.health_check().await.healthy);
    }

    #[tokio::test]
    async fn test_save_replaces_document() {
        let store = InMemoryStore::new();
        let doc = populated();
        store.save(&doc).await.unwrap();
        assert_eq!(store.snapshot().await, doc);
    }
}
