//! Tests for the identifier newtypes

use std::collections::BTreeSet;

use core_kernel::{CategoryId, ConceptId, PaymentId, PlannedExpenseId};
use uuid::Uuid;

#[test]
fn test_new_ids_are_unique_uuids() {
    let a = PlannedExpenseId::new();
    let b = PlannedExpenseId::new();
    assert_ne!(a, b);
    assert!(Uuid::parse_str(a.as_str()).is_ok());
}

#[test]
fn test_new_ids_sort_by_creation() {
    let ids: Vec<PaymentId> = (0..5)
        .map(|_| {
            std::thread::sleep(std::time::Duration::from_millis(2));
            PaymentId::new()
        })
        .collect();
    let sorted: Vec<PaymentId> = ids.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
    assert_eq!(ids, sorted);
}

#[test]
fn test_foreign_ids_kept_verbatim() {
    let id: ConceptId = "1712345678901".parse().unwrap();
    assert_eq!(id.as_str(), "1712345678901");
    assert_eq!(id.to_string(), "1712345678901");
}

#[test]
fn test_serializes_as_plain_string() {
    let id = CategoryId::from("cat-7");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"cat-7\"");
    let back: CategoryId = serde_json::from_str("\"cat-7\"").unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_from_uuid() {
    let uuid = Uuid::new_v4();
    assert_eq!(PlannedExpenseId::from(uuid).as_str(), uuid.to_string());
}
