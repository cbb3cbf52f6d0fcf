//! Dashboard and calendar DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use domain_planning::{CalendarMark, DueItem, StatusLabel};
use domain_wallet::AppData;

/// A due bill with display names resolved
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DueItemView {
    #[serde(flatten)]
    pub item: DueItem,
    pub concept_name: Option<String>,
    pub status_label: &'static str,
}

impl DueItemView {
    pub fn new(item: DueItem, doc: &AppData) -> Self {
        Self {
            concept_name: doc.concept(&item.concept_id).map(|c| c.name.clone()),
            status_label: item.status.label.display_label(),
            item,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingResponse {
    pub today: NaiveDate,
    pub items: Vec<DueItemView>,
    pub reminders: Vec<DueItemView>,
    pub overdue_count: usize,
    pub total_remaining: Decimal,
}

impl UpcomingResponse {
    pub fn new(today: NaiveDate, items: Vec<DueItem>, reminders: Vec<DueItem>, doc: &AppData) -> Self {
        let overdue_count = items
            .iter()
            .filter(|i| matches!(i.status.label, StatusLabel::Overdue | StatusLabel::Urgent))
            .count();
        let total_remaining = items.iter().map(|i| i.remaining).sum();

        Self {
            today,
            items: items.into_iter().map(|i| DueItemView::new(i, doc)).collect(),
            reminders: reminders.into_iter().map(|i| DueItemView::new(i, doc)).collect(),
            overdue_count,
            total_remaining,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub period: String,
    pub marks: Vec<CalendarMark>,
    pub total_owed: Decimal,
}
