//! Income and daily expense DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use core_kernel::ConceptId;

/// Body shared by incomes and daily expenses
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequest {
    #[validate(length(min = 1, message = "concept is required"))]
    pub concept_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[validate(length(max = 200))]
    pub description: Option<String>,
}

impl EntryRequest {
    pub fn concept(&self) -> ConceptId {
        ConceptId::from(self.concept_id.as_str())
    }
}
