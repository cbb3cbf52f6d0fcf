//! Classification catalogs
//!
//! Every income, expense and planned expense points at a concept, and every
//! concept belongs to a category.

use serde::{Deserialize, Serialize};

use core_kernel::{CategoryId, ConceptId};

/// Whether a category classifies money going out or coming in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryKind {
    #[default]
    Expense,
    Income,
}

/// A top-level grouping such as "Housing" or "Salary"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub kind: CategoryKind,
    /// Display color as stored by the client, e.g. `#4f46e5`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// A specific item within a category, e.g. "Rent" under "Housing"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    pub id: ConceptId,
    pub name: String,
    pub category_id: CategoryId,
}

impl Concept {
    pub fn new(name: impl Into<String>, category_id: CategoryId) -> Self {
        Self {
            id: ConceptId::new(),
            name: name.into(),
            category_id,
        }
    }
}
