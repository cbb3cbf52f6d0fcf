//! Strongly-typed identifiers for wallet entities
//!
//! Identifiers are opaque strings so documents written by other clients
//! (which may use timestamps or counters as ids) load unchanged. Ids minted
//! here are time-ordered UUIDs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new time-ordered identifier (v7)
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            /// Wraps an existing identifier string
            pub fn from_string(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid.to_string())
            }
        }
    };
}

// Catalog identifiers
define_id!(CategoryId);
define_id!(ConceptId);

// Ledger identifiers
define_id!(IncomeId);
define_id!(ExpenseId);
define_id!(PlannedExpenseId);
define_id!(PaymentId);

// Planning identifiers
define_id!(BudgetId);
define_id!(GoalId);
define_id!(ContributionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(PaymentId::new(), PaymentId::new());
    }

    #[test]
    fn test_foreign_ids_round_trip() {
        let id: PlannedExpenseId = "1712345678901".parse().unwrap();
        assert_eq!(id.as_str(), "1712345678901");
        assert_eq!(id.to_string(), "1712345678901");
    }

    #[test]
    fn test_uuid_conversion() {
        let uuid = Uuid::new_v4();
        let id = ConceptId::from(uuid);
        assert_eq!(id.as_str(), uuid.to_string());
    }
}
