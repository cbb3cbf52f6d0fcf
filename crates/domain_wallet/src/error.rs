//! Wallet domain errors

use thiserror::Error;

use domain_planning::PlanningError;

/// Errors that can occur when changing the wallet document
#[derive(Debug, Error, PartialEq)]
pub enum WalletError {
    /// Referenced entity does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Entity cannot be removed while others reference it
    #[error("{entity} {id} is still referenced by {referenced_by}")]
    InUse {
        entity: &'static str,
        id: String,
        referenced_by: &'static str,
    },

    /// Input failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Planned expense rule violated
    #[error(transparent)]
    Planning(#[from] PlanningError),
}

impl WalletError {
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        WalletError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        WalletError::Validation(message.into())
    }

    /// Checks if this error indicates a missing entity
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            WalletError::NotFound { .. } | WalletError::Planning(PlanningError::PaymentNotFound(_))
        )
    }
}
