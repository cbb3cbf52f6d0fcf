//! The storage port

use async_trait::async_trait;
use serde::Serialize;

use domain_wallet::AppData;

use crate::error::StoreError;

/// Outcome of a store health probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreHealth {
    pub store: &'static str,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StoreHealth {
    pub fn healthy(store: &'static str) -> Self {
        Self {
            store,
            healthy: true,
            message: None,
        }
    }

    pub fn unhealthy(store: &'static str, message: impl Into<String>) -> Self {
        Self {
            store,
            healthy: false,
            message: Some(message.into()),
        }
    }
}

/// Loads and saves the whole wallet document
///
/// Implementations never merge: `save` replaces whatever was stored.
/// Callers that read, modify and write must serialize those cycles
/// themselves.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Loads the document, or an empty one if nothing has been saved yet
    async fn load(&self) -> Result<AppData, StoreError>;

    /// Replaces the stored document
    async fn save(&self, doc: &AppData) -> Result<(), StoreError>;

    /// Checks the store can be read
    async fn health_check(&self) -> StoreHealth;
}
