//! In-memory store

use async_trait::async_trait;
use tokio::sync::RwLock;

use domain_wallet::AppData;

use crate::error::StoreError;
use crate::store::{DocumentStore, StoreHealth};

/// Holds the document in memory; nothing survives a restart
#[derive(Debug, Default)]
pub struct InMemoryStore {
    doc: RwLock<AppData>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: AppData) -> Self {
        Self {
            doc: RwLock::new(doc),
        }
    }

    /// Copy of the current document
    pub async fn snapshot(&self) -> AppData {
        self.doc.read().await.clone()
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn load(&self) -> Result<AppData, StoreError> {
        Ok(self.snapshot().await)
    }

    async fn save(&self, doc: &AppData) -> Result<(), StoreError> {
        *self.doc.write().await = doc.clone();
        Ok(())
    }

    async fn health_check(&self) -> StoreHealth {
        StoreHealth::healthy("in-memory")
    }
}
