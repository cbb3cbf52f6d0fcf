//! Storage Test Utilities
//!
//! Provides throwaway document files and pre-seeded stores for tests that
//! exercise persistence.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use domain_wallet::AppData;
use infra_store::{DocumentStore, InMemoryStore, JsonFileStore};

/// A scratch directory for document files, removed on drop
pub struct TempDir {
    inner: tempfile::TempDir,
}

impl TempDir {
    pub fn new() -> Self {
        let inner = tempfile::Builder::new()
            .prefix("iwallet-test-")
            .tempdir()
            .expect("create temp dir");
        Self { inner }
    }

    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Path of a file inside the directory
    pub fn file(&self, name: &str) -> PathBuf {
        self.inner.path().join(name)
    }

    /// A JSON file store writing to `iwallet.json` in this directory
    pub fn json_store(&self) -> JsonFileStore {
        JsonFileStore::new(self.file("iwallet.json"))
    }
}

impl Default for TempDir {
    fn default() -> Self {
        Self::new()
    }
}

/// An in-memory store already holding `doc`
pub fn seeded_store(doc: AppData) -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::with_document(doc))
}

/// Loads a store's document, panicking on failure
pub async fn load_document(store: &dyn DocumentStore) -> AppData {
    store.load().await.expect("document loads")
}
