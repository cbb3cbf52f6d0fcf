//! JSON file store

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use domain_wallet::AppData;

use crate::error::StoreError;
use crate::store::{DocumentStore, StoreHealth};

const STORE_NAME: &str = "json-file";

/// Keeps the document in a single JSON file
///
/// Saves go to a sibling temporary file which is then renamed over the
/// target, so a crash mid-write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "document".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<AppData, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No document yet, starting empty");
                return Ok(AppData::default());
            }
            Err(e) => return Err(StoreError::io(&self.path, e)),
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            warn!("Document file is empty, starting empty");
            return Ok(AppData::default());
        }

        let doc: AppData = serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        debug!(
            planned_expenses = doc.planned_expenses.len(),
            bytes = bytes.len(),
            "Loaded document"
        );
        Ok(doc)
    }

    #[instrument(skip(self, doc), fields(path = %self.path.display()))]
    async fn save(&self, doc: &AppData) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(doc)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io(parent, e))?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, &json)
            .await
            .map_err(|e| StoreError::io(&temp, e))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;

        debug!(bytes = json.len(), "Saved document");
        Ok(())
    }

    async fn health_check(&self) -> StoreHealth {
        match self.load().await {
            Ok(_) => StoreHealth::healthy(STORE_NAME),
            Err(e) => StoreHealth::unhealthy(STORE_NAME, e.to_string()),
        }
    }
}
