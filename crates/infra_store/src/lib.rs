//! Infrastructure Storage Layer
//!
//! The wallet is a single JSON document. This crate loads and saves it
//! whole, hiding where it lives from the API layer.
//!
//! # Stores
//!
//! - [`JsonFileStore`]: one file on disk, replaced atomically on save
//! - [`InMemoryStore`]: a document held in memory, for tests and demos
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::{DocumentStore, JsonFileStore};
//!
//! let store = JsonFileStore::new("iwallet.json");
//! let mut doc = store.load().await?;
//! doc.add_income(income)?;
//! store.save(&doc).await?;
//! ```

pub mod error;
pub mod store;
pub mod file;
pub mod memory;

pub use error::StoreError;
pub use store::{DocumentStore, StoreHealth};
pub use file::JsonFileStore;
pub use memory::InMemoryStore;
