//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! iWallet test suite.
//!
//! # Modules
//!
//! - `fixtures`: Dates, periods and a pre-populated wallet document
//! - `builders`: Builder patterns for planned expenses
//! - `store`: Temporary document files and seeded stores
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod store;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use store::*;
pub use assertions::*;
pub use generators::*;
