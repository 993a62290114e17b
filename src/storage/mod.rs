//! Storage layer for the expense tracker
//!
//! Provides the SQLite-backed expense store along with its embedded schema
//! migrations.

pub mod expenses;
pub mod schema;

pub use expenses::ExpenseStore;
pub use schema::SCHEMA_VERSION;

use crate::config::paths::ExpensePaths;
use crate::error::ExpenseError;

/// Open the store at the configured database location
pub fn open_store(paths: &ExpensePaths) -> Result<ExpenseStore, ExpenseError> {
    paths.ensure_directories()?;
    ExpenseStore::open(paths.database_file())
}
