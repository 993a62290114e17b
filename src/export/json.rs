//! JSON Export functionality
//!
//! Exports every expense to JSON with schema versioning.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};
use crate::storage::ExpenseStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses, newest first
    pub expenses: Vec<Expense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of expenses
    pub expense_count: usize,

    /// Sum of all amounts, in cents
    pub total: Money,

    /// Earliest expense date
    pub earliest_expense: Option<String>,

    /// Latest expense date
    pub latest_expense: Option<String>,
}

impl FullExport {
    /// Create a new full export from the store
    pub fn from_store(store: &ExpenseStore) -> ExpenseResult<Self> {
        let expenses = store.get_all()?;
        let total = store.get_total()?;

        // get_all is newest first
        let latest_expense = expenses.first().map(|e| e.date.to_string());
        let earliest_expense = expenses.last().map(|e| e.date.to_string());

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata: ExportMetadata {
                expense_count: expenses.len(),
                total,
                earliest_expense,
                latest_expense,
            },
            expenses,
        })
    }
}

/// Export every expense to JSON
pub fn export_full_json<W: Write>(
    store: &ExpenseStore,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = FullExport::from_store(store)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))
}
