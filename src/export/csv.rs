//! CSV Export functionality
//!
//! Exports expenses to spreadsheet-compatible CSV with decimal amounts.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::storage::ExpenseStore;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Description")]
    description: &'a str,
}

impl<'a> From<&'a Expense> for CsvRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            id: expense.id.as_raw(),
            date: expense.date.to_string(),
            category: &expense.category,
            amount: expense.amount.to_decimal_string(),
            description: &expense.description,
        }
    }
}

/// Export all expenses to CSV, newest first
pub fn export_expenses_csv<W: Write>(store: &ExpenseStore, writer: W) -> ExpenseResult<()> {
    let expenses = store.get_all()?;
    write_expenses_csv(&expenses, writer)
}

/// Write the given expenses as CSV
pub fn write_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    if expenses.is_empty() {
        // serialize() emits headers with the first record only
        csv_writer
            .write_record(["ID", "Date", "Category", "Amount", "Description"])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    for expense in expenses {
        csv_writer
            .serialize(CsvRow::from(expense))
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
