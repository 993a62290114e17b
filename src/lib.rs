//! Expense Tracker - a personal expense log backed by SQLite
//!
//! This library records dated, categorized expenses in a single SQLite table
//! and answers the usual questions about them: everything newest first, one
//! category, a date range, and totals overall, per category, and per month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, months)
//! - `storage`: SQLite persistence layer
//! - `services`: Validation and business logic
//! - `reports`: Spending and monthly reports
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON, and YAML export
//! - `cli`: Command handlers
//! - `logging`: File logging
//!
//! # Example
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use expense_tracker::models::{ExpenseInput, Money};
//! use expense_tracker::storage::ExpenseStore;
//!
//! # fn main() -> Result<(), expense_tracker::ExpenseError> {
//! let store = ExpenseStore::open("expenses.db")?;
//! let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! store.add(&ExpenseInput::new(date, "Food", Money::from_cents(4250)))?;
//! println!("Total: {}", store.get_total()?);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::ExpenseError;
