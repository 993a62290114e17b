//! Reports module for the expense tracker
//!
//! Provides the category spending breakdown and per-month totals.

pub mod monthly;
pub mod spending;

pub use monthly::{MonthTotal, MonthlyReport};
pub use spending::{SpendingByCategory, SpendingReport};
