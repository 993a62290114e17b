//! Core data models for the expense tracker
//!
//! This module contains the data structures of the expense domain: the
//! expense record itself, its ID, money amounts, categories, and months.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use category::{CategoryTotal, DEFAULT_CATEGORIES};
pub use expense::{Expense, ExpenseInput};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use month::Month;
