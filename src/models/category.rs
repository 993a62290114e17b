//! Expense categories
//!
//! Categories are free-form strings at the data layer. The list below is only
//! what the front end offers by default.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Categories offered out of the box
pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "Food",
    "Transport",
    "Entertainment",
    "Shopping",
    "Bills",
    "Healthcare",
    "Education",
    "Other",
];

/// Sum of all expenses in one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
}

impl CategoryTotal {
    pub fn new(category: impl Into<String>, total: Money) -> Self {
        Self {
            category: category.into(),
            total,
        }
    }
}
