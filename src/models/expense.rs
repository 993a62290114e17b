//! Expense model
//!
//! An expense is one dated, categorized amount with an optional free-form
//! description. `ExpenseInput` carries every field except the ID and is what
//! callers hand to the store for inserts and full-replacement updates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;

/// A stored expense record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique ID assigned by the store
    pub id: ExpenseId,

    /// Day the money was spent
    pub date: NaiveDate,

    /// Free-form category label
    pub category: String,

    /// Amount spent
    pub amount: Money,

    /// Optional description (empty when absent)
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// The editable fields of this expense
    pub fn to_input(&self) -> ExpenseInput {
        ExpenseInput {
            date: self.date,
            category: self.category.clone(),
            amount: self.amount,
            description: self.description.clone(),
        }
    }

    /// Whether a description was recorded
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

/// All fields of an expense except its ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseInput {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Money,
    #[serde(default)]
    pub description: String,
}

impl ExpenseInput {
    /// Create input with an empty description
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: Money) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            description: String::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach an ID, producing the record as the store would return it
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            date: self.date,
            category: self.category,
            amount: self.amount,
            description: self.description,
        }
    }
}
