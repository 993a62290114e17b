//! Expense service
//!
//! Business rules on top of the store: input normalization and validation,
//! lookups that must succeed, and filtered listing.

use chrono::NaiveDate;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{CategoryTotal, Expense, ExpenseId, ExpenseInput, Money, Month};
use crate::storage::ExpenseStore;

use super::edit::ExpenseEdit;

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a ExpenseStore,
}

/// Options for filtering expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Filter by exact category
    pub category: Option<String>,
    /// Filter by date range start (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Maximum number of expenses to return
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Only expenses on or after `start`
    pub fn since(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Only expenses on or before `end`
    pub fn until(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(store: &'a ExpenseStore) -> Self {
        Self { store }
    }

    /// Validate and record a new expense
    pub fn create(&self, input: ExpenseInput) -> ExpenseResult<Expense> {
        let input = normalize(input);
        validate(&input)?;

        let id = self.store.add(&input)?;
        tracing::info!(%id, category = %input.category, amount = %input.amount, "Created expense");

        Ok(input.into_expense(id))
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> ExpenseResult<Option<Expense>> {
        self.store.get_by_id(id)
    }

    /// Get an expense by ID, failing with `NotFound` when it is absent
    pub fn require(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        self.store
            .get_by_id(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))
    }

    /// Find an expense by an ID string such as "12" or "#12"
    pub fn find(&self, identifier: &str) -> ExpenseResult<Option<Expense>> {
        match identifier.parse::<ExpenseId>() {
            Ok(id) => self.store.get_by_id(id),
            Err(_) => Ok(None),
        }
    }

    /// List expenses, newest first, with optional filtering
    pub fn list(&self, filter: ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        let mut expenses = if let Some(category) = &filter.category {
            self.store.get_by_category(category)?
        } else if let (Some(start), Some(end)) = (filter.start_date, filter.end_date) {
            self.store.get_by_date_range(start, end)?
        } else {
            self.store.get_all()?
        };

        if let Some(start) = filter.start_date {
            expenses.retain(|e| e.date >= start);
        }
        if let Some(end) = filter.end_date {
            expenses.retain(|e| e.date <= end);
        }

        if let Some(limit) = filter.limit {
            expenses.truncate(limit);
        }

        Ok(expenses)
    }

    /// Validate and replace every field of an existing expense
    pub fn update(&self, id: ExpenseId, input: ExpenseInput) -> ExpenseResult<Expense> {
        let input = normalize(input);
        validate(&input)?;

        if !self.store.update(id, &input)? {
            return Err(ExpenseError::expense_not_found(id.to_string()));
        }
        tracing::info!(%id, "Updated expense");

        Ok(input.into_expense(id))
    }

    /// Delete an expense, returning the removed record
    pub fn delete(&self, id: ExpenseId) -> ExpenseResult<Expense> {
        let expense = self.require(id)?;
        self.store.delete(id)?;
        tracing::info!(%id, "Deleted expense");
        Ok(expense)
    }

    /// Stage an edit of an existing expense; nothing is written until commit
    pub fn begin_edit(&self, id: ExpenseId) -> ExpenseResult<ExpenseEdit> {
        Ok(ExpenseEdit::new(self.require(id)?))
    }

    /// Total of all expenses
    pub fn total(&self) -> ExpenseResult<Money> {
        self.store.get_total()
    }

    /// Total of expenses in one calendar month
    pub fn total_for_month(&self, month: Month) -> ExpenseResult<Money> {
        self.store.get_monthly_total(month.year(), month.month())
    }

    /// Totals per category, largest first
    pub fn totals_by_category(&self) -> ExpenseResult<Vec<CategoryTotal>> {
        self.store.get_total_by_category()
    }

    /// Categories currently present in the store
    pub fn categories_in_use(&self) -> ExpenseResult<Vec<String>> {
        self.store.categories_in_use()
    }
}

fn normalize(mut input: ExpenseInput) -> ExpenseInput {
    input.category = input.category.trim().to_string();
    input.description = input.description.trim().to_string();
    input
}

fn validate(input: &ExpenseInput) -> ExpenseResult<()> {
    if input.category.is_empty() {
        return Err(ExpenseError::Validation("Category cannot be empty".into()));
    }
    if !input.amount.is_positive() {
        return Err(ExpenseError::Validation(format!(
            "Amount must be positive, got {}",
            input.amount
        )));
    }
    Ok(())
}
