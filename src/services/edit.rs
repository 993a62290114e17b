//! Staged expense edits
//!
//! An `ExpenseEdit` holds the original record and a draft of the new field
//! values. The store sees nothing until `commit`; dropping the edit or calling
//! `cancel` leaves the stored expense exactly as it was.

use chrono::NaiveDate;

use crate::error::ExpenseResult;
use crate::models::{Expense, ExpenseInput, Money};

use super::expense::ExpenseService;

/// A pending edit of one expense
#[derive(Debug, Clone)]
pub struct ExpenseEdit {
    original: Expense,
    draft: ExpenseInput,
}

impl ExpenseEdit {
    pub(crate) fn new(original: Expense) -> Self {
        let draft = original.to_input();
        Self { original, draft }
    }

    /// The record as it is stored
    pub fn original(&self) -> &Expense {
        &self.original
    }

    /// The field values that `commit` would write
    pub fn draft(&self) -> &ExpenseInput {
        &self.draft
    }

    /// Replace the draft date
    pub fn set_date(&mut self, date: NaiveDate) -> &mut Self {
        self.draft.date = date;
        self
    }

    /// Replace the draft category; trimmed and validated on commit
    pub fn set_category(&mut self, category: impl Into<String>) -> &mut Self {
        self.draft.category = category.into();
        self
    }

    /// Replace the draft amount; must be positive to commit
    pub fn set_amount(&mut self, amount: Money) -> &mut Self {
        self.draft.amount = amount;
        self
    }

    /// Replace the draft description
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.draft.description = description.into();
        self
    }

    /// Whether the draft differs from the stored record
    pub fn is_modified(&self) -> bool {
        self.draft != self.original.to_input()
    }

    /// Write the draft to the store
    ///
    /// An unmodified draft writes nothing and returns the stored record.
    /// Either way the expense must still exist.
    pub fn commit(self, service: &ExpenseService<'_>) -> ExpenseResult<Expense> {
        if !self.is_modified() {
            return service.require(self.original.id);
        }
        service.update(self.original.id, self.draft)
    }

    /// Abandon the edit, returning the untouched original
    pub fn cancel(self) -> Expense {
        self.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ExpenseStore;

    fn seeded() -> (ExpenseStore, Expense) {
        let store = ExpenseStore::open_in_memory().unwrap();
        let created = ExpenseService::new(&store)
            .create(
                ExpenseInput::new(
                    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                    "Food",
                    Money::from_cents(4250),
                )
                .with_description("Lunch"),
            )
            .unwrap();
        (store, created)
    }

    #[test]
    fn test_commit_writes_draft() {
        let (store, created) = seeded();
        let service = ExpenseService::new(&store);

        let mut edit = service.begin_edit(created.id).unwrap();
        edit.set_amount(Money::from_cents(3900)).set_category("Entertainment");
        assert!(edit.is_modified());

        let updated = edit.commit(&service).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(service.require(created.id).unwrap(), updated);
        assert_eq!(updated.amount.cents(), 3900);
        assert_eq!(updated.description, "Lunch");
    }

    #[test]
    fn test_cancel_keeps_original_record() {
        let (store, created) = seeded();
        let service = ExpenseService::new(&store);

        let mut edit = service.begin_edit(created.id).unwrap();
        edit.set_description("Dinner");
        // The record is still stored while the edit is open
        assert_eq!(service.require(created.id).unwrap(), created);

        let original = edit.cancel();
        assert_eq!(original, created);
        assert_eq!(service.require(created.id).unwrap(), created);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_dropped_edit_changes_nothing() {
        let (store, created) = seeded();
        let service = ExpenseService::new(&store);

        {
            let mut edit = service.begin_edit(created.id).unwrap();
            edit.set_amount(Money::from_cents(1));
        }

        assert_eq!(service.require(created.id).unwrap(), created);
    }

    #[test]
    fn test_invalid_draft_is_rejected_on_commit() {
        let (store, created) = seeded();
        let service = ExpenseService::new(&store);

        let mut edit = service.begin_edit(created.id).unwrap();
        edit.set_amount(Money::zero());

        assert!(edit.commit(&service).unwrap_err().is_validation());
        assert_eq!(service.require(created.id).unwrap(), created);
    }

    #[test]
    fn test_commit_after_concurrent_delete_is_not_found() {
        let (store, created) = seeded();
        let service = ExpenseService::new(&store);

        let mut edit = service.begin_edit(created.id).unwrap();
        edit.set_category("Bills");
        store.delete(created.id).unwrap();

        assert!(edit.commit(&service).unwrap_err().is_not_found());
    }

    #[test]
    fn test_unmodified_commit_returns_original() {
        let (store, created) = seeded();
        let service = ExpenseService::new(&store);

        let edit = service.begin_edit(created.id).unwrap();
        assert!(!edit.is_modified());
        assert_eq!(edit.commit(&service).unwrap(), created);
    }

    #[test]
    fn test_unmodified_commit_of_deleted_expense_is_not_found() {
        let (store, created) = seeded();
        let service = ExpenseService::new(&store);

        let edit = service.begin_edit(created.id).unwrap();
        store.delete(created.id).unwrap();

        assert!(!edit.is_modified());
        assert!(edit.commit(&service).unwrap_err().is_not_found());
    }
}
