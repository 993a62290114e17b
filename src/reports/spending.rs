//! Spending Report
//!
//! Breaks total spending down by category, largest first.

use crate::error::ExpenseResult;
use crate::models::{CategoryTotal, Money};
use crate::storage::ExpenseStore;

/// Spending in one category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingByCategory {
    /// Category name
    pub category: String,
    /// Total spent
    pub total: Money,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone)]
pub struct SpendingReport {
    /// Categories, largest total first
    pub categories: Vec<SpendingByCategory>,
    /// Total spending across all categories
    pub total_spending: Money,
    /// Number of expenses counted
    pub expense_count: usize,
}

impl SpendingReport {
    /// Generate a spending report over every stored expense
    pub fn generate(store: &ExpenseStore) -> ExpenseResult<Self> {
        let totals = store.get_total_by_category()?;
        let total_spending = store.get_total()?;
        let expense_count = store.count()?;

        Ok(Self::from_totals(totals, total_spending, expense_count))
    }

    fn from_totals(totals: Vec<CategoryTotal>, total_spending: Money, expense_count: usize) -> Self {
        let categories = totals
            .into_iter()
            .map(|t| SpendingByCategory {
                percentage: t.total.percentage_of(total_spending),
                category: t.category,
                total: t.total,
            })
            .collect();

        Self {
            categories,
            total_spending,
            expense_count,
        }
    }

    /// The `n` largest categories
    pub fn top(&self, n: usize) -> &[SpendingByCategory] {
        &self.categories[..n.min(self.categories.len())]
    }

    /// Combined total of the categories beyond the first `n`
    pub fn remainder_after(&self, n: usize) -> Money {
        self.categories.iter().skip(n).map(|c| c.total).sum()
    }

    /// Whether there is anything to report
    pub fn is_empty(&self) -> bool {
        self.expense_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseInput;
    use chrono::NaiveDate;

    fn add(store: &ExpenseStore, category: &str, cents: i64) {
        store
            .add(&ExpenseInput::new(
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                category,
                Money::from_cents(cents),
            ))
            .unwrap();
    }

    #[test]
    fn test_empty_report() {
        let store = ExpenseStore::open_in_memory().unwrap();
        let report = SpendingReport::generate(&store).unwrap();

        assert!(report.is_empty());
        assert!(report.top(5).is_empty());
        assert_eq!(report.total_spending, Money::zero());
    }

    #[test]
    fn test_percentages_and_top() {
        let store = ExpenseStore::open_in_memory().unwrap();
        add(&store, "Food", 5000);
        add(&store, "Bills", 3000);
        add(&store, "Food", 1000);
        add(&store, "Transport", 1000);

        let report = SpendingReport::generate(&store).unwrap();

        assert_eq!(report.expense_count, 4);
        assert_eq!(report.total_spending.cents(), 10000);
        assert_eq!(report.categories[0].category, "Food");
        assert!((report.categories[0].percentage - 60.0).abs() < 1e-9);

        let top = report.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[1].category, "Bills");
        assert_eq!(report.remainder_after(2).cents(), 1000);

        let sum: Money = report.categories.iter().map(|c| c.total).sum();
        assert_eq!(sum, report.total_spending);
    }
}
