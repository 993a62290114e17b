//! Monthly Report
//!
//! Totals for each month of one calendar year.

use crate::error::ExpenseResult;
use crate::models::{Money, Month};
use crate::storage::ExpenseStore;

/// Total for a single month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthTotal {
    pub month: Month,
    pub total: Money,
}

/// Twelve month totals for a year
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub year: i32,
    pub months: Vec<MonthTotal>,
    pub year_total: Money,
}

impl MonthlyReport {
    /// Generate the report for `year`
    pub fn generate(store: &ExpenseStore, year: i32) -> ExpenseResult<Self> {
        let months = Month::all_in_year(year)
            .map(|month| {
                let total = store.get_monthly_total(month.year(), month.month())?;
                Ok(MonthTotal { month, total })
            })
            .collect::<ExpenseResult<Vec<_>>>()?;

        let year_total = months.iter().map(|m| m.total).sum();

        Ok(Self {
            year,
            months,
            year_total,
        })
    }

    /// The month with the highest spending, if anything was spent
    pub fn busiest_month(&self) -> Option<&MonthTotal> {
        self.months
            .iter()
            .filter(|m| m.total.is_positive())
            .max_by_key(|m| m.total)
    }
}
