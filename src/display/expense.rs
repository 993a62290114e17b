//! Expense display formatting
//!
//! Formats expenses for terminal display as tables and detail blocks.

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::Expense;

use super::truncate;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

/// Options for rendering amounts and dates
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            date_format: "%Y-%m-%d".into(),
        }
    }
}

impl From<&Settings> for DisplayOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }
}

impl DisplayOptions {
    /// Render a date with the configured format
    ///
    /// Formats that cannot render a plain date (time fields, bad specifiers)
    /// fall back to `YYYY-MM-DD`.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut out = String::new();
        match write!(out, "{}", date.format(&self.date_format)) {
            Ok(()) => out,
            Err(_) => date.to_string(),
        }
    }
}

/// Format a list of expenses as a table
pub fn format_expense_list(expenses: &[Expense], options: &DisplayOptions) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.to_string(),
        date: options.format_date(e.date),
        category: e.category.clone(),
        amount: e.amount.format_with_symbol(&options.currency_symbol),
        description: truncate(&e.description, 40),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::sharp())
        .modify(Columns::single(3), Alignment::right());

    format!("{}\n", table)
}

/// Format expense details for display
pub fn format_expense_details(expense: &Expense, options: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!("Date:        {}\n", options.format_date(expense.date)));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&options.currency_symbol)
    ));

    if expense.has_description() {
        output.push_str(&format!("Description: {}\n", expense.description));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, ExpenseInput, Money};
    use chrono::NaiveDate;

    fn expense(id: i64, description: &str) -> Expense {
        ExpenseInput::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            "Food",
            Money::from_cents(4250),
        )
        .with_description(description)
        .into_expense(ExpenseId::from_raw(id))
    }

    #[test]
    fn test_empty_list() {
        let output = format_expense_list(&[], &DisplayOptions::default());
        assert_eq!(output, "No expenses found.\n");
    }

    #[test]
    fn test_list_contains_fields() {
        let output = format_expense_list(&[expense(1, "Lunch")], &DisplayOptions::default());

        assert!(output.contains("ID"));
        assert!(output.contains("2024-01-15"));
        assert!(output.contains("Food"));
        assert!(output.contains("$42.50"));
        assert!(output.contains("Lunch"));
    }

    #[test]
    fn test_details_with_custom_options() {
        let options = DisplayOptions {
            currency_symbol: "€".into(),
            date_format: "%d/%m/%Y".into(),
        };
        let output = format_expense_details(&expense(3, ""), &options);

        assert!(output.contains("Expense:     3"));
        assert!(output.contains("15/01/2024"));
        assert!(output.contains("€42.50"));
        assert!(!output.contains("Description"));
    }

    #[test]
    fn test_unrenderable_date_format_falls_back_to_iso() {
        let options = DisplayOptions {
            date_format: "%Y-%m-%d %H:%M".into(),
            ..Default::default()
        };

        let output = format_expense_list(&[expense(1, "Lunch")], &options);
        assert!(output.contains("2024-01-15"));

        let details = format_expense_details(&expense(1, "Lunch"), &options);
        assert!(details.contains("Date:        2024-01-15\n"));
    }
}
