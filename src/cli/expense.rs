//! Expense CLI commands
//!
//! Implements the commands for recording, browsing, and summarizing expenses.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{
    format_expense_details, format_expense_list, format_monthly_report, format_spending_report,
    DisplayOptions,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseInput, Money, Month};
use crate::reports::{MonthlyReport, SpendingReport};
use crate::services::{ExpenseFilter, ExpenseService};
use crate::storage::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "42.50" or "$42.50")
        amount: String,
        /// Category (defaults to the configured default category)
        #[arg(short, long)]
        category: Option<String>,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-text description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Start date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Maximum number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show one expense
    Show {
        /// Expense ID
        id: String,
    },

    /// Change fields of an existing expense
    Edit {
        /// Expense ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Show total spending
    Total {
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show spending by category
    Summary {
        /// Number of categories to list
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Show spending per month of a year
    Monthly {
        /// Year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// List categories and the ones in use
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(store);
    let options = DisplayOptions::from(settings);
    let symbol = &options.currency_symbol;

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date_or_today(date.as_deref())?;
            let category = category.unwrap_or_else(|| settings.default_category.clone());

            let mut input = ExpenseInput::new(date, category, amount);
            if let Some(description) = description {
                input = input.with_description(description);
            }

            let expense = service.create(input)?;
            println!(
                "Added expense #{}: {} {} on {}",
                expense.id,
                expense.amount.format_with_symbol(symbol),
                expense.category,
                options.format_date(expense.date)
            );
            if !settings.is_known_category(&expense.category) {
                println!(
                    "Note: '{}' is not one of the configured categories",
                    expense.category
                );
            }
        }

        ExpenseCommands::List {
            category,
            from,
            to,
            limit,
        } => {
            let mut filter = ExpenseFilter::new();
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(from) = from {
                filter = filter.since(parse_date(&from)?);
            }
            if let Some(to) = to {
                filter = filter.until(parse_date(&to)?);
            }
            if let Some(limit) = limit {
                filter = filter.limit(limit);
            }

            let expenses = service.list(filter)?;
            print!("{}", format_expense_list(&expenses, &options));
        }

        ExpenseCommands::Show { id } => {
            let expense = service
                .find(&id)?
                .ok_or_else(|| ExpenseError::expense_not_found(&id))?;
            print!("{}", format_expense_details(&expense, &options));
        }

        ExpenseCommands::Edit {
            id,
            amount,
            category,
            date,
            description,
        } => {
            let expense = service
                .find(&id)?
                .ok_or_else(|| ExpenseError::expense_not_found(&id))?;

            let mut edit = service.begin_edit(expense.id)?;
            if let Some(amount) = amount {
                edit.set_amount(parse_amount(&amount)?);
            }
            if let Some(category) = category {
                edit.set_category(category);
            }
            if let Some(date) = date {
                edit.set_date(parse_date(&date)?);
            }
            if let Some(description) = description {
                edit.set_description(description);
            }

            if !edit.is_modified() {
                edit.cancel();
                println!("No changes made to expense #{}", expense.id);
                return Ok(());
            }

            let updated = edit.commit(&service)?;
            println!("Updated expense #{}", updated.id);
            print!("{}", format_expense_details(&updated, &options));
        }

        ExpenseCommands::Delete { id, force } => {
            let expense = service
                .find(&id)?
                .ok_or_else(|| ExpenseError::expense_not_found(&id))?;

            if !force {
                println!("About to delete expense:");
                print!("{}", format_expense_details(&expense, &options));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(expense.id)?;
            println!(
                "Deleted expense #{}: {} {}",
                deleted.id,
                deleted.amount.format_with_symbol(symbol),
                deleted.category
            );
        }

        ExpenseCommands::Total { month } => match month {
            Some(month) => {
                let month: Month = month.parse()?;
                let total = service.total_for_month(month)?;
                println!("Total for {}: {}", month, total.format_with_symbol(symbol));
            }
            None => {
                let total = service.total()?;
                println!("Total: {}", total.format_with_symbol(symbol));
            }
        },

        ExpenseCommands::Summary { top } => {
            let report = SpendingReport::generate(store)?;
            let top_n = top.unwrap_or(settings.summary_top_n);
            print!("{}", format_spending_report(&report, top_n, &options));
        }

        ExpenseCommands::Monthly { year } => {
            let year = year.unwrap_or_else(|| Month::current().year());
            let report = MonthlyReport::generate(store, year)?;
            print!("{}", format_monthly_report(&report, &options));
        }

        ExpenseCommands::Categories => {
            let in_use = service.categories_in_use()?;

            println!("Categories:");
            for category in &settings.categories {
                let marker = if in_use.contains(category) { "*" } else { " " };
                println!("  {} {}", marker, category);
            }

            let custom: Vec<&String> = in_use
                .iter()
                .filter(|c| !settings.is_known_category(c))
                .collect();
            if !custom.is_empty() {
                println!();
                println!("Also in use:");
                for category in custom {
                    println!("  * {}", category);
                }
            }
        }
    }

    Ok(())
}

fn parse_amount(amount: &str) -> ExpenseResult<Money> {
    Money::parse(amount).map_err(|e| {
        ExpenseError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '42.50'. Error: {}",
            amount, e
        ))
    })
}

fn parse_date(date_str: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            date_str
        ))
    })
}

fn parse_date_or_today(date_str: Option<&str>) -> ExpenseResult<NaiveDate> {
    match date_str {
        Some(date_str) => parse_date(date_str),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$42.50").unwrap().cents(), 4250);
        assert!(parse_amount("abc").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("15/01/2024").is_err());
    }

    #[test]
    fn test_today_is_default() {
        let today = chrono::Local::now().date_naive();
        let parsed = parse_date_or_today(None).unwrap();
        assert_eq!(parsed.year(), today.year());
    }

    #[test]
    fn test_handle_add_then_delete() {
        let store = ExpenseStore::open_in_memory().unwrap();
        let settings = Settings::default();

        handle_expense_command(
            &store,
            &settings,
            ExpenseCommands::Add {
                amount: "12.00".into(),
                category: None,
                date: Some("2024-03-01".into()),
                description: Some("Bagels".into()),
            },
        )
        .unwrap();

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].category, settings.default_category);

        // without --force nothing is deleted
        handle_expense_command(
            &store,
            &settings,
            ExpenseCommands::Delete {
                id: all[0].id.to_string(),
                force: false,
            },
        )
        .unwrap();
        assert_eq!(store.count().unwrap(), 1);

        handle_expense_command(
            &store,
            &settings,
            ExpenseCommands::Delete {
                id: all[0].id.to_string(),
                force: true,
            },
        )
        .unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_handle_show_missing() {
        let store = ExpenseStore::open_in_memory().unwrap();
        let err = handle_expense_command(
            &store,
            &Settings::default(),
            ExpenseCommands::Show { id: "99".into() },
        )
        .unwrap_err();

        assert!(err.is_not_found());
    }
}
