//! Report formatting utilities for terminal output
//!
//! Renders the spending breakdown and monthly totals as text.

use crate::reports::{MonthlyReport, SpendingReport};

use super::expense::DisplayOptions;
use super::truncate;

const BAR_WIDTH: usize = 20;

/// Format the spending breakdown, listing at most `top_n` categories
pub fn format_spending_report(
    report: &SpendingReport,
    top_n: usize,
    options: &DisplayOptions,
) -> String {
    let symbol = &options.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!(
        "Total: {}  ({} expenses)\n",
        report.total_spending.format_with_symbol(symbol),
        report.expense_count
    ));

    if report.is_empty() {
        return output;
    }

    output.push_str(&separator(60));
    output.push('\n');

    let top = report.top(top_n);
    let max = top.first().map(|c| c.total.cents() as f64).unwrap_or(0.0);

    for entry in top {
        output.push_str(&format!(
            "{:<16} {:>12} {:>6} {}\n",
            truncate(&entry.category, 16),
            entry.total.format_with_symbol(symbol),
            format_percentage(entry.percentage),
            format_bar(entry.total.cents() as f64, max, BAR_WIDTH)
        ));
    }

    let hidden = report.categories.len().saturating_sub(top.len());
    if hidden > 0 {
        output.push_str(&format!(
            "{:<16} {:>12}\n",
            format!("({} more)", hidden),
            report.remainder_after(top.len()).format_with_symbol(symbol)
        ));
    }

    output
}

/// Format twelve month totals with a bar chart
pub fn format_monthly_report(report: &MonthlyReport, options: &DisplayOptions) -> String {
    let symbol = &options.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!("Monthly spending for {}\n", report.year));
    output.push_str(&separator(44));
    output.push('\n');

    let max = report
        .months
        .iter()
        .map(|m| m.total.cents())
        .max()
        .unwrap_or(0) as f64;

    for entry in &report.months {
        output.push_str(&format!(
            "{} {:>12} {}\n",
            entry.month.short_name(),
            entry.total.format_with_symbol(symbol),
            format_bar(entry.total.cents() as f64, max, BAR_WIDTH)
        ));
    }

    output.push_str(&separator(44));
    output.push('\n');
    output.push_str(&format!(
        "Year {:>12}\n",
        report.year_total.format_with_symbol(symbol)
    ));

    output
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
