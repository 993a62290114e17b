//! YAML Export functionality
//!
//! Exports every expense to YAML for a human-readable backup.

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::FullExport;
use crate::storage::ExpenseStore;
use std::io::Write;

/// Export every expense to YAML
pub fn export_full_yaml<W: Write>(store: &ExpenseStore, writer: &mut W) -> ExpenseResult<()> {
    let export = FullExport::from_store(store)?;

    writeln!(writer, "# Expense Tracker Export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseInput, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let store = ExpenseStore::open_in_memory().unwrap();
        store
            .add(
                &ExpenseInput::new(
                    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                    "Healthcare",
                    Money::from_cents(1999),
                )
                .with_description("Pharmacy"),
            )
            .unwrap();

        let mut output = Vec::new();
        export_full_yaml(&store, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Expense Tracker Export"));
        assert!(yaml.contains("Healthcare"));
        assert!(yaml.contains("Pharmacy"));

        let body: String = yaml
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed: FullExport = serde_yaml::from_str(&body).unwrap();
        assert_eq!(parsed.expenses[0].amount.cents(), 1999);
    }
}
