//! Export module for the expense tracker
//!
//! Provides data export in multiple formats:
//! - CSV: spreadsheet-compatible, one row per expense
//! - JSON: machine-readable full export with metadata
//! - YAML: human-readable full export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_expenses_csv, write_expenses_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
