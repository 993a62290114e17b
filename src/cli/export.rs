//! CLI command for data export
//!
//! Writes every expense to a file in the chosen format.

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{csv, json, yaml};
use crate::storage::ExpenseStore;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per expense)
    Csv,
    /// JSON format (expenses plus metadata)
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command(store: &ExpenseStore, args: ExportArgs) -> ExpenseResult<()> {
    let file = File::create(&args.output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => csv::export_expenses_csv(store, &mut writer)?,
        ExportFormat::Json => json::export_full_json(store, &mut writer, args.pretty)?,
        ExportFormat::Yaml => yaml::export_full_yaml(store, &mut writer)?,
    }
    writer.flush()?;

    let count = store.count()?;
    tracing::info!(format = ?args.format, count, path = %args.output.display(), "Exported expenses");
    println!("Exported {} expenses to: {}", count, args.output.display());

    Ok(())
}
