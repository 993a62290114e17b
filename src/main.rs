use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_expense_command, handle_export_command, ExpenseCommands, ExportArgs,
};
use expense_tracker::config::{paths::DATA_DIR_ENV, ExpensePaths, Settings};
use expense_tracker::logging;
use expense_tracker::storage::{self, SCHEMA_VERSION};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Track personal expenses from the terminal",
    long_about = "A personal expense tracker. Records dated, categorized expenses \
                  in a local SQLite database and reports totals by category and month."
)]
struct Cli {
    /// Directory holding the settings, database, and logs
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Expense(ExpenseCommands),

    /// Export all expenses to a file
    Export(ExportArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;
    if !paths.is_initialized() {
        // First run: write defaults so they can be edited
        settings.save(&paths)?;
    }

    let _guard = logging::init(&settings.log_level, &paths)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => {
            let store = storage::open_store(&paths)?;
            handle_expense_command(&store, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            let store = storage::open_store(&paths)?;
            handle_export_command(&store, args)?;
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Database:       {}", paths.database_file().display());
            println!("Log directory:  {}", paths.log_dir().display());
            println!("Schema version: {}", SCHEMA_VERSION);
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Date format:      {}", settings.date_format);
            println!("  Default category: {}", settings.default_category);
            println!("  Summary top N:    {}", settings.summary_top_n);
            println!("  Log level:        {}", settings.log_level);
            println!("  Categories:       {}", settings.categories.join(", "));
        }
        None => {
            println!("Expense Tracker - personal expenses from the terminal");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses add 12.50 -c Food' to record an expense.");
        }
    }

    Ok(())
}
